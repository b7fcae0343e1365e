use serde::{Deserialize, Serialize};
use target_tracker_core::ParticleMeasurement;

/// Keeps particles whose `area_fraction` lies in `[min_fraction, max_fraction]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaFilter {
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for AreaFilter {
    /// At least 1% of the image.
    fn default() -> Self {
        Self {
            min_fraction: 0.01,
            max_fraction: 1.0,
        }
    }
}

impl AreaFilter {
    #[inline]
    pub fn accepts(&self, particle: &ParticleMeasurement) -> bool {
        (self.min_fraction..=self.max_fraction).contains(&particle.area_fraction)
    }

    /// Accepted particles paired with their index in `particles`.
    pub fn apply<'a>(
        &'a self,
        particles: &'a [ParticleMeasurement],
    ) -> impl Iterator<Item = (usize, ParticleMeasurement)> + 'a {
        particles
            .iter()
            .copied()
            .enumerate()
            .filter(move |(_, p)| self.accepts(p))
    }
}
