use log::debug;
use serde::{Deserialize, Serialize};
use target_tracker_core::{ParticleMeasurement, ScoredParticle, TargetGeometryProfile};

use crate::evaluate::evaluate_particle;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Outcome of ranking one frame's particles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Strictly best-scoring particle, `None` if nothing scored above 0.
    pub best: Option<ScoredParticle>,
    /// Every input particle with its scores, largest area first.
    pub scored: Vec<ScoredParticle>,
}

/// Input indices ordered by descending raw area; equal areas keep input order.
pub fn order_by_area(particles: &[ParticleMeasurement]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..particles.len()).collect();
    order.sort_by(|&a, &b| particles[b].area.total_cmp(&particles[a].area));
    order
}

/// Score all particles and pick the best one.
///
/// Particles are visited largest-area first and the best is replaced only on
/// a strictly greater cumulative score, so among equal scores the largest
/// (then earliest) particle wins.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(particles, profile), fields(particles = particles.len()))
)]
pub fn select_best(particles: &[ParticleMeasurement], profile: &TargetGeometryProfile) -> Selection {
    select_best_indexed(particles.iter().copied().enumerate(), profile)
}

/// Same as [`select_best`] for a pre-filtered list that carries the
/// particles' original indices.
pub fn select_best_indexed<I>(particles: I, profile: &TargetGeometryProfile) -> Selection
where
    I: IntoIterator<Item = (usize, ParticleMeasurement)>,
{
    let mut scored: Vec<ScoredParticle> = particles
        .into_iter()
        .map(|(index, p)| evaluate_particle(index, &p, profile))
        .collect();
    scored.sort_by(|a, b| b.particle.area.total_cmp(&a.particle.area));

    let mut best: Option<ScoredParticle> = None;
    let mut best_score = 0.0;
    for candidate in &scored {
        if candidate.cumulative_score() > best_score {
            best = Some(*candidate);
            best_score = candidate.cumulative_score();
        }
    }

    match &best {
        Some(b) => debug!(
            "selected particle #{} of {} (score {:.3}, aspect {:.3}, area {:.3})",
            b.index,
            scored.len(),
            b.scores.cumulative,
            b.scores.aspect,
            b.scores.area
        ),
        None => debug!("no target among {} particles", scored.len()),
    }

    Selection { best, scored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> TargetGeometryProfile {
        TargetGeometryProfile {
            ideal_aspect_ratio: 1.0,
            ideal_area_ratio: 0.5,
            target_physical_height: 1.0,
        }
    }

    /// Square box of side `side` at `(x, x)` filled to `fill` of its area.
    fn square(x: f64, side: f64, fill: f64) -> ParticleMeasurement {
        ParticleMeasurement::new(0.0, side * side * fill, x, x, x + side, x + side)
    }

    #[test]
    fn empty_input_has_no_best() {
        let sel = select_best(&[], &profile());
        assert!(sel.best.is_none());
        assert!(sel.scored.is_empty());
    }

    #[test]
    fn perfect_particle_scores_one() {
        let sel = select_best(&[square(0.0, 10.0, 0.5)], &profile());
        let best = sel.best.expect("best");
        assert_eq!(best.index, 0);
        assert_relative_eq!(best.scores.cumulative, 1.0);
    }

    #[test]
    fn higher_score_wins_regardless_of_order() {
        let good = square(0.0, 10.0, 0.5);
        let poor = square(50.0, 10.0, 0.9);
        assert_eq!(select_best(&[good, poor], &profile()).best.map(|b| b.index), Some(0));
        assert_eq!(select_best(&[poor, good], &profile()).best.map(|b| b.index), Some(1));
    }

    #[test]
    fn tie_goes_to_larger_area() {
        // Same shape, different size: identical scores.
        let small = square(0.0, 10.0, 0.75);
        let large = square(50.0, 20.0, 0.75);
        let sel = select_best(&[small, large], &profile());
        assert_relative_eq!(sel.scored[0].scores.cumulative, sel.scored[1].scores.cumulative);
        assert_eq!(sel.best.map(|b| b.index), Some(1));
    }

    #[test]
    fn tie_with_equal_area_keeps_input_order() {
        let a = square(0.0, 10.0, 0.75);
        let b = square(40.0, 10.0, 0.75);
        assert_eq!(select_best(&[a, b], &profile()).best.map(|b| b.index), Some(0));
    }

    #[test]
    fn all_zero_scores_yield_no_best() {
        let degenerate = ParticleMeasurement::new(0.0, 0.0, 5.0, 5.0, 5.0, 5.0);
        let sel = select_best(&[degenerate, degenerate], &profile());
        assert!(sel.best.is_none());
        assert_eq!(sel.scored.len(), 2);
    }

    #[test]
    fn scored_is_area_descending() {
        let ps = [square(0.0, 5.0, 0.5), square(0.0, 15.0, 0.5), square(0.0, 10.0, 0.5)];
        let sel = select_best(&ps, &profile());
        let idx: Vec<usize> = sel.scored.iter().map(|s| s.index).collect();
        assert_eq!(idx, vec![1, 2, 0]);
        assert_eq!(order_by_area(&ps), idx);
    }

    #[test]
    fn indexed_selection_keeps_caller_indices() {
        let sel = select_best_indexed([(4, square(0.0, 10.0, 0.5))], &profile());
        assert_eq!(sel.best.map(|b| b.index), Some(4));
    }
}
