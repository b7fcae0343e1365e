use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Measurements of one connected region in a binary frame.
///
/// Bounds are pixel coordinates with rows growing downwards. Boxes with zero
/// width or height are legal; every consumer treats them as the lowest
/// possible score instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleMeasurement {
    /// Particle area as a fraction of the whole image (0..1).
    #[serde(default)]
    pub area_fraction: f64,
    /// Filled pixel area.
    pub area: f64,
    pub bounds_top: f64,
    pub bounds_left: f64,
    pub bounds_bottom: f64,
    pub bounds_right: f64,
}

impl ParticleMeasurement {
    pub fn new(area_fraction: f64, area: f64, top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            area_fraction,
            area,
            bounds_top: top,
            bounds_left: left,
            bounds_bottom: bottom,
            bounds_right: right,
        }
    }

    /// Horizontal extent of the bounding box (`right - left`).
    #[inline]
    pub fn bounds_width(&self) -> f64 {
        self.bounds_right - self.bounds_left
    }

    /// Vertical extent of the bounding box (`bottom - top`).
    #[inline]
    pub fn bounds_height(&self) -> f64 {
        self.bounds_bottom - self.bounds_top
    }

    #[inline]
    pub fn bounds_area(&self) -> f64 {
        self.bounds_height() * self.bounds_width()
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.bounds_left + self.bounds_width() / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.bounds_top + self.bounds_height() / 2.0
    }

    /// Bounding-box center in image coordinates.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.center_x(), self.center_y())
    }
}

/// Shape-fit scores of a particle, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetScores {
    pub aspect: f64,
    pub area: f64,
    pub cumulative: f64,
}

/// An evaluated particle: the untouched measurement plus its scores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredParticle {
    /// Position of the particle in the caller's input list.
    pub index: usize,
    pub particle: ParticleMeasurement,
    pub scores: TargetScores,
}

impl ScoredParticle {
    #[inline]
    pub fn cumulative_score(&self) -> f64 {
        self.scores.cumulative
    }

    pub fn center(&self) -> Point2<f64> {
        self.particle.center()
    }
}
