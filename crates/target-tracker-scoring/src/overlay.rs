//! Annotation geometry for a frame renderer.
//!
//! Nothing here touches pixels; a renderer draws the rectangles as it sees
//! fit (outlined boxes per particle, filled bars for the crosshair).

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use target_tracker_core::{ParticleMeasurement, ScoredParticle};

/// Integer pixel rectangle, `top`/`left` anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub top: i32,
    pub left: i32,
    pub height: i32,
    pub width: i32,
}

/// Crosshair dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Bar length.
    pub crosshair_size: i32,
    /// Bar thickness.
    pub crosshair_width: i32,
    /// Gap between the center and the inner end of each bar.
    pub crosshair_spread: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            crosshair_size: 20,
            crosshair_width: 5,
            crosshair_spread: 5,
        }
    }
}

/// Everything a renderer needs to annotate one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub boxes: Vec<PixelRect>,
    /// Right, left, top, bottom bars around the best target.
    pub crosshair: Option<[PixelRect; 4]>,
}

impl Overlay {
    pub fn build(scored: &[ScoredParticle], best: Option<&ScoredParticle>, style: &OverlayStyle) -> Self {
        Self {
            boxes: scored.iter().map(|s| bounding_box(&s.particle)).collect(),
            crosshair: best.map(|b| crosshair(b.center(), style)),
        }
    }
}

/// Bounding box of a particle, truncated to whole pixels.
pub fn bounding_box(p: &ParticleMeasurement) -> PixelRect {
    PixelRect {
        top: p.bounds_top as i32,
        left: p.bounds_left as i32,
        height: p.bounds_height() as i32,
        width: p.bounds_width() as i32,
    }
}

/// Four bars around `center` (truncated to whole pixels), ordered
/// right, left, top, bottom.
pub fn crosshair(center: Point2<f64>, style: &OverlayStyle) -> [PixelRect; 4] {
    let x = center.x as i32;
    let y = center.y as i32;
    let OverlayStyle {
        crosshair_size: size,
        crosshair_width: width,
        crosshair_spread: spread,
    } = *style;
    let half = width / 2;

    let horizontal = |left| PixelRect {
        top: y - half,
        left,
        height: width,
        width: size,
    };
    let vertical = |top| PixelRect {
        top,
        left: x - half,
        height: size,
        width,
    };

    [
        horizontal(x + spread),
        horizontal(x - spread - size),
        vertical(y - spread - size),
        vertical(y + spread),
    ]
}
