//! Target scoring and selection over segmented particles.
//!
//! Pipeline for one frame:
//! 1. (optional) drop particles outside an area-fraction window,
//! 2. score every particle against the ideal target geometry
//!    (aspect-ratio fit, area-ratio fit, their mean),
//! 3. scan particles largest-first and keep the strictly best score,
//! 4. derive the normalized center offset and the pinhole-model range of the
//!    winner,
//! 5. (optional) build overlay geometry for a renderer.
//!
//! Every function here is pure. Degenerate inputs (empty lists, zero-sized
//! boxes, zero ideal ratios) produce zero scores or ranges, never errors.

mod evaluate;
mod filter;
mod overlay;
mod range;
mod score;
mod select;

pub use evaluate::{area_ratio_score, aspect_ratio_score, cumulative_score, evaluate_particle};
pub use filter::AreaFilter;
pub use overlay::{bounding_box, crosshair, Overlay, OverlayStyle, PixelRect};
pub use range::{center_offset, estimate_range, CenterOffset};
pub use score::score_from_distance;
pub use select::{order_by_area, select_best, select_best_indexed, Selection};
