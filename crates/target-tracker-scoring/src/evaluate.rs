use target_tracker_core::{ParticleMeasurement, ScoredParticle, TargetGeometryProfile, TargetScores};

use crate::score::score_from_distance;

/// Fit of the bounding-box proportions to `profile.ideal_aspect_ratio`.
///
/// Axis convention: "width" is the vertical extent (`bottom - top`) and
/// "height" the horizontal extent (`right - left`), so the ratio compared
/// against the ideal is `vertical / horizontal`. Profiles are tuned against
/// this convention; do not swap it.
pub fn aspect_ratio_score(p: &ParticleMeasurement, profile: &TargetGeometryProfile) -> f64 {
    let height = p.bounds_right - p.bounds_left;
    let width = p.bounds_bottom - p.bounds_top;
    if height == 0.0 {
        return 0.0;
    }
    score_from_distance(width / height, profile.ideal_aspect_ratio)
}

/// Fit of the filled fraction of the bounding box to `profile.ideal_area_ratio`.
pub fn area_ratio_score(p: &ParticleMeasurement, profile: &TargetGeometryProfile) -> f64 {
    let bounding_box_area = p.bounds_area();
    if bounding_box_area == 0.0 {
        return 0.0;
    }
    score_from_distance(p.area / bounding_box_area, profile.ideal_area_ratio)
}

/// Mean of the two sub-scores; 1 only when both fits are perfect.
#[inline]
pub fn cumulative_score(aspect: f64, area: f64) -> f64 {
    (aspect + area) / 2.0
}

/// Score one particle. `index` is its position in the caller's list.
pub fn evaluate_particle(
    index: usize,
    particle: &ParticleMeasurement,
    profile: &TargetGeometryProfile,
) -> ScoredParticle {
    let aspect = aspect_ratio_score(particle, profile);
    let area = area_ratio_score(particle, profile);
    ScoredParticle {
        index,
        particle: *particle,
        scores: TargetScores {
            aspect,
            area,
            cumulative: cumulative_score(aspect, area),
        },
    }
}
