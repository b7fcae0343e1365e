use serde::{Deserialize, Serialize};
use target_tracker_core::{CameraProfile, ParticleMeasurement, TargetGeometryProfile};

/// Target center relative to the image center, normalized to `[-1, 1]` at
/// the image edges. `+dx` is right, `+dy` is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterOffset {
    pub dx: f64,
    pub dy: f64,
}

impl CenterOffset {
    pub const ZERO: CenterOffset = CenterOffset { dx: 0.0, dy: 0.0 };
}

/// Normalized offset of the target center from the image center.
///
/// No target, or a zero image dimension, yields 0 on the affected axis.
pub fn center_offset(
    best: Option<&ParticleMeasurement>,
    image_width: f64,
    image_height: f64,
) -> CenterOffset {
    let Some(best) = best else {
        return CenterOffset::ZERO;
    };
    let half_w = image_width / 2.0;
    let half_h = image_height / 2.0;
    CenterOffset {
        dx: if half_w != 0.0 {
            (best.center_x() - half_w) / half_w
        } else {
            0.0
        },
        // image rows grow downwards
        dy: if half_h != 0.0 {
            -(best.center_y() - half_h) / half_h
        } else {
            0.0
        },
    }
}

/// Horizontal distance to the target from its apparent pixel height.
///
/// Pinhole model: the target's pixel height subtends a fraction of the
/// vertical field of view, which gives the line-of-sight distance
/// `H * image_h / (2 * h_px * tan(fov / 2))`; that is projected onto the
/// ground plane with `cos(elevation)`. Assumes a head-on view; oblique views
/// overestimate the range.
///
/// Returns 0 for no target, a zero pixel height, or a non-finite result.
pub fn estimate_range(
    best: Option<&ParticleMeasurement>,
    image_height: f64,
    geometry: &TargetGeometryProfile,
    camera: &CameraProfile,
) -> f64 {
    let Some(best) = best else {
        return 0.0;
    };
    let target_height_px = best.bounds_height();
    if target_height_px == 0.0 {
        return 0.0;
    }
    let half_fov = (camera.vertical_fov_deg / 2.0).to_radians();
    let line_of_sight = geometry.target_physical_height * image_height
        / (2.0 * target_height_px * half_fov.tan());
    let range = line_of_sight * camera.elevation_deg.to_radians().cos();
    if range.is_finite() {
        range
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn particle(top: f64, left: f64, bottom: f64, right: f64) -> ParticleMeasurement {
        ParticleMeasurement::new(0.0, 1.0, top, left, bottom, right)
    }

    #[test]
    fn centered_particle_has_zero_offset() {
        let p = particle(140.0, 220.0, 340.0, 420.0);
        let off = center_offset(Some(&p), 640.0, 480.0);
        assert_relative_eq!(off.dx, 0.0);
        assert_relative_eq!(off.dy, 0.0);
    }

    #[test]
    fn corners_map_to_unit_offsets() {
        let top_right = particle(0.0, 640.0, 0.0, 640.0);
        let off = center_offset(Some(&top_right), 640.0, 480.0);
        assert_relative_eq!(off.dx, 1.0);
        assert_relative_eq!(off.dy, 1.0);

        let bottom_left = particle(480.0, 0.0, 480.0, 0.0);
        let off = center_offset(Some(&bottom_left), 640.0, 480.0);
        assert_relative_eq!(off.dx, -1.0);
        assert_relative_eq!(off.dy, -1.0);
    }

    #[test]
    fn no_target_gives_zero_offset_and_range() {
        assert_eq!(center_offset(None, 640.0, 480.0), CenterOffset::ZERO);
        let range = estimate_range(
            None,
            480.0,
            &TargetGeometryProfile::default(),
            &CameraProfile::default(),
        );
        assert_eq!(range, 0.0);
    }

    #[test]
    fn zero_image_size_gives_zero_offset() {
        let p = particle(10.0, 10.0, 20.0, 20.0);
        assert_eq!(center_offset(Some(&p), 0.0, 0.0), CenterOffset::ZERO);
    }

    #[test]
    fn zero_pixel_height_gives_zero_range() {
        let flat = particle(100.0, 0.0, 100.0, 50.0);
        let range = estimate_range(
            Some(&flat),
            480.0,
            &TargetGeometryProfile::default(),
            &CameraProfile::default(),
        );
        assert_eq!(range, 0.0);
    }

    #[test]
    fn range_matches_pinhole_model() {
        // 90 degree FOV: tan(45) = 1, so line of sight = H * img_h / (2 * h_px).
        let geometry = TargetGeometryProfile {
            target_physical_height: 2.0,
            ..TargetGeometryProfile::default()
        };
        let level = CameraProfile {
            vertical_fov_deg: 90.0,
            elevation_deg: 0.0,
        };
        let p = particle(0.0, 0.0, 50.0, 10.0);
        assert_relative_eq!(
            estimate_range(Some(&p), 500.0, &geometry, &level),
            10.0,
            epsilon = 1e-12
        );

        let tilted = CameraProfile {
            elevation_deg: 60.0,
            ..level
        };
        assert_relative_eq!(
            estimate_range(Some(&p), 500.0, &geometry, &tilted),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn range_halves_when_target_doubles() {
        let geometry = TargetGeometryProfile::default();
        let camera = CameraProfile::default();
        let near = estimate_range(Some(&particle(0.0, 0.0, 100.0, 10.0)), 480.0, &geometry, &camera);
        let far = estimate_range(Some(&particle(0.0, 0.0, 50.0, 10.0)), 480.0, &geometry, &camera);
        assert_relative_eq!(far, 2.0 * near, max_relative = 1e-12);
    }

    #[test]
    fn zero_fov_is_not_finite_and_reports_zero() {
        let camera = CameraProfile {
            vertical_fov_deg: 0.0,
            elevation_deg: 0.0,
        };
        let p = particle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            estimate_range(Some(&p), 480.0, &TargetGeometryProfile::default(), &camera),
            0.0
        );
    }
}
