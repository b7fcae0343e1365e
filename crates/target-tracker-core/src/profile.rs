use serde::{Deserialize, Serialize};

/// Invalid profile configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("vertical field of view must lie in (0, 180) degrees (got {0})")]
    FieldOfView(f64),
    #[error("camera elevation must be finite (got {0})")]
    Elevation(f64),
}

/// Shape and size of the ideal target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetGeometryProfile {
    /// Ideal bounding-box ratio, compared against `(bottom-top)/(right-left)`.
    pub ideal_aspect_ratio: f64,
    /// Ideal filled-area to bounding-box-area ratio.
    pub ideal_area_ratio: f64,
    /// Real-world target height; ranges are reported in the same unit.
    pub target_physical_height: f64,
}

impl Default for TargetGeometryProfile {
    /// 20x14 in. U-shaped retro-reflective target, heights in feet.
    fn default() -> Self {
        Self {
            ideal_aspect_ratio: 20.0 / 14.0,
            ideal_area_ratio: 88.0 / 280.0,
            target_physical_height: 14.0 / 12.0,
        }
    }
}

impl TargetGeometryProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        positive("ideal_aspect_ratio", self.ideal_aspect_ratio)?;
        positive("ideal_area_ratio", self.ideal_area_ratio)?;
        positive("target_physical_height", self.target_physical_height)
    }
}

/// Camera optics and mounting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProfile {
    pub vertical_fov_deg: f64,
    /// Mounting tilt relative to horizontal.
    pub elevation_deg: f64,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            vertical_fov_deg: 39.935,
            elevation_deg: 45.0,
        }
    }
}

impl CameraProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fov = self.vertical_fov_deg;
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Err(ProfileError::FieldOfView(fov));
        }
        if !self.elevation_deg.is_finite() {
            return Err(ProfileError::Elevation(self.elevation_deg));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ProfileError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ProfileError::NonPositive { name, value })
    }
}
