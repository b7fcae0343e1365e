use serde::{Deserialize, Serialize};
use target_tracker_core::{CameraProfile, TargetGeometryProfile};
use target_tracker_scoring::{AreaFilter, OverlayStyle};

use crate::error::TrackerError;

/// Configuration of a tracker session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    pub geometry: TargetGeometryProfile,
    pub camera: CameraProfile,
    /// Drop particles outside this area-fraction window before scoring.
    ///
    /// `None` scores every particle handed in; segmentation backends that
    /// already filter by size leave it off.
    pub area_filter: Option<AreaFilter>,
    pub overlay: OverlayStyle,
}

impl TrackerParams {
    pub fn new(geometry: TargetGeometryProfile, camera: CameraProfile) -> Self {
        Self {
            geometry,
            camera,
            ..Self::default()
        }
    }

    pub fn with_area_filter(mut self, filter: AreaFilter) -> Self {
        self.area_filter = Some(filter);
        self
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        self.geometry.validate().map_err(TrackerError::Geometry)?;
        self.camera.validate().map_err(TrackerError::Camera)?;
        if let Some(f) = &self.area_filter {
            let ordered = f.min_fraction <= f.max_fraction;
            if !ordered {
                return Err(TrackerError::AreaFilter {
                    min: f.min_fraction,
                    max: f.max_fraction,
                });
            }
        }
        Ok(())
    }
}
