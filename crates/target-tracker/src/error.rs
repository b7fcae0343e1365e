use target_tracker_core::ProfileError;

/// Errors returned when building a tracker session.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("invalid target geometry: {0}")]
    Geometry(#[source] ProfileError),
    #[error("invalid camera profile: {0}")]
    Camera(#[source] ProfileError),
    #[error("invalid area filter window [{min}, {max}]")]
    AreaFilter { min: f64, max: f64 },
}
