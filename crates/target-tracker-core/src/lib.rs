//! Core types for vision target tracking.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any camera, segmentation backend or image type: particles are
//! plain measurement records produced by whatever connectivity pass the
//! caller runs.

mod logger;
mod particle;
mod profile;

pub use particle::{ParticleMeasurement, ScoredParticle, TargetScores};
pub use profile::{CameraProfile, ProfileError, TargetGeometryProfile};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
