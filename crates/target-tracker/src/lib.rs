//! High-level facade for the `target-tracker-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core types and the scoring functions,
//! - [`TrackerSession`], which runs one scoring cycle per frame and keeps the
//!   last result for querying between cycles,
//! - [`SharedSession`], the same cycle behind a lock for a capture thread
//!   that writes and any number of reader threads,
//! - (feature `cli`) the `target-tracker` binary that evaluates a JSON frame.
//!
//! ## Quickstart
//!
//! ```
//! use target_tracker::{ParticleMeasurement, TrackerParams, TrackerSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TrackerSession::new(TrackerParams::default())?;
//! let particles = [ParticleMeasurement::new(0.03, 9000.0, 100.0, 270.0, 200.0, 370.0)];
//!
//! let result = session.evaluate_frame(&particles, 640, 480);
//! println!("range: {:.2}, offset: {:?}", result.range, result.offset);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `target_tracker::core`: particle measurements and profiles.
//! - `target_tracker::scoring`: shape scores, selection, range, overlay geometry.

mod error;
mod params;
mod session;
mod shared;

pub use target_tracker_core as core;
pub use target_tracker_scoring as scoring;

pub use target_tracker_core::{
    CameraProfile, ParticleMeasurement, ProfileError, ScoredParticle, TargetGeometryProfile,
    TargetScores,
};
pub use target_tracker_scoring::{AreaFilter, CenterOffset, Overlay, OverlayStyle, PixelRect};

pub use error::TrackerError;
pub use params::TrackerParams;
pub use session::{evaluate, EvaluationResult, SessionState, TrackerSession};
pub use shared::SharedSession;
