use std::sync::Arc;

use parking_lot::RwLock;
use target_tracker_core::ParticleMeasurement;

use crate::error::TrackerError;
use crate::params::TrackerParams;
use crate::session::{evaluate, log_transition, EvaluationResult, SessionState};

/// A tracker session shared between a capture thread and readers.
///
/// The writer evaluates frames outside the lock and only swaps the published
/// `Arc<EvaluationResult>`; readers clone the `Arc` and never observe a
/// partially written result.
#[derive(Debug)]
pub struct SharedSession {
    params: TrackerParams,
    latest: RwLock<Option<Arc<EvaluationResult>>>,
}

impl SharedSession {
    pub fn new(params: TrackerParams) -> Result<Self, TrackerError> {
        params.validate()?;
        Ok(Self {
            params,
            latest: RwLock::new(None),
        })
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Evaluate a frame and publish the result.
    pub fn evaluate_frame(
        &self,
        particles: &[ParticleMeasurement],
        image_width: u32,
        image_height: u32,
    ) -> Arc<EvaluationResult> {
        let result = Arc::new(evaluate(&self.params, particles, image_width, image_height));
        let previous = self.latest.write().replace(Arc::clone(&result));
        log_transition(state_of(previous.as_deref()), &result);
        result
    }

    /// Most recently published result.
    pub fn latest(&self) -> Option<Arc<EvaluationResult>> {
        self.latest.read().clone()
    }

    pub fn state(&self) -> SessionState {
        state_of(self.latest().as_deref())
    }

    pub fn estimated_range(&self) -> f64 {
        self.latest().map_or(0.0, |r| r.range)
    }
}

fn state_of(result: Option<&EvaluationResult>) -> SessionState {
    result.map_or(SessionState::Idle, EvaluationResult::state)
}
