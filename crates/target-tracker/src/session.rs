use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use target_tracker_core::{ParticleMeasurement, ScoredParticle};
use target_tracker_scoring::{
    center_offset, estimate_range, select_best, select_best_indexed, CenterOffset, Overlay,
    OverlayStyle, Selection,
};

use crate::error::TrackerError;
use crate::params::TrackerParams;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Where a session stands after its latest cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No frame evaluated yet.
    Idle,
    HasResult,
    NoTarget,
}

/// Output of one tracking cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub best: Option<ScoredParticle>,
    /// All evaluated particles, largest area first.
    pub scored: Vec<ScoredParticle>,
    pub offset: CenterOffset,
    /// Horizontal range in the unit of `target_physical_height`; 0 without a target.
    pub range: f64,
    pub image_width: u32,
    pub image_height: u32,
}

impl EvaluationResult {
    pub fn has_target(&self) -> bool {
        self.best.is_some()
    }

    pub fn best_particle(&self) -> Option<&ParticleMeasurement> {
        self.best.as_ref().map(|b| &b.particle)
    }

    /// Bounding boxes for every particle plus a crosshair on the best one.
    pub fn overlay(&self, style: &OverlayStyle) -> Overlay {
        Overlay::build(&self.scored, self.best.as_ref(), style)
    }

    pub(crate) fn state(&self) -> SessionState {
        if self.has_target() {
            SessionState::HasResult
        } else {
            SessionState::NoTarget
        }
    }
}

/// Run one scoring cycle without touching any session state.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(params, particles),
        fields(particles = particles.len())
    )
)]
pub fn evaluate(
    params: &TrackerParams,
    particles: &[ParticleMeasurement],
    image_width: u32,
    image_height: u32,
) -> EvaluationResult {
    let Selection { best, scored } = match &params.area_filter {
        Some(filter) => select_best_indexed(filter.apply(particles), &params.geometry),
        None => select_best(particles, &params.geometry),
    };

    let best_particle = best.as_ref().map(|b| &b.particle);
    let offset = center_offset(best_particle, image_width as f64, image_height as f64);
    let range = estimate_range(
        best_particle,
        image_height as f64,
        &params.geometry,
        &params.camera,
    );

    EvaluationResult {
        best,
        scored,
        offset,
        range,
        image_width,
        image_height,
    }
}

/// Tracking session: one evaluation per frame, last result cached.
#[derive(Clone, Debug)]
pub struct TrackerSession {
    params: TrackerParams,
    last: Option<Arc<EvaluationResult>>,
}

impl TrackerSession {
    pub fn new(params: TrackerParams) -> Result<Self, TrackerError> {
        params.validate()?;
        Ok(Self { params, last: None })
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Evaluate one frame's particles and make the result the session's latest.
    ///
    /// Identical input produces an identical result and state.
    pub fn evaluate_frame(
        &mut self,
        particles: &[ParticleMeasurement],
        image_width: u32,
        image_height: u32,
    ) -> Arc<EvaluationResult> {
        let result = Arc::new(evaluate(&self.params, particles, image_width, image_height));
        log_transition(self.state(), &result);
        self.last = Some(Arc::clone(&result));
        result
    }

    pub fn state(&self) -> SessionState {
        self.last
            .as_deref()
            .map_or(SessionState::Idle, EvaluationResult::state)
    }

    pub fn last_result(&self) -> Option<Arc<EvaluationResult>> {
        self.last.clone()
    }

    pub fn best_target(&self) -> Option<&ScoredParticle> {
        self.last.as_deref().and_then(|r| r.best.as_ref())
    }

    /// Latest range, 0 when there is no target.
    pub fn estimated_range(&self) -> f64 {
        self.last.as_deref().map_or(0.0, |r| r.range)
    }

    /// Latest offset, `(0, 0)` when there is no target.
    pub fn center_offset(&self) -> CenterOffset {
        self.last.as_deref().map_or(CenterOffset::ZERO, |r| r.offset)
    }
}

pub(crate) fn log_transition(previous: SessionState, result: &EvaluationResult) {
    let next = result.state();
    if next != previous {
        match (&result.best, next) {
            (Some(best), _) => info!(
                "target acquired: particle #{} range {:.2} offset ({:+.3}, {:+.3})",
                best.index, result.range, result.offset.dx, result.offset.dy
            ),
            (None, _) if previous == SessionState::HasResult => info!("target lost"),
            _ => debug!("no target in first frame"),
        }
    } else {
        debug!(
            "frame {}x{}: {} particles, range {:.2}",
            result.image_width,
            result.image_height,
            result.scored.len(),
            result.range
        );
    }
}
