use std::sync::Arc;

use jprogress_ui::{AnimationClock, AnimationHandle, AnimationSpec, TickCallback};
use tracing::debug;

/// Whether a progress animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Nothing running.
    Idle,
    /// A run is delivering ticks.
    Running,
}

/// Owns at most one clock subscription at a time.
pub(super) struct ProgressAnimator {
    clock: Arc<dyn AnimationClock>,
    handle: Option<Box<dyn AnimationHandle>>,
}

impl ProgressAnimator {
    pub(super) fn new(clock: Arc<dyn AnimationClock>) -> Self {
        Self {
            clock,
            handle: None,
        }
    }

    pub(super) fn state(&self) -> AnimationState {
        match &self.handle {
            Some(handle) if handle.is_running() => AnimationState::Running,
            _ => AnimationState::Idle,
        }
    }

    /// Starts a new run. The previous run must already be finished; callers
    /// end it first so its final value is in place before `spec` is built.
    pub(super) fn start(&mut self, spec: AnimationSpec, on_tick: TickCallback) {
        debug_assert_eq!(self.state(), AnimationState::Idle);
        debug!(
            from = spec.start_value,
            to = spec.end_value,
            duration_ms = spec.duration.as_millis() as u64,
            "starting progress animation"
        );
        self.handle = Some(self.clock.start(spec, on_tick));
    }

    /// Jumps the current run to its end value. No-op when idle.
    pub(super) fn end(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            if handle.is_running() {
                debug!("ending progress animation early");
            }
            handle.end();
        }
    }

    /// Drops the current run without a final tick.
    pub(super) fn cancel(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl Drop for ProgressAnimator {
    fn drop(&mut self) {
        self.cancel();
    }
}
