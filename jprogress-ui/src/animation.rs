//! # Value Animation
//!
//! A view animates by asking the host's [`AnimationClock`] to interpolate
//! between two values over a duration. The clock calls back with each
//! intermediate value (a *tick*) and hands the view an [`AnimationHandle`] to
//! stop the run early.
//!
//! Ticks may be delivered on any thread. Callbacks must therefore be
//! `Send + Sync` and should only touch thread-safe state.
//!
//! [`ValueAnimator`] holds the interpolation itself so every clock computes
//! values the same way.

use std::{sync::Arc, time::Duration};

/// Receives each interpolated value.
pub type TickCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// What to interpolate and for how long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Value delivered first.
    pub start_value: f32,
    /// Value delivered last.
    pub end_value: f32,
    /// Time from the first to the last value, after the start delay.
    pub duration: Duration,
    /// Time before the first value.
    pub start_delay: Duration,
}

impl AnimationSpec {
    /// A run from `start_value` to `end_value` with no start delay.
    pub fn linear(start_value: f32, end_value: f32, duration: Duration) -> Self {
        Self {
            start_value,
            end_value,
            duration,
            start_delay: Duration::ZERO,
        }
    }

    /// Sets the start delay.
    pub fn with_start_delay(mut self, start_delay: Duration) -> Self {
        self.start_delay = start_delay;
        self
    }
}

/// Linear interpolation of an [`AnimationSpec`] over elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAnimator {
    spec: AnimationSpec,
}

impl ValueAnimator {
    /// Wraps a spec.
    pub fn new(spec: AnimationSpec) -> Self {
        Self { spec }
    }

    /// Delay plus duration.
    pub fn total_duration(&self) -> Duration {
        self.spec.start_delay + self.spec.duration
    }

    /// Progress through the run in `[0, 1]` after `elapsed` since start.
    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.spec.start_delay) else {
            return 0.0;
        };
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f32() / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// The value after `elapsed` since start.
    ///
    /// The end value is returned exactly once the run is over, so the last
    /// tick never carries rounding error.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let fraction = self.fraction_at(elapsed);
        if fraction >= 1.0 {
            return self.spec.end_value;
        }
        self.spec.start_value + (self.spec.end_value - self.spec.start_value) * fraction
    }

    /// Whether the run is over after `elapsed`.
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

/// Control over one running interpolation.
pub trait AnimationHandle: Send {
    /// `true` until the run completes or is ended.
    fn is_running(&self) -> bool;

    /// Jumps to the end value: delivers it as one final tick on the calling
    /// thread and stops the run. Does nothing when the run is already over.
    fn end(&mut self);

    /// Stops the run where it is without delivering another tick.
    fn cancel(&mut self);
}

/// The host's animation timing source.
pub trait AnimationClock: Send + Sync {
    /// Starts interpolating `spec`, calling `on_tick` with every value.
    ///
    /// When `spec.start_delay` is zero the start value is delivered
    /// synchronously, before this call returns.
    fn start(&self, spec: AnimationSpec, on_tick: TickCallback) -> Box<dyn AnimationHandle>;
}
