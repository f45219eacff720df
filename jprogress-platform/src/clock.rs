//! An [`AnimationClock`] that drives every run on its own ticker thread.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use jprogress_ui::{AnimationClock, AnimationHandle, AnimationSpec, TickCallback, ValueAnimator};
use parking_lot::Mutex;
use tracing::{debug, error, trace};

/// Roughly one frame at 60Hz.
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Runs animations on background threads, one tick per frame interval.
///
/// Ticks arrive on the ticker thread, so views must route their redraws
/// through a deferred request. Ending a run delivers its end value on the
/// calling thread.
#[derive(Debug, Clone, Copy)]
pub struct ThreadedClock {
    frame_interval: Duration,
}

impl Default for ThreadedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadedClock {
    /// A clock ticking about sixty times a second.
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// A clock ticking every `frame_interval`.
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            frame_interval: frame_interval.max(Duration::from_millis(1)),
        }
    }

    /// Time between ticks.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

#[derive(Default)]
struct RunState {
    finished: bool,
}

impl AnimationClock for ThreadedClock {
    fn start(&self, spec: AnimationSpec, on_tick: TickCallback) -> Box<dyn AnimationHandle> {
        let animator = ValueAnimator::new(spec);
        let state = Arc::new(Mutex::new(RunState::default()));

        if spec.start_delay.is_zero() {
            on_tick(spec.start_value);
        }

        let frame_interval = self.frame_interval;
        let ticker_state = state.clone();
        let ticker_tick = on_tick.clone();
        let spawned = thread::Builder::new()
            .name("jprogress-clock".into())
            .spawn(move || run_ticker(animator, frame_interval, ticker_state, ticker_tick));

        let thread = match spawned {
            Ok(thread) => Some(thread),
            Err(err) => {
                error!(%err, "failed to spawn animation thread, jumping to end value");
                state.lock().finished = true;
                on_tick(spec.end_value);
                None
            }
        };

        Box::new(ThreadedHandle {
            state,
            end_value: spec.end_value,
            on_tick,
            thread,
        })
    }
}

fn run_ticker(
    animator: ValueAnimator,
    frame_interval: Duration,
    state: Arc<Mutex<RunState>>,
    on_tick: TickCallback,
) {
    let started = Instant::now();
    loop {
        thread::sleep(frame_interval);
        // Ticks are delivered under the lock so a concurrent `end` can never
        // be overwritten by a stale frame.
        let mut state = state.lock();
        if state.finished {
            trace!("animation stopped before completion");
            return;
        }
        let elapsed = started.elapsed();
        on_tick(animator.value_at(elapsed));
        if animator.is_finished_at(elapsed) {
            state.finished = true;
            debug!(elapsed_ms = elapsed.as_millis() as u64, "animation finished");
            return;
        }
    }
}

struct ThreadedHandle {
    state: Arc<Mutex<RunState>>,
    end_value: f32,
    on_tick: TickCallback,
    thread: Option<JoinHandle<()>>,
}

impl ThreadedHandle {
    /// Marks the run finished. Returns whether it was still running.
    fn finish(&self, deliver_end: bool) -> bool {
        let mut state = self.state.lock();
        if state.finished {
            return false;
        }
        state.finished = true;
        if deliver_end {
            (self.on_tick)(self.end_value);
        }
        true
    }

    fn join(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        if thread.thread().id() == thread::current().id() {
            return;
        }
        if thread.join().is_err() {
            error!("animation thread panicked");
        }
    }
}

impl AnimationHandle for ThreadedHandle {
    fn is_running(&self) -> bool {
        !self.state.lock().finished
    }

    fn end(&mut self) {
        self.finish(true);
        self.join();
    }

    fn cancel(&mut self) {
        if self.finish(false) {
            trace!("animation cancelled");
        }
        self.join();
    }
}

impl Drop for ThreadedHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<f32>>>, TickCallback) {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = values.clone();
        let on_tick: TickCallback = Arc::new(move |value| sink.lock().push(value));
        (values, on_tick)
    }

    fn wait_until_idle(handle: &dyn AnimationHandle) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while handle.is_running() {
            assert!(Instant::now() < deadline, "animation never finished");
            thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn runs_to_end_value_monotonically() {
        let clock = ThreadedClock::with_frame_interval(Duration::from_millis(2));
        let (values, on_tick) = recorder();
        let handle = clock.start(
            AnimationSpec::linear(0.0, 80.0, Duration::from_millis(60)),
            on_tick,
        );
        wait_until_idle(handle.as_ref());

        let values = values.lock();
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&80.0));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn end_jumps_to_end_value() {
        let clock = ThreadedClock::with_frame_interval(Duration::from_millis(2));
        let (values, on_tick) = recorder();
        let mut handle = clock.start(
            AnimationSpec::linear(50.0, 0.0, Duration::from_secs(30)),
            on_tick,
        );
        thread::sleep(Duration::from_millis(20));

        handle.end();
        assert!(!handle.is_running());
        let delivered = values.lock().len();
        assert_eq!(values.lock().last(), Some(&0.0));

        thread::sleep(Duration::from_millis(20));
        assert_eq!(values.lock().len(), delivered);
    }

    #[test]
    fn cancel_stops_without_end_value() {
        let clock = ThreadedClock::with_frame_interval(Duration::from_millis(2));
        let (values, on_tick) = recorder();
        let mut handle = clock.start(
            AnimationSpec::linear(0.0, 100.0, Duration::from_secs(30)),
            on_tick,
        );
        thread::sleep(Duration::from_millis(10));

        handle.cancel();
        assert!(!handle.is_running());
        let delivered = values.lock().clone();
        assert!(delivered.iter().all(|value| *value < 100.0));

        thread::sleep(Duration::from_millis(20));
        assert_eq!(*values.lock(), delivered);
    }

    #[test]
    fn end_after_finish_is_noop() {
        let clock = ThreadedClock::with_frame_interval(Duration::from_millis(1));
        let (values, on_tick) = recorder();
        let mut handle = clock.start(AnimationSpec::linear(0.0, 1.0, Duration::ZERO), on_tick);
        wait_until_idle(handle.as_ref());
        let delivered = values.lock().len();

        handle.end();
        assert_eq!(values.lock().len(), delivered);
    }

    #[test]
    fn frame_interval_has_floor() {
        let clock = ThreadedClock::with_frame_interval(Duration::ZERO);
        assert_eq!(clock.frame_interval(), Duration::from_millis(1));
    }
}
