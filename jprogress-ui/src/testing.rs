//! Test doubles for the host contract.
//!
//! Enabled with the `testing` feature. None of these talk to a real display:
//! [`RecordingCanvas`] captures draw calls, [`ManualClock`] only advances
//! when told to, and [`CountingInvalidator`] counts redraw requests.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use parking_lot::Mutex;

use crate::{
    AnimationClock, AnimationHandle, AnimationSpec, Canvas, DrawCommand, FontMetrics, Invalidator,
    Paint, Rect, TickCallback, ValueAnimator,
};

/// A canvas that records every call as a [`DrawCommand`].
///
/// Text is measured as if every character were `char_width × text_size`
/// wide, with ascent and descent proportional to the text size.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    /// Calls in the order they were made.
    pub commands: Vec<DrawCommand>,
    /// Advance per character, as a fraction of the text size.
    pub char_width: f32,
    /// Ascent as a fraction of the text size (negative).
    pub ascent: f32,
    /// Descent as a fraction of the text size.
    pub descent: f32,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            char_width: 0.5,
            ascent: -0.8,
            descent: 0.2,
        }
    }
}

impl RecordingCanvas {
    /// An empty canvas with the default text metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first recorded text call, as `(text, x, baseline)`.
    pub fn text(&self) -> Option<(&str, f32, f32)> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            paint: *paint,
        });
    }

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    ) {
        self.commands.push(DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            use_center,
            paint: *paint,
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            rect,
            paint: *paint,
        });
    }

    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            rx,
            ry,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            paint: *paint,
        });
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        text.chars().count() as f32 * self.char_width * paint.text_size
    }

    fn font_metrics(&self, paint: &Paint) -> FontMetrics {
        FontMetrics {
            ascent: self.ascent * paint.text_size,
            descent: self.descent * paint.text_size,
        }
    }
}

/// Counts direct and deferred redraw requests.
#[derive(Debug, Default)]
pub struct CountingInvalidator {
    direct: AtomicUsize,
    deferred: AtomicUsize,
}

impl CountingInvalidator {
    /// Requests made through [`Invalidator::invalidate`].
    pub fn direct(&self) -> usize {
        self.direct.load(Ordering::SeqCst)
    }

    /// Requests made through [`Invalidator::post_invalidate`].
    pub fn deferred(&self) -> usize {
        self.deferred.load(Ordering::SeqCst)
    }

    /// All requests.
    pub fn total(&self) -> usize {
        self.direct() + self.deferred()
    }
}

impl Invalidator for CountingInvalidator {
    fn invalidate(&self) {
        self.direct.fetch_add(1, Ordering::SeqCst);
    }

    fn post_invalidate(&self) {
        self.deferred.fetch_add(1, Ordering::SeqCst);
    }
}

struct ManualRun {
    id: u64,
    animator: ValueAnimator,
    started_at: Duration,
    on_tick: TickCallback,
}

#[derive(Default)]
struct ManualClockState {
    now: Duration,
    next_id: u64,
    runs: Vec<ManualRun>,
}

/// A clock whose time only moves on [`advance`](ManualClock::advance).
///
/// Ticks are delivered on the thread that calls `advance`, one per running
/// animation per call.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ManualClockState>>,
}

impl ManualClock {
    /// A clock at time zero with nothing running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward and delivers one tick to every running animation.
    pub fn advance(&self, by: Duration) {
        let ticks: Vec<(TickCallback, f32)> = {
            let mut state = self.state.lock();
            state.now += by;
            let now = state.now;
            let mut ticks = Vec::with_capacity(state.runs.len());
            state.runs.retain(|run| {
                let elapsed = now - run.started_at;
                ticks.push((run.on_tick.clone(), run.animator.value_at(elapsed)));
                !run.animator.is_finished_at(elapsed)
            });
            ticks
        };
        for (on_tick, value) in ticks {
            on_tick(value);
        }
    }

    /// Number of animations still running.
    pub fn running(&self) -> usize {
        self.state.lock().runs.len()
    }
}

impl AnimationClock for ManualClock {
    fn start(&self, spec: AnimationSpec, on_tick: TickCallback) -> Box<dyn AnimationHandle> {
        let animator = ValueAnimator::new(spec);
        let id = {
            let mut state = self.state.lock();
            let id = state.next_id;
            state.next_id += 1;
            let started_at = state.now;
            state.runs.push(ManualRun {
                id,
                animator,
                started_at,
                on_tick: on_tick.clone(),
            });
            id
        };
        if spec.start_delay.is_zero() {
            on_tick(spec.start_value);
        }
        Box::new(ManualHandle {
            id,
            end_value: spec.end_value,
            state: self.state.clone(),
        })
    }
}

struct ManualHandle {
    id: u64,
    end_value: f32,
    state: Arc<Mutex<ManualClockState>>,
}

impl AnimationHandle for ManualHandle {
    fn is_running(&self) -> bool {
        self.state.lock().runs.iter().any(|run| run.id == self.id)
    }

    fn end(&mut self) {
        if let Some(run) = self.remove() {
            (run.on_tick)(self.end_value);
        }
    }

    fn cancel(&mut self) {
        self.remove();
    }
}

impl ManualHandle {
    fn remove(&self) -> Option<ManualRun> {
        let mut state = self.state.lock();
        let index = state.runs.iter().position(|run| run.id == self.id)?;
        Some(state.runs.remove(index))
    }
}
