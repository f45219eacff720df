//! A progress indicator drawn as a circle, a bar, or a rounded bar.
//!
//! ## Usage
//!
//! Show how far along a task is, optionally animating the indicator up to
//! (or down from) the current value.
//!
//! ```
//! use std::sync::Arc;
//!
//! use jprogress_components::progress_view::{ProgressShape, ProgressView, ProgressViewArgs, ViewHost};
//! use jprogress_ui::{Constraint, Px, View, testing::{CountingInvalidator, ManualClock, RecordingCanvas}};
//!
//! let host = ViewHost::new(Arc::new(ManualClock::new()), Arc::new(CountingInvalidator::default()));
//! let mut view = ProgressView::with_args(
//!     &host,
//!     ProgressViewArgs::default().shape(ProgressShape::Rectangle),
//! );
//! view.set_progress(50.0);
//! view.measure(&Constraint::fixed(Px(200), Px(20)))?;
//! assert_eq!(view.progress_rect_value(), 100.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! view.draw(&mut canvas);
//! # Ok::<(), jprogress_ui::MeasurementError>(())
//! ```

mod animation;
mod config;
mod layout;
mod render;

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use jprogress_ui::{
    AnimationClock, AnimationSpec, AttributeSource, Canvas, Constraint, Invalidator,
    MeasurementError, Padding, PxSize, RedrawHandle, TickCallback, View,
};
use tracing::{debug, trace};

pub use animation::AnimationState;
pub use config::{
    ProgressPaints, ProgressShape, ProgressViewArgs, ProgressViewDefaults, StartAngle, TextAlign,
    attr,
};
pub use layout::ProgressGeometry;

use animation::ProgressAnimator;

/// The host services a view needs besides its canvas.
#[derive(Clone)]
pub struct ViewHost {
    /// Drives animations.
    pub clock: Arc<dyn AnimationClock>,
    /// Schedules repaints.
    pub invalidator: Arc<dyn Invalidator>,
}

impl ViewHost {
    /// Bundles a clock and an invalidator.
    pub fn new(clock: Arc<dyn AnimationClock>, invalidator: Arc<dyn Invalidator>) -> Self {
        Self { clock, invalidator }
    }
}

/// Progress value shared between the view and animation ticks.
///
/// Stored as the bit pattern of an `f32` so ticks on any thread can update it
/// without a lock.
#[derive(Debug, Clone, Default)]
struct SharedProgress(Arc<AtomicU32>);

impl SharedProgress {
    fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// A configurable progress indicator.
///
/// Construct it on the UI thread: redraw requests made from that thread go
/// straight to [`Invalidator::invalidate`], requests from animation ticks on
/// other threads go through [`Invalidator::post_invalidate`].
pub struct ProgressView {
    args: ProgressViewArgs,
    paints: ProgressPaints,
    padding: Padding,
    measured: PxSize,
    geometry: ProgressGeometry,
    progress: SharedProgress,
    redraw: RedrawHandle,
    animator: ProgressAnimator,
}

impl ProgressView {
    /// Creates a view styled from `attributes`, or from defaults when `None`.
    ///
    /// Attribute errors never fail construction; see
    /// [`ProgressViewArgs::from_attributes`].
    pub fn new(host: &ViewHost, attributes: Option<&dyn AttributeSource>) -> Self {
        Self::with_args(host, ProgressViewArgs::from_attributes(attributes))
    }

    /// Creates a view from explicit configuration.
    pub fn with_args(host: &ViewHost, args: ProgressViewArgs) -> Self {
        let paints = ProgressPaints::resolve(&args);
        debug!(shape = ?args.shape, progress = args.progress, "creating progress view");
        Self {
            progress: SharedProgress::new(args.progress),
            paints,
            padding: Padding::ZERO,
            measured: PxSize::ZERO,
            geometry: ProgressGeometry::default(),
            redraw: RedrawHandle::new(host.invalidator.clone()),
            animator: ProgressAnimator::new(host.clock.clone()),
            args,
        }
    }

    /// The resolved configuration.
    ///
    /// `args().progress` is the value the view was configured with or last
    /// set to; [`progress`](Self::progress) also reflects animation ticks.
    pub fn args(&self) -> &ProgressViewArgs {
        &self.args
    }

    /// Geometry from the last layout pass.
    pub fn geometry(&self) -> &ProgressGeometry {
        &self.geometry
    }

    /// Size from the last layout pass.
    pub fn measured_size(&self) -> PxSize {
        self.measured
    }

    /// The progress currently drawn.
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// The progress ceiling.
    pub fn max_progress(&self) -> i32 {
        self.args.max_progress
    }

    /// Sets the padding. Takes effect on the next layout pass.
    pub fn set_padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Sets the progress and redraws right away, without animating.
    pub fn set_progress(&mut self, progress: f32) -> &mut Self {
        self.args.progress = progress;
        self.progress.set(progress);
        self.redraw.request();
        self
    }

    /// Sets the progress ceiling.
    ///
    /// A ceiling of zero or less draws an empty indicator.
    pub fn set_max_progress(&mut self, max_progress: i32) -> &mut Self {
        if max_progress <= 0 {
            debug!(max_progress, "non-positive max progress, indicator will be empty");
        }
        self.args.max_progress = max_progress;
        self
    }

    /// Makes the next [`start_animation`](Self::start_animation) run from
    /// the current progress down to zero.
    pub fn set_reverse(&mut self, reverse: bool) -> &mut Self {
        self.args.reverse = reverse;
        self
    }

    /// Animates the indicator over the configured duration.
    ///
    /// A run already in flight is first ended at its end value. The new run
    /// goes from 0 to the last value given to
    /// [`set_progress`](Self::set_progress), or, when reversed, from the
    /// progress currently drawn down to 0.
    pub fn start_animation(&mut self) {
        self.animator.end();

        let spec = if self.args.reverse {
            AnimationSpec::linear(self.progress.get(), 0.0, self.args.animation_duration)
        } else {
            AnimationSpec::linear(0.0, self.args.progress, self.args.animation_duration)
        }
        .with_start_delay(ProgressViewDefaults::START_DELAY);

        let progress = self.progress.clone();
        let redraw = self.redraw.clone();
        let on_tick: TickCallback = Arc::new(move |value| {
            trace!(value, "progress tick");
            progress.set(value);
            redraw.request();
        });
        self.animator.start(spec, on_tick);
    }

    /// Ends the animation at its end value. No-op when idle.
    pub fn stop_animation(&mut self) {
        self.animator.end();
    }

    /// Whether an animation is in flight.
    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    /// Width in pixels of the filled part of a bar:
    /// `progress × content width / max_progress`, clamped to the content
    /// width and zero for a non-positive ceiling.
    pub fn progress_rect_value(&self) -> f32 {
        render::fill_extent(
            self.progress.get(),
            self.args.max_progress,
            self.geometry.content_width,
        )
    }

    /// Degrees of arc drawn by the circle shape.
    pub fn sweep_angle(&self) -> f32 {
        render::sweep_angle(self.progress.get(), self.args.max_progress)
    }

    /// The label that would be drawn when text is shown.
    pub fn display_text(&self) -> String {
        render::display_text(&self.args, self.progress.get())
    }
}

impl View for ProgressView {
    fn measure(&mut self, constraint: &Constraint) -> Result<PxSize, MeasurementError> {
        let size = constraint.resolve()?;
        self.measured = size;
        self.geometry = ProgressGeometry::compute(size, self.padding, &self.args);
        trace!(?size, bounds = ?self.geometry.bounds, "measured progress view");
        Ok(size)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        render::draw(
            canvas,
            &self.args,
            &self.geometry,
            &self.paints,
            self.progress.get(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use jprogress_ui::{
        AnimationHandle, AttrValue, AttributeSet, DimensionValue, DrawCommand, Px, Rect,
        testing::{CountingInvalidator, ManualClock, RecordingCanvas},
    };
    use parking_lot::Mutex;

    use super::*;

    /// A manual clock that also keeps every value it delivers.
    #[derive(Clone, Default)]
    struct TickLog {
        clock: ManualClock,
        values: Arc<Mutex<Vec<f32>>>,
    }

    impl TickLog {
        fn values(&self) -> Vec<f32> {
            self.values.lock().clone()
        }
    }

    impl AnimationClock for TickLog {
        fn start(&self, spec: AnimationSpec, on_tick: TickCallback) -> Box<dyn AnimationHandle> {
            let values = self.values.clone();
            self.clock.start(
                spec,
                Arc::new(move |value| {
                    values.lock().push(value);
                    on_tick(value);
                }),
            )
        }
    }

    fn logged_bar(log: &TickLog) -> ProgressView {
        let host = ViewHost::new(
            Arc::new(log.clone()),
            Arc::new(CountingInvalidator::default()),
        );
        ProgressView::with_args(
            &host,
            ProgressViewArgs::default()
                .shape(ProgressShape::Rectangle)
                .animation_duration(Duration::from_millis(1000)),
        )
    }

    struct Harness {
        clock: ManualClock,
        invalidator: Arc<CountingInvalidator>,
        host: ViewHost,
    }

    fn harness() -> Harness {
        let clock = ManualClock::new();
        let invalidator = Arc::new(CountingInvalidator::default());
        let host = ViewHost::new(Arc::new(clock.clone()), invalidator.clone());
        Harness {
            clock,
            invalidator,
            host,
        }
    }

    fn bar(harness: &Harness) -> ProgressView {
        ProgressView::with_args(
            &harness.host,
            ProgressViewArgs::default()
                .shape(ProgressShape::Rectangle)
                .animation_duration(Duration::from_millis(1000)),
        )
    }

    #[test]
    fn rectangle_progress_rect_matches_formula() {
        let h = harness();
        let mut view = bar(&h);
        view.set_padding(Padding::new(Px(12), Px(0), Px(8), Px(0)));
        view.measure(&Constraint::fixed(Px(220), Px(30)))
            .expect("fixed constraint");

        for progress in [0.0, 12.5, 33.0, 50.0, 99.0, 100.0] {
            view.set_progress(progress);
            assert_eq!(view.progress_rect_value(), progress * 200.0 / 100.0);
        }

        view.set_progress(50.0);
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);
        assert!(matches!(
            canvas.commands[1],
            DrawCommand::Rect { rect, .. } if rect == Rect::new(12.0, 0.0, 112.0, 30.0)
        ));
    }

    #[test]
    fn circle_quarter_sweep() {
        let h = harness();
        let set = AttributeSet::new()
            .with(attr::SHAPE, AttrValue::Integer(1))
            .with(attr::START_ANGLE, AttrValue::Integer(1))
            .with(attr::MAX_PROGRESS, AttrValue::Integer(100))
            .with(attr::PROGRESS, AttrValue::Integer(25));
        let mut view = ProgressView::new(&h.host, Some(&set));
        view.measure(&Constraint::fixed(Px(120), Px(120)))
            .expect("fixed constraint");

        assert_eq!(view.sweep_angle(), 90.0);
        let mut canvas = RecordingCanvas::new();
        view.draw(&mut canvas);
        assert!(matches!(
            canvas.commands[1],
            DrawCommand::Arc { start_angle, sweep_angle, .. }
                if start_angle == -90.0 && sweep_angle == 90.0
        ));
    }

    #[test]
    fn label_overrides_numeric_text() {
        let h = harness();
        let mut view = ProgressView::with_args(&h.host, ProgressViewArgs::default());
        view.set_progress(42.0);
        assert_eq!(view.display_text(), "42");

        let mut labelled =
            ProgressView::with_args(&h.host, ProgressViewArgs::default().label_text("Syncing"));
        for progress in [0.0, 42.0, 100.0] {
            labelled.set_progress(progress);
            assert_eq!(labelled.display_text(), "Syncing");
        }
    }

    #[test]
    fn forward_animation_runs_from_zero() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(80.0);
        view.start_animation();
        assert_eq!(view.animation_state(), AnimationState::Running);
        assert_eq!(view.progress(), 0.0);

        h.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 40.0);

        h.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 80.0);
        assert_eq!(view.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn reverse_animation_runs_toward_zero() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(60.0).set_reverse(true);
        view.start_animation();
        assert_eq!(view.progress(), 60.0);

        h.clock.advance(Duration::from_millis(250));
        assert_eq!(view.progress(), 45.0);

        h.clock.advance(Duration::from_millis(750));
        assert_eq!(view.progress(), 0.0);
        assert_eq!(view.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn stop_jumps_to_end_and_restart_is_fresh() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(100.0);
        view.start_animation();
        h.clock.advance(Duration::from_millis(250));
        assert_eq!(view.progress(), 25.0);

        view.stop_animation();
        assert_eq!(view.progress(), 100.0);
        assert_eq!(view.animation_state(), AnimationState::Idle);
        assert_eq!(h.clock.running(), 0);

        view.start_animation();
        assert_eq!(view.progress(), 0.0);
        assert_eq!(h.clock.running(), 1);
        h.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 50.0);
    }

    #[test]
    fn restart_while_running_ends_previous_run() {
        let log = TickLog::default();
        let mut view = logged_bar(&log);
        view.set_progress(40.0);
        view.start_animation();
        log.clock.advance(Duration::from_millis(250));

        view.start_animation();
        assert_eq!(log.clock.running(), 1);
        // start, one tick, end of the first run, start of the second
        assert_eq!(log.values(), vec![0.0, 10.0, 40.0, 0.0]);

        log.clock.advance(Duration::from_millis(1000));
        assert_eq!(view.progress(), 40.0);
    }

    #[test]
    fn restart_animates_toward_latest_progress() {
        let log = TickLog::default();
        let mut view = logged_bar(&log);
        view.set_progress(40.0);
        view.start_animation();
        log.clock.advance(Duration::from_millis(250));

        view.set_progress(70.0);
        view.start_animation();
        assert_eq!(view.progress(), 0.0);
        assert_eq!(view.args().progress, 70.0);

        log.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 35.0);
        log.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 70.0);
        assert_eq!(view.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn reverse_restart_runs_down_from_drawn_progress() {
        let log = TickLog::default();
        let mut view = logged_bar(&log);
        view.set_progress(80.0).set_reverse(true);
        view.start_animation();
        log.clock.advance(Duration::from_millis(500));
        assert_eq!(view.progress(), 40.0);

        // ending the first run lands on 0, so the second has nothing to undo
        view.start_animation();
        assert_eq!(view.progress(), 0.0);
        log.clock.advance(Duration::from_millis(1000));
        assert_eq!(view.progress(), 0.0);
    }

    #[test]
    fn stop_when_idle_is_noop() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(10.0);
        let before = h.invalidator.total();
        view.stop_animation();
        assert_eq!(view.progress(), 10.0);
        assert_eq!(h.invalidator.total(), before);
    }

    #[test]
    fn ticks_request_redraws() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(10.0);
        assert_eq!(h.invalidator.direct(), 1);

        view.start_animation();
        h.clock.advance(Duration::from_millis(500));
        // start value plus one tick, all on this thread
        assert_eq!(h.invalidator.direct(), 3);
        assert_eq!(h.invalidator.deferred(), 0);
    }

    #[test]
    fn ticks_off_the_ui_thread_are_deferred() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(20.0);
        view.start_animation();
        let direct_before = h.invalidator.direct();

        let clock = h.clock.clone();
        thread::spawn(move || clock.advance(Duration::from_millis(1000)))
            .join()
            .expect("clock thread panicked");

        assert_eq!(view.progress(), 20.0);
        assert_eq!(h.invalidator.direct(), direct_before);
        assert_eq!(h.invalidator.deferred(), 1);
    }

    #[test]
    fn zero_max_progress_draws_empty_indicator() {
        let h = harness();
        let mut view = bar(&h);
        view.set_max_progress(0).set_progress(50.0);
        view.measure(&Constraint::fixed(Px(200), Px(20)))
            .expect("fixed constraint");
        assert_eq!(view.progress_rect_value(), 0.0);

        view.set_max_progress(-5);
        assert_eq!(view.max_progress(), -5);
        assert_eq!(view.progress_rect_value(), 0.0);
        assert_eq!(view.sweep_angle(), 0.0);
    }

    #[test]
    fn indicator_extent_is_monotonic_for_every_shape() {
        let h = harness();
        for shape in [
            ProgressShape::Circle,
            ProgressShape::Rectangle,
            ProgressShape::RoundedRectangle,
        ] {
            let mut view = ProgressView::with_args(&h.host, ProgressViewArgs::default().shape(shape));
            view.measure(&Constraint::fixed(Px(150), Px(150)))
                .expect("fixed constraint");
            let mut last = (f32::MIN, f32::MIN);
            for step in 0..=20 {
                view.set_progress(step as f32 * 5.0);
                let extent = (view.progress_rect_value(), view.sweep_angle());
                assert!(extent.0 >= last.0 && extent.1 >= last.1, "{shape:?} at {step}");
                last = extent;
            }
        }
    }

    #[test]
    fn measure_is_idempotent_and_rejects_unbounded_fill() {
        let h = harness();
        let mut view = ProgressView::new(&h.host, None);
        let constraint = Constraint::new(
            DimensionValue::Fill {
                min: None,
                max: Some(Px(90)),
            },
            DimensionValue::Fixed(Px(90)),
        );
        let first = view.measure(&constraint).expect("bounded fill");
        let geometry = *view.geometry();
        let second = view.measure(&constraint).expect("bounded fill");
        assert_eq!(first, second);
        assert_eq!(view.measured_size(), PxSize::new(Px(90), Px(90)));
        assert_eq!(*view.geometry(), geometry);

        let unbounded = Constraint::new(DimensionValue::FILLED, DimensionValue::Fixed(Px(10)));
        assert!(view.measure(&unbounded).is_err());
    }

    #[test]
    fn dropping_view_cancels_animation() {
        let h = harness();
        let mut view = bar(&h);
        view.set_progress(50.0);
        view.start_animation();
        assert_eq!(h.clock.running(), 1);
        let requests = h.invalidator.total();

        drop(view);
        assert_eq!(h.clock.running(), 0);
        assert_eq!(h.invalidator.total(), requests);
    }

    #[test]
    fn construction_releases_attribute_handle_on_error() {
        let h = harness();
        let set = AttributeSet::new().with(attr::TRACK_COLOR, AttrValue::Boolean(true));
        let view = ProgressView::new(&h.host, Some(&set));
        assert_eq!(view.args(), &ProgressViewArgs::default());
        assert_eq!(set.open_handles(), 0);
    }
}
