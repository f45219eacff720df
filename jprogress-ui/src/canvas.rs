//! # Drawing Surface
//!
//! The host's 2D canvas, reduced to the primitives a progress view paints
//! with: circles, arcs, plain and rounded rectangles, and single-line text.
//!
//! Angles are in degrees, clockwise from the 3 o'clock position, matching
//! the convention of most 2D canvas APIs (so −90° points straight up).

use crate::{Color, Rect};

/// How stroke ends are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeCap {
    /// Ends exactly at the endpoint.
    #[default]
    Butt,
    /// A semicircle past the endpoint.
    Round,
}

/// Whether a shape is filled or outlined.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    /// Fill the interior.
    #[default]
    Fill,
    /// Outline the shape.
    Stroke {
        /// Stroke thickness in pixels.
        width: f32,
        /// End cap for open paths such as arcs.
        cap: StrokeCap,
    },
}

/// Styling applied to one draw call.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Draw color.
    pub color: Color,
    /// Fill or stroke.
    pub style: PaintStyle,
    /// Text size in pixels, only used by text calls.
    pub text_size: f32,
    /// Anti-aliased edges.
    pub anti_alias: bool,
}

impl Paint {
    /// An anti-aliased fill paint.
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            text_size: 0.0,
            anti_alias: true,
        }
    }

    /// An anti-aliased stroke paint.
    pub fn stroke(color: Color, width: f32, cap: StrokeCap) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke { width, cap },
            text_size: 0.0,
            anti_alias: true,
        }
    }

    /// Sets the text size.
    pub fn with_text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }
}

/// Vertical font measurements relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Recommended distance above the baseline, negative.
    pub ascent: f32,
    /// Recommended distance below the baseline, positive.
    pub descent: f32,
}

impl FontMetrics {
    /// The baseline that vertically centers a line of text on `center_y`.
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y - (self.ascent + self.descent) / 2.0
    }
}

/// A 2D drawing surface supplied by the host.
pub trait Canvas {
    /// Draws a circle centered on `(cx, cy)`.
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Draws an arc of the oval inscribed in `oval`, starting at
    /// `start_angle` and sweeping `sweep_angle` degrees clockwise. When
    /// `use_center` is set the arc is closed through the center (a wedge).
    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        use_center: bool,
        paint: &Paint,
    );

    /// Draws a rectangle.
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draws a rectangle with elliptical corners of radii `rx`, `ry`.
    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint);

    /// Draws `text` with its left edge at `x` and its baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);

    /// Advance width of `text` drawn with `paint`.
    fn measure_text(&self, text: &str, paint: &Paint) -> f32;

    /// Font metrics for `paint`'s text size.
    fn font_metrics(&self, paint: &Paint) -> FontMetrics;
}

/// One recorded canvas call.
///
/// Hosts that render on another thread (or tests) can capture a frame as a
/// list of commands and [`replay`](DrawCommand::replay) it later.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`Canvas::draw_circle`].
    Circle {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        radius: f32,
        /// Paint used.
        paint: Paint,
    },
    /// See [`Canvas::draw_arc`].
    Arc {
        /// Bounding oval.
        oval: Rect,
        /// Start angle, degrees.
        start_angle: f32,
        /// Sweep, degrees clockwise.
        sweep_angle: f32,
        /// Closed through the center.
        use_center: bool,
        /// Paint used.
        paint: Paint,
    },
    /// See [`Canvas::draw_rect`].
    Rect {
        /// Rectangle.
        rect: Rect,
        /// Paint used.
        paint: Paint,
    },
    /// See [`Canvas::draw_round_rect`].
    RoundRect {
        /// Rectangle.
        rect: Rect,
        /// Horizontal corner radius.
        rx: f32,
        /// Vertical corner radius.
        ry: f32,
        /// Paint used.
        paint: Paint,
    },
    /// See [`Canvas::draw_text`].
    Text {
        /// Text drawn.
        text: String,
        /// Left edge.
        x: f32,
        /// Baseline.
        y: f32,
        /// Paint used.
        paint: Paint,
    },
}

impl DrawCommand {
    /// Issues this command against `canvas`.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        match self {
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                paint,
            } => canvas.draw_circle(*cx, *cy, *radius, paint),
            DrawCommand::Arc {
                oval,
                start_angle,
                sweep_angle,
                use_center,
                paint,
            } => canvas.draw_arc(*oval, *start_angle, *sweep_angle, *use_center, paint),
            DrawCommand::Rect { rect, paint } => canvas.draw_rect(*rect, paint),
            DrawCommand::RoundRect {
                rect,
                rx,
                ry,
                paint,
            } => canvas.draw_round_rect(*rect, *rx, *ry, paint),
            DrawCommand::Text { text, x, y, paint } => canvas.draw_text(text, *x, *y, paint),
        }
    }
}
