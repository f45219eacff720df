//! Style resolution for [`ProgressView`](super::ProgressView).
//!
//! Values come from three places, later ones winning: the constants in
//! [`ProgressViewDefaults`], the host's style attributes, and the setters on
//! [`ProgressViewArgs`].

use std::time::Duration;

use derive_setters::Setters;
use jprogress_ui::{AttributeError, AttributeSource, Color, Dp, Paint, StrokeCap, TypedAttributes};
use tracing::{debug, warn};

/// Attribute names read by [`ProgressViewArgs::from_attributes`].
pub mod attr {
    /// Track color.
    pub const TRACK_COLOR: &str = "progress_color_background";
    /// Track stroke width, px.
    pub const TRACK_STROKE_WIDTH: &str = "progress_paint_bg_width";
    /// Indicator color.
    pub const INDICATOR_COLOR: &str = "progress_color";
    /// Indicator stroke width, px.
    pub const INDICATOR_STROKE_WIDTH: &str = "progress_paint_value_width";
    /// Label color.
    pub const TEXT_COLOR: &str = "progress_text_color";
    /// Label size, px.
    pub const TEXT_SIZE: &str = "progress_text_size";
    /// Animation duration, milliseconds.
    pub const ANIMATION_DURATION: &str = "progress_animate_duration";
    /// Arc start direction, see [`StartAngle`](super::StartAngle).
    pub const START_ANGLE: &str = "progress_circle_sweep_angle";
    /// Shape, see [`ProgressShape`](super::ProgressShape).
    pub const SHAPE: &str = "progress_type";
    /// Initial progress.
    pub const PROGRESS: &str = "progress_value";
    /// Progress ceiling.
    pub const MAX_PROGRESS: &str = "progress_value_max";
    /// Label alignment, see [`TextAlign`](super::TextAlign).
    pub const TEXT_ALIGN: &str = "progress_rect_text_align";
    /// Label visibility.
    pub const TEXT_VISIBLE: &str = "progress_text_visible";
    /// Literal label.
    pub const LABEL_TEXT: &str = "progress_text";
    /// Corner or circle radius, px.
    pub const CORNER_RADIUS: &str = "progress_rect_radius";
}

/// Defaults for [`ProgressViewArgs`].
pub struct ProgressViewDefaults;

impl ProgressViewDefaults {
    /// Track and indicator stroke width, px.
    pub const STROKE_WIDTH: f32 = 10.0;
    /// Length of one animation run.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);
    /// Delay before the first tick.
    pub const START_DELAY: Duration = Duration::ZERO;
    /// Progress ceiling.
    pub const MAX_PROGRESS: i32 = 100;
    /// Label size before density scaling.
    pub const TEXT_SIZE: Dp = Dp(20.0);
    /// Inset of left and right aligned labels, px.
    pub const TEXT_MARGIN: f32 = 10.0;
    /// Track color.
    pub const TRACK_COLOR: Color = Color::GRAY;
    /// Indicator color.
    pub const INDICATOR_COLOR: Color = Color::GREEN;
    /// Label color.
    pub const TEXT_COLOR: Color = Color::BLUE;
    /// Label shown when no literal label is set. `{value}` is replaced by the
    /// integer progress.
    pub const VALUE_TEMPLATE: &str = "{value}";
}

/// Which drawing routine the view uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressShape {
    /// A filled bar.
    Rectangle,
    /// A stroked arc over a stroked circle.
    #[default]
    Circle,
    /// A filled bar with rounded corners.
    RoundedRectangle,
}

impl ProgressShape {
    /// Maps the `progress_type` attribute (0, 1, 2).
    pub fn from_attr(value: i32) -> Option<Self> {
        match value {
            0 => Some(ProgressShape::Rectangle),
            1 => Some(ProgressShape::Circle),
            2 => Some(ProgressShape::RoundedRectangle),
            _ => None,
        }
    }

    /// The attribute value for this shape.
    pub fn attr_value(self) -> i32 {
        match self {
            ProgressShape::Rectangle => 0,
            ProgressShape::Circle => 1,
            ProgressShape::RoundedRectangle => 2,
        }
    }

    /// Rectangle and rounded rectangle fill from the leading edge.
    pub fn is_linear(self) -> bool {
        !matches!(self, ProgressShape::Circle)
    }
}

/// Where the arc of a circular view begins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartAngle {
    /// 9 o'clock, 180°.
    Left,
    /// 12 o'clock, −90°.
    #[default]
    Top,
    /// 3 o'clock, 0°.
    Right,
    /// 6 o'clock, 90°.
    Bottom,
}

impl StartAngle {
    /// Maps the `progress_circle_sweep_angle` attribute (0 to 3).
    pub fn from_attr(value: i32) -> Option<Self> {
        match value {
            0 => Some(StartAngle::Left),
            1 => Some(StartAngle::Top),
            2 => Some(StartAngle::Right),
            3 => Some(StartAngle::Bottom),
            _ => None,
        }
    }

    /// The attribute value for this direction.
    pub fn attr_value(self) -> i32 {
        match self {
            StartAngle::Left => 0,
            StartAngle::Top => 1,
            StartAngle::Right => 2,
            StartAngle::Bottom => 3,
        }
    }

    /// Canvas angle in degrees, clockwise from 3 o'clock.
    pub fn degrees(self) -> f32 {
        match self {
            StartAngle::Left => 180.0,
            StartAngle::Top => -90.0,
            StartAngle::Right => 0.0,
            StartAngle::Bottom => 90.0,
        }
    }
}

/// Horizontal placement of the label on rectangle shapes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Inset from the left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Inset from the right edge.
    Right,
}

impl TextAlign {
    /// Maps the `progress_rect_text_align` attribute (0, 1, 2).
    pub fn from_attr(value: i32) -> Option<Self> {
        match value {
            0 => Some(TextAlign::Left),
            1 => Some(TextAlign::Center),
            2 => Some(TextAlign::Right),
            _ => None,
        }
    }

    /// The attribute value for this alignment.
    pub fn attr_value(self) -> i32 {
        match self {
            TextAlign::Left => 0,
            TextAlign::Center => 1,
            TextAlign::Right => 2,
        }
    }
}

/// Configuration of a [`ProgressView`](super::ProgressView).
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ProgressViewArgs {
    /// Drawing routine.
    pub shape: ProgressShape,
    /// Initial progress, in `[0, max_progress]` for a sensible drawing.
    pub progress: f32,
    /// Progress ceiling.
    pub max_progress: i32,
    /// Background track color.
    pub track_color: Color,
    /// Track stroke width for the circle, px.
    pub track_stroke_width: f32,
    /// Indicator color.
    pub indicator_color: Color,
    /// Indicator stroke width for the circle, px.
    pub indicator_stroke_width: f32,
    /// Label color.
    pub text_color: Color,
    /// Label size, px.
    pub text_size: f32,
    /// Circle radius or rectangle corner radius, px. Values below 1 are
    /// derived from the measured size.
    pub corner_radius: f32,
    /// Arc start direction.
    pub start_angle: StartAngle,
    /// Length of one animation run.
    pub animation_duration: Duration,
    /// Animate toward 0 instead of toward the progress.
    pub reverse: bool,
    /// Label placement on rectangle shapes.
    pub text_align: TextAlign,
    /// Draw the label.
    pub show_text: bool,
    /// Literal label. When empty the integer progress is shown instead.
    #[setters(into)]
    pub label_text: String,
    /// Format of the numeric label.
    #[setters(into)]
    pub value_template: String,
}

impl Default for ProgressViewArgs {
    fn default() -> Self {
        Self {
            shape: ProgressShape::default(),
            progress: 0.0,
            max_progress: ProgressViewDefaults::MAX_PROGRESS,
            track_color: ProgressViewDefaults::TRACK_COLOR,
            track_stroke_width: ProgressViewDefaults::STROKE_WIDTH,
            indicator_color: ProgressViewDefaults::INDICATOR_COLOR,
            indicator_stroke_width: ProgressViewDefaults::STROKE_WIDTH,
            text_color: ProgressViewDefaults::TEXT_COLOR,
            text_size: ProgressViewDefaults::TEXT_SIZE.to_pixels_f32(),
            corner_radius: 0.0,
            start_angle: StartAngle::default(),
            animation_duration: ProgressViewDefaults::ANIMATION_DURATION,
            reverse: false,
            text_align: TextAlign::default(),
            show_text: false,
            label_text: String::new(),
            value_template: ProgressViewDefaults::VALUE_TEMPLATE.to_owned(),
        }
    }
}

impl ProgressViewArgs {
    /// Resolves the configuration from optional host style attributes.
    ///
    /// Never fails. Reading stops at the first attribute that cannot be read;
    /// fields read so far keep their attribute values and the rest keep
    /// their defaults.
    pub fn from_attributes(source: Option<&dyn AttributeSource>) -> Self {
        let mut args = Self::default();
        if let Some(source) = source {
            if let Err(err) = args.read_attributes(source) {
                warn!(%err, "failed to read progress view attributes, keeping defaults");
            }
        }
        args
    }

    fn read_attributes(&mut self, source: &dyn AttributeSource) -> Result<(), AttributeError> {
        let attrs = TypedAttributes::obtain(source)?;

        self.track_color = attrs.color(attr::TRACK_COLOR, self.track_color)?;
        self.track_stroke_width =
            attrs.dimension(attr::TRACK_STROKE_WIDTH, self.track_stroke_width)?;
        self.indicator_color = attrs.color(attr::INDICATOR_COLOR, self.indicator_color)?;
        self.indicator_stroke_width =
            attrs.dimension(attr::INDICATOR_STROKE_WIDTH, self.indicator_stroke_width)?;
        self.text_color = attrs.color(attr::TEXT_COLOR, self.text_color)?;
        self.text_size = attrs.dimension(attr::TEXT_SIZE, self.text_size)?;

        let duration_ms = self.animation_duration.as_millis().min(i32::MAX as u128) as i32;
        let duration_ms = attrs.integer(attr::ANIMATION_DURATION, duration_ms)?;
        self.animation_duration = Duration::from_millis(duration_ms.max(0) as u64);

        let direction = attrs.integer(attr::START_ANGLE, self.start_angle.attr_value())?;
        match StartAngle::from_attr(direction) {
            Some(start_angle) => self.start_angle = start_angle,
            None => warn!(direction, "unknown start angle, keeping {:?}", self.start_angle),
        }

        let shape = attrs.integer(attr::SHAPE, self.shape.attr_value())?;
        match ProgressShape::from_attr(shape) {
            Some(parsed) => self.shape = parsed,
            None => warn!(shape, "unknown progress shape, keeping {:?}", self.shape),
        }

        self.progress = attrs.integer(attr::PROGRESS, self.progress as i32)? as f32;
        self.max_progress = attrs.integer(attr::MAX_PROGRESS, self.max_progress)?;

        let align = attrs.integer(attr::TEXT_ALIGN, self.text_align.attr_value())?;
        match TextAlign::from_attr(align) {
            Some(parsed) => self.text_align = parsed,
            None => warn!(align, "unknown text alignment, keeping {:?}", self.text_align),
        }

        self.show_text = attrs.boolean(attr::TEXT_VISIBLE, self.show_text)?;
        if let Some(label) = attrs.string(attr::LABEL_TEXT)? {
            self.label_text = label;
        }
        self.corner_radius = attrs.dimension(attr::CORNER_RADIUS, self.corner_radius)?;

        debug!(shape = ?self.shape, max = self.max_progress, "resolved progress view attributes");
        Ok(())
    }
}

/// The three paints a view draws with, derived once from its args.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPaints {
    /// Background track.
    pub track: Paint,
    /// Progress indicator.
    pub indicator: Paint,
    /// Label.
    pub text: Paint,
}

impl ProgressPaints {
    /// Derives the paints for `args`.
    ///
    /// Rectangle shapes fill; the circle strokes with round caps.
    pub fn resolve(args: &ProgressViewArgs) -> Self {
        Self {
            track: shape_paint(args.shape, args.track_color, args.track_stroke_width),
            indicator: shape_paint(args.shape, args.indicator_color, args.indicator_stroke_width),
            text: Paint::fill(args.text_color).with_text_size(args.text_size),
        }
    }
}

fn shape_paint(shape: ProgressShape, color: Color, stroke_width: f32) -> Paint {
    if shape.is_linear() {
        Paint::fill(color)
    } else {
        Paint::stroke(color, stroke_width, StrokeCap::Round)
    }
}
