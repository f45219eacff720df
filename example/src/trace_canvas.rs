//! A canvas that writes every primitive to the log instead of a screen.

use jprogress_ui::{Canvas, FontMetrics, Paint, Rect};
use tracing::info;

/// Rough glyph advance as a share of the text size.
const GLYPH_ADVANCE: f32 = 0.55;

pub struct TraceCanvas<'a> {
    view: &'a str,
}

impl<'a> TraceCanvas<'a> {
    pub fn new(view: &'a str) -> Self {
        Self { view }
    }
}

impl Canvas for TraceCanvas<'_> {
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        info!(view = self.view, cx, cy, radius, color = ?paint.color, "circle");
    }

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        _use_center: bool,
        paint: &Paint,
    ) {
        info!(view = self.view, ?oval, start_angle, sweep_angle, color = ?paint.color, "arc");
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        info!(view = self.view, ?rect, color = ?paint.color, "rect");
    }

    fn draw_round_rect(&mut self, rect: Rect, rx: f32, _ry: f32, paint: &Paint) {
        info!(view = self.view, ?rect, radius = rx, color = ?paint.color, "round rect");
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _paint: &Paint) {
        info!(view = self.view, text, x, y, "text");
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        text.chars().count() as f32 * paint.text_size * GLYPH_ADVANCE
    }

    fn font_metrics(&self, paint: &Paint) -> FontMetrics {
        FontMetrics {
            ascent: -0.8 * paint.text_size,
            descent: 0.2 * paint.text_size,
        }
    }
}
