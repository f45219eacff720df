use jprogress_ui::{Canvas, Rect};

use super::{
    config::{ProgressPaints, ProgressShape, ProgressViewArgs, ProgressViewDefaults, TextAlign},
    layout::ProgressGeometry,
};

/// Share of `full` covered by `progress` out of `max_progress`.
///
/// A non-positive ceiling or a non-finite result covers nothing; anything
/// else is clamped to `[0, full]`.
pub(super) fn fill_extent(progress: f32, max_progress: i32, full: f32) -> f32 {
    if max_progress <= 0 {
        return 0.0;
    }
    let extent = progress * full / max_progress as f32;
    if !extent.is_finite() {
        return 0.0;
    }
    extent.clamp(0.0, full.max(0.0))
}

/// Degrees of arc drawn for `progress`.
pub(super) fn sweep_angle(progress: f32, max_progress: i32) -> f32 {
    fill_extent(progress, max_progress, 360.0)
}

/// The label: the literal label when set, otherwise the integer progress
/// formatted through the value template.
pub(super) fn display_text(args: &ProgressViewArgs, progress: f32) -> String {
    if !args.label_text.is_empty() {
        return args.label_text.clone();
    }
    args.value_template.replace("{value}", &(progress as i32).to_string())
}

pub(super) fn draw(
    canvas: &mut dyn Canvas,
    args: &ProgressViewArgs,
    geometry: &ProgressGeometry,
    paints: &ProgressPaints,
    progress: f32,
) {
    match args.shape {
        ProgressShape::Circle => draw_circle(canvas, args, geometry, paints, progress),
        ProgressShape::Rectangle => draw_rect(canvas, args, geometry, paints, progress),
        ProgressShape::RoundedRectangle => {
            draw_round_rect(canvas, args, geometry, paints, progress)
        }
    }
}

fn draw_circle(
    canvas: &mut dyn Canvas,
    args: &ProgressViewArgs,
    geometry: &ProgressGeometry,
    paints: &ProgressPaints,
    progress: f32,
) {
    canvas.draw_circle(
        geometry.center_x,
        geometry.center_y,
        geometry.radius,
        &paints.track,
    );
    canvas.draw_arc(
        geometry.bounds,
        args.start_angle.degrees(),
        sweep_angle(progress, args.max_progress),
        false,
        &paints.indicator,
    );
    // circle labels ignore the alignment setting
    draw_label(canvas, args, geometry.bounds, paints, progress, TextAlign::Center);
}

fn draw_rect(
    canvas: &mut dyn Canvas,
    args: &ProgressViewArgs,
    geometry: &ProgressGeometry,
    paints: &ProgressPaints,
    progress: f32,
) {
    canvas.draw_rect(geometry.bounds, &paints.track);
    canvas.draw_rect(progress_rect(args, geometry, progress), &paints.indicator);
    draw_label(canvas, args, geometry.bounds, paints, progress, args.text_align);
}

fn draw_round_rect(
    canvas: &mut dyn Canvas,
    args: &ProgressViewArgs,
    geometry: &ProgressGeometry,
    paints: &ProgressPaints,
    progress: f32,
) {
    let radius = geometry.corner_radius;
    canvas.draw_round_rect(geometry.bounds, radius, radius, &paints.track);
    canvas.draw_round_rect(
        progress_rect(args, geometry, progress),
        radius,
        radius,
        &paints.indicator,
    );
    draw_label(canvas, args, geometry.bounds, paints, progress, args.text_align);
}

/// The filled part of a rectangle shape, growing from the leading edge.
pub(super) fn progress_rect(
    args: &ProgressViewArgs,
    geometry: &ProgressGeometry,
    progress: f32,
) -> Rect {
    let bounds = geometry.bounds;
    let width = fill_extent(progress, args.max_progress, geometry.content_width);
    Rect::new(bounds.left, bounds.top, bounds.left + width, bounds.bottom)
}

fn draw_label(
    canvas: &mut dyn Canvas,
    args: &ProgressViewArgs,
    bounds: Rect,
    paints: &ProgressPaints,
    progress: f32,
    align: TextAlign,
) {
    if !args.show_text {
        return;
    }
    let text = display_text(args, progress);
    let text_width = canvas.measure_text(&text, &paints.text);
    let baseline = canvas
        .font_metrics(&paints.text)
        .centered_baseline(bounds.center_y());
    let x = match align {
        TextAlign::Left => bounds.left + ProgressViewDefaults::TEXT_MARGIN,
        TextAlign::Center => bounds.center_x() - text_width / 2.0,
        TextAlign::Right => bounds.right - text_width - ProgressViewDefaults::TEXT_MARGIN,
    };
    canvas.draw_text(&text, x, baseline, &paints.text);
}
