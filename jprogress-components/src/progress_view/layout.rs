use jprogress_ui::{Padding, PxSize, Rect};

use super::config::{ProgressShape, ProgressViewArgs};

/// Size-dependent geometry, recomputed on every layout pass.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ProgressGeometry {
    /// Measured width minus horizontal padding.
    pub content_width: f32,
    /// Measured height minus vertical padding.
    pub content_height: f32,
    /// Region the track and indicator are drawn in.
    pub bounds: Rect,
    /// Horizontal center of the circle.
    pub center_x: f32,
    /// Vertical center of the circle.
    pub center_y: f32,
    /// Circle radius, zero for rectangle shapes.
    pub radius: f32,
    /// Corner radius of the rounded rectangle, zero otherwise.
    pub corner_radius: f32,
}

impl ProgressGeometry {
    /// Computes the geometry for a view measured at `size` with `padding`.
    pub fn compute(size: PxSize, padding: Padding, args: &ProgressViewArgs) -> Self {
        let content = padding.shrink(size);
        let content_width = content.width.to_f32();
        let content_height = content.height.to_f32();
        let left = padding.left.to_f32();
        let top = padding.top.to_f32();

        match args.shape {
            ProgressShape::Circle => {
                let half = content_width.min(content_height) / 2.0;
                let center_x = left + half;
                let center_y = top + half;
                let radius = if args.corner_radius >= 1.0 {
                    args.corner_radius
                } else {
                    let stroke = args.track_stroke_width.max(args.indicator_stroke_width);
                    (half - stroke).max(0.0)
                };
                Self {
                    content_width,
                    content_height,
                    bounds: Rect::around_center(center_x, center_y, radius),
                    center_x,
                    center_y,
                    radius,
                    corner_radius: 0.0,
                }
            }
            ProgressShape::Rectangle | ProgressShape::RoundedRectangle => {
                let bounds = Rect::from_origin_size(left, top, content_width, content_height);
                let corner_radius = match args.shape {
                    ProgressShape::RoundedRectangle if args.corner_radius >= 1.0 => {
                        args.corner_radius
                    }
                    ProgressShape::RoundedRectangle => content_height / 2.0,
                    _ => 0.0,
                };
                Self {
                    content_width,
                    content_height,
                    bounds,
                    center_x: bounds.center_x(),
                    center_y: bounds.center_y(),
                    radius: 0.0,
                    corner_radius,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jprogress_ui::Px;

    use super::*;

    fn size(width: i32, height: i32) -> PxSize {
        PxSize::new(Px(width), Px(height))
    }

    #[test]
    fn circle_uses_smaller_side_and_stroke() {
        let args = ProgressViewArgs::default()
            .track_stroke_width(6.0)
            .indicator_stroke_width(10.0);
        let geometry = ProgressGeometry::compute(size(200, 120), Padding::ZERO, &args);

        assert_eq!(geometry.center_x, 60.0);
        assert_eq!(geometry.center_y, 60.0);
        assert_eq!(geometry.radius, 50.0);
        assert_eq!(geometry.bounds, Rect::new(10.0, 10.0, 110.0, 110.0));
    }

    #[test]
    fn circle_is_offset_by_padding() {
        let padding = Padding::new(Px(8), Px(4), Px(8), Px(4));
        let geometry =
            ProgressGeometry::compute(size(116, 108), padding, &ProgressViewArgs::default());

        assert_eq!(geometry.content_width, 100.0);
        assert_eq!(geometry.content_height, 100.0);
        assert_eq!(geometry.center_x, 58.0);
        assert_eq!(geometry.center_y, 54.0);
        assert_eq!(geometry.radius, 40.0);
    }

    #[test]
    fn circle_radius_from_config() {
        let args = ProgressViewArgs::default().corner_radius(30.0);
        let geometry = ProgressGeometry::compute(size(100, 100), Padding::ZERO, &args);
        assert_eq!(geometry.radius, 30.0);
        assert_eq!(geometry.bounds, Rect::new(20.0, 20.0, 80.0, 80.0));
    }

    #[test]
    fn circle_radius_never_negative() {
        let args = ProgressViewArgs::default().track_stroke_width(40.0);
        let geometry = ProgressGeometry::compute(size(20, 20), Padding::ZERO, &args);
        assert_eq!(geometry.radius, 0.0);
    }

    #[test]
    fn rectangle_spans_padded_content() {
        let args = ProgressViewArgs::default().shape(ProgressShape::Rectangle);
        let padding = Padding::new(Px(10), Px(5), Px(20), Px(5));
        let geometry = ProgressGeometry::compute(size(230, 40), padding, &args);

        assert_eq!(geometry.bounds, Rect::new(10.0, 5.0, 210.0, 35.0));
        assert_eq!(geometry.content_width, 200.0);
        assert_eq!(geometry.corner_radius, 0.0);
    }

    #[test]
    fn rounded_rectangle_corner_is_half_height() {
        let args = ProgressViewArgs::default().shape(ProgressShape::RoundedRectangle);
        let geometry = ProgressGeometry::compute(size(200, 24), Padding::ZERO, &args);
        assert_eq!(geometry.corner_radius, 12.0);

        let args = args.corner_radius(4.0);
        let geometry = ProgressGeometry::compute(size(200, 24), Padding::ZERO, &args);
        assert_eq!(geometry.corner_radius, 4.0);
    }

    #[test]
    fn compute_is_idempotent() {
        let args = ProgressViewArgs::default();
        let first = ProgressGeometry::compute(size(90, 90), Padding::all(Px(3)), &args);
        let second = ProgressGeometry::compute(size(90, 90), Padding::all(Px(3)), &args);
        assert_eq!(first, second);
    }
}
