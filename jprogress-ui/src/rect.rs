//! Floating point rectangles for drawing.

/// An axis-aligned rectangle in drawing coordinates.
///
/// `left <= right` and `top <= bottom` hold for every rectangle produced by
/// the layout code, but the type itself does not enforce it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from an origin and a size.
    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// The square that encloses a circle of `radius` around `(cx, cy)`.
    pub fn around_center(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Horizontal midpoint.
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}
