//! # Physical Pixels
//!
//! Whole-pixel measurements used by the layout pass: measured sizes,
//! constraint bounds and padding. Drawing coordinates are `f32`; see
//! [`Rect`](crate::Rect).

/// A whole number of physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Px(0);

    /// Returns the value as an `f32` drawing coordinate.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Px) -> Px {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Subtraction that never goes below zero.
    pub fn saturating_sub_to_zero(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0).max(0))
    }
}

/// A measured width and height.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width in pixels.
    pub width: Px,
    /// Height in pixels.
    pub height: Px,
}

impl PxSize {
    /// A zero-sized measurement.
    pub const ZERO: Self = PxSize {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// Space kept free on each side of a view's content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Left inset.
    pub left: Px,
    /// Top inset.
    pub top: Px,
    /// Right inset.
    pub right: Px,
    /// Bottom inset.
    pub bottom: Px,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Padding {
        left: Px::ZERO,
        top: Px::ZERO,
        right: Px::ZERO,
        bottom: Px::ZERO,
    };

    /// The same inset on all four sides.
    pub const fn all(value: Px) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Explicit insets, in left, top, right, bottom order.
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> Px {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> Px {
        self.top.saturating_add(self.bottom)
    }

    /// Size left for content once the padding is removed from `size`.
    pub fn shrink(&self, size: PxSize) -> PxSize {
        PxSize {
            width: size.width.saturating_sub_to_zero(self.horizontal()),
            height: size.height.saturating_sub_to_zero(self.vertical()),
        }
    }
}
