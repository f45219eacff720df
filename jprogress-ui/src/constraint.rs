//! # Layout Constraints
//!
//! A parent describes the space it offers a view with a [`Constraint`], one
//! [`DimensionValue`] per axis. A view resolves the constraint to its measured
//! size during the layout pass.
//!
//! ## Dimension Types
//!
//! ```
//! # use jprogress_ui::{DimensionValue, Px};
//! // A fixed 200px width.
//! let fixed = DimensionValue::Fixed(Px(200));
//!
//! // Fill whatever the parent has, up to 300px.
//! let fill = DimensionValue::Fill { min: None, max: Some(Px(300)) };
//!
//! // Size to content, at least 48px.
//! let wrap = DimensionValue::Wrap { min: Some(Px(48)), max: None };
//! ```

use thiserror::Error;

use crate::{Px, PxSize};

/// Defines how a dimension (width or height) should be calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    /// The dimension is a fixed value in pixels.
    Fixed(Px),

    /// The dimension wraps its content, optionally bounded by `min` and `max`.
    ///
    /// A view without intrinsic content (like a progress bar) takes the
    /// largest size it is allowed.
    Wrap {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound.
        max: Option<Px>,
    },

    /// The dimension fills the available space, optionally bounded.
    Fill {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound. Filling an unbounded dimension is an error.
        max: Option<Px>,
    },
}

impl DimensionValue {
    /// Fill with no constraints.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Wrap with no constraints.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Resolves the dimension to a concrete size for a view that has no
    /// intrinsic content.
    ///
    /// - `Fixed(px)` resolves to `px`.
    /// - `Fill` resolves to its `max`, or fails when it has none.
    /// - `Wrap` resolves to `max`, then `min`, then zero.
    pub fn resolve(&self, axis: Axis) -> Result<Px, MeasurementError> {
        match *self {
            DimensionValue::Fixed(px) => Ok(px),
            DimensionValue::Fill { max: Some(max), .. } => Ok(max),
            DimensionValue::Fill { max: None, .. } => Err(MeasurementError::UnboundedFill(axis)),
            DimensionValue::Wrap { min, max } => Ok(max.or(min).unwrap_or(Px::ZERO)),
        }
    }
}

impl Default for DimensionValue {
    /// Returns `Wrap { min: None, max: None }`.
    fn default() -> Self {
        DimensionValue::WRAP
    }
}

/// Which axis a dimension belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    Width,
    /// Vertical.
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// The space a parent offers a view, one dimension per axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Horizontal dimension.
    pub width: DimensionValue,
    /// Vertical dimension.
    pub height: DimensionValue,
}

impl Constraint {
    /// Creates a constraint from both dimensions.
    pub const fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// A constraint that fixes both axes.
    pub const fn fixed(width: Px, height: Px) -> Self {
        Self::new(DimensionValue::Fixed(width), DimensionValue::Fixed(height))
    }

    /// Resolves both axes, see [`DimensionValue::resolve`].
    pub fn resolve(&self) -> Result<PxSize, MeasurementError> {
        Ok(PxSize {
            width: self.width.resolve(Axis::Width)?,
            height: self.height.resolve(Axis::Height)?,
        })
    }
}

/// Errors raised while measuring a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasurementError {
    /// A `Fill` dimension had no upper bound.
    #[error("cannot fill an unbounded {0}")]
    UnboundedFill(Axis),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_wins() {
        assert_eq!(DimensionValue::Fixed(Px(120)).resolve(Axis::Width), Ok(Px(120)));
    }

    #[test]
    fn wrap_prefers_max_then_min() {
        let bounded = DimensionValue::Wrap {
            min: Some(Px(10)),
            max: Some(Px(50)),
        };
        assert_eq!(bounded.resolve(Axis::Width), Ok(Px(50)));

        let min_only = DimensionValue::Wrap {
            min: Some(Px(10)),
            max: None,
        };
        assert_eq!(min_only.resolve(Axis::Width), Ok(Px(10)));

        assert_eq!(DimensionValue::WRAP.resolve(Axis::Width), Ok(Px::ZERO));
    }

    #[test]
    fn unbounded_fill_is_an_error() {
        let constraint = Constraint::new(DimensionValue::Fixed(Px(10)), DimensionValue::FILLED);
        assert_eq!(
            constraint.resolve(),
            Err(MeasurementError::UnboundedFill(Axis::Height))
        );
    }

    #[test]
    fn bounded_fill_takes_max() {
        let constraint = Constraint::new(
            DimensionValue::Fill {
                min: None,
                max: Some(Px(300)),
            },
            DimensionValue::Fixed(Px(40)),
        );
        assert_eq!(constraint.resolve(), Ok(PxSize::new(Px(300), Px(40))));
    }
}
