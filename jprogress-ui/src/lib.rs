//! Host contract for jprogress views.
//!
//! A custom view needs four things from the UI toolkit it lives in: a
//! [`Canvas`] to paint on, an [`AttributeSource`] to read its style from, an
//! [`AnimationClock`] to drive value animations, and an [`Invalidator`] to
//! ask for a repaint. This crate defines those seams as traits, plus the
//! value types that cross them (units, colors, rectangles, constraints).
//!
//! A view itself is anything implementing [`View`]:
//!
//! ```
//! use jprogress_ui::{Canvas, Constraint, MeasurementError, PxSize, View};
//!
//! struct Empty;
//!
//! impl View for Empty {
//!     fn measure(&mut self, constraint: &Constraint) -> Result<PxSize, MeasurementError> {
//!         constraint.resolve()
//!     }
//!
//!     fn draw(&mut self, _canvas: &mut dyn Canvas) {}
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` feature exposes in-memory implementations of every seam in
//! the [`testing`] module.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod attributes;
pub mod canvas;
pub mod color;
pub mod constraint;
pub mod dp;
pub mod px;
pub mod rect;
pub mod redraw;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod view;

pub use crate::{
    animation::{AnimationClock, AnimationHandle, AnimationSpec, TickCallback, ValueAnimator},
    attributes::{
        AttrValue, AttributeError, AttributeSet, AttributeSource, StyledAttributes,
        TypedAttributes,
    },
    canvas::{Canvas, DrawCommand, FontMetrics, Paint, PaintStyle, StrokeCap},
    color::Color,
    constraint::{Axis, Constraint, DimensionValue, MeasurementError},
    dp::Dp,
    px::{Padding, Px, PxSize},
    rect::Rect,
    redraw::{Invalidator, RedrawHandle},
    view::View,
};
