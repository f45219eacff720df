//! Progress views for hosts implementing the `jprogress-ui` contract.
//!
//! # Usage
//!
//! Build a [`ProgressView`](progress_view::ProgressView) from host style
//! attributes (or explicit [`ProgressViewArgs`](progress_view::ProgressViewArgs)),
//! measure it, then draw it onto the host canvas whenever the host repaints.
//!
//! ```
//! use std::sync::Arc;
//!
//! use jprogress_components::progress_view::{ProgressView, ViewHost, attr};
//! use jprogress_ui::{
//!     AttrValue, AttributeSet, Constraint, Px, View,
//!     testing::{CountingInvalidator, ManualClock, RecordingCanvas},
//! };
//!
//! let host = ViewHost::new(Arc::new(ManualClock::new()), Arc::new(CountingInvalidator::default()));
//! let attributes = AttributeSet::new()
//!     .with(attr::SHAPE, AttrValue::Integer(1))
//!     .with(attr::PROGRESS, AttrValue::Integer(25));
//!
//! let mut view = ProgressView::new(&host, Some(&attributes));
//! view.measure(&Constraint::fixed(Px(120), Px(120)))?;
//! assert_eq!(view.sweep_angle(), 90.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! view.draw(&mut canvas);
//! # Ok::<(), jprogress_ui::MeasurementError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod progress_view;
