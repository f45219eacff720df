//! Host services for running jprogress views outside a UI toolkit.
//!
//! ## Usage
//!
//! Hand a [`ThreadedClock`] and a [`RedrawQueue`] to the views, then block on
//! [`RedrawQueue::wait_dirty`] in the render loop.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod clock;
pub mod redraw_queue;

pub use clock::ThreadedClock;
pub use redraw_queue::{RedrawQueue, RedrawStats};
