//! # Redraw Requests
//!
//! A view asks the host to repaint it through an [`Invalidator`]. Hosts only
//! allow a direct request from the UI thread; every other thread must use the
//! deferred, thread-safe variant.
//!
//! [`RedrawHandle`] remembers which thread is the UI thread and picks the
//! right call, so code running on an animation thread can request a redraw
//! without knowing where it runs.

use std::{
    fmt,
    sync::Arc,
    thread::{self, ThreadId},
};

/// The host's repaint scheduler.
pub trait Invalidator: Send + Sync {
    /// Marks the view dirty. Only valid on the UI thread.
    fn invalidate(&self);

    /// Marks the view dirty from any thread; the host applies it on its next
    /// UI-thread turn.
    fn post_invalidate(&self);
}

/// Routes redraw requests to [`Invalidator::invalidate`] on the UI thread and
/// to [`Invalidator::post_invalidate`] everywhere else.
#[derive(Clone)]
pub struct RedrawHandle {
    ui_thread: ThreadId,
    invalidator: Arc<dyn Invalidator>,
}

impl RedrawHandle {
    /// Creates a handle that treats the calling thread as the UI thread.
    pub fn new(invalidator: Arc<dyn Invalidator>) -> Self {
        Self {
            ui_thread: thread::current().id(),
            invalidator,
        }
    }

    /// Whether the calling thread is the UI thread.
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.ui_thread
    }

    /// Requests a redraw from whatever thread this runs on.
    pub fn request(&self) {
        if self.is_ui_thread() {
            self.invalidator.invalidate();
        } else {
            tracing::trace!("redraw requested off the ui thread, deferring");
            self.invalidator.post_invalidate();
        }
    }
}

impl fmt::Debug for RedrawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawHandle")
            .field("ui_thread", &self.ui_thread)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingInvalidator;

    #[test]
    fn ui_thread_requests_are_direct() {
        let invalidator = Arc::new(CountingInvalidator::default());
        let handle = RedrawHandle::new(invalidator.clone());
        handle.request();
        assert_eq!(invalidator.direct(), 1);
        assert_eq!(invalidator.deferred(), 0);
    }

    #[test]
    fn other_thread_requests_are_deferred() {
        let invalidator = Arc::new(CountingInvalidator::default());
        let handle = RedrawHandle::new(invalidator.clone());
        let worker = handle.clone();
        thread::spawn(move || {
            assert!(!worker.is_ui_thread());
            worker.request();
        })
        .join()
        .expect("worker thread panicked");
        assert_eq!(invalidator.direct(), 0);
        assert_eq!(invalidator.deferred(), 1);
    }
}
