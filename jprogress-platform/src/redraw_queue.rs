//! A blocking redraw queue for simple render loops.

use std::time::Duration;

use jprogress_ui::Invalidator;
use parking_lot::{Condvar, Mutex};

/// Redraw requests received so far, split by how they arrived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RedrawStats {
    /// Requests made on the UI thread.
    pub direct: usize,
    /// Requests posted from other threads.
    pub deferred: usize,
}

#[derive(Default)]
struct QueueState {
    dirty: bool,
    stats: RedrawStats,
}

/// An [`Invalidator`] that coalesces requests into a single dirty flag.
///
/// The render loop blocks on [`wait_dirty`](Self::wait_dirty) and repaints
/// once per wake-up, however many requests arrived in between.
#[derive(Default)]
pub struct RedrawQueue {
    state: Mutex<QueueState>,
    ready: Condvar,
}

impl RedrawQueue {
    /// An empty, clean queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `timeout` for a request and clears the dirty flag.
    ///
    /// Returns `true` when a repaint is due.
    pub fn wait_dirty(&self, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        if !state.dirty {
            self.ready
                .wait_while_for(&mut state, |state| !state.dirty, timeout);
        }
        std::mem::take(&mut state.dirty)
    }

    /// Clears the dirty flag without waiting. Returns whether it was set.
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.state.lock().dirty)
    }

    /// Counts of requests received so far.
    pub fn stats(&self) -> RedrawStats {
        self.state.lock().stats
    }

    fn mark(&self, record: impl FnOnce(&mut RedrawStats)) {
        let mut state = self.state.lock();
        state.dirty = true;
        record(&mut state.stats);
        self.ready.notify_all();
    }
}

impl Invalidator for RedrawQueue {
    fn invalidate(&self) {
        self.mark(|stats| stats.direct += 1);
    }

    fn post_invalidate(&self) {
        self.mark(|stats| stats.deferred += 1);
    }
}
