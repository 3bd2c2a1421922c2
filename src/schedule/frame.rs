use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// Ticket for one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Raw handle number.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Cancellable per-frame callback scheduling, as offered by the host's animation loop.
///
/// A scheduled frame fires once, on the next frame the host dispatches. Cancelling a handle that
/// already fired or was never issued is a no-op.
pub trait FrameScheduler {
    fn schedule(&self) -> FrameHandle;
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Debug, Default)]
struct QueueState {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
    cancelled: u64,
}

/// Host-driven frame queue shared by every controller of one view.
///
/// Cloning yields another handle to the same queue. The queue is single-threaded (`!Send`), like
/// the frame loop it stands in for.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    state: Rc<RefCell<QueueState>>,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every pending handle in scheduling order.
    ///
    /// Handles scheduled while the returned frames are dispatched land in the next batch.
    pub fn take_due(&self) -> Vec<FrameHandle> {
        let mut st = self.state.borrow_mut();
        std::mem::take(&mut st.pending).into_iter().collect()
    }

    /// Whether `handle` is scheduled and not yet taken or cancelled.
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.state.borrow().pending.contains(&handle)
    }

    /// Number of scheduled frames.
    pub fn pending_len(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Number of handles cancelled while still pending.
    pub fn cancelled_count(&self) -> u64 {
        self.state.borrow().cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&self) -> FrameHandle {
        let mut st = self.state.borrow_mut();
        let handle = FrameHandle(st.next_id);
        st.next_id += 1;
        st.pending.insert(handle);
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        let mut st = self.state.borrow_mut();
        if st.pending.remove(&handle) {
            st.cancelled += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame.rs"]
mod tests;
