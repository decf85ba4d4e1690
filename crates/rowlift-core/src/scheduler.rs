//! Deferred single-shot task queue for next-tick execution.
//!
//! Live-region text swaps must not happen in the same tick as the DOM
//! mutation that triggered them, or screen readers fail to pick them up.
//! [`DeferredQueue`] is the cooperative mechanism behind that deferral: a
//! FIFO queue of single-shot payloads, scheduled now and drained at the
//! caller's next processing point.
//!
//! The queue is payload-typed rather than closure-typed so drained tasks
//! can borrow whatever context (typically the element tree) is available
//! at the synchronization point.
//!
//! # Example
//!
//! ```
//! use rowlift_core::DeferredQueue;
//!
//! let mut queue = DeferredQueue::new();
//! queue.schedule("first");
//! queue.schedule("second");
//!
//! // Nothing runs until the next tick drains the queue.
//! assert_eq!(queue.drain(), vec!["first", "second"]);
//! assert!(queue.is_empty());
//! ```

use std::collections::VecDeque;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a deferred task.
    pub struct DeferredTaskId;
}

/// A FIFO queue of single-shot deferred tasks.
///
/// Tasks are drained in submission order; no ordering is guaranteed
/// relative to anything other than earlier submissions to the same queue.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    /// Payloads for all pending tasks.
    tasks: SlotMap<DeferredTaskId, T>,
    /// Submission order of pending tasks.
    order: VecDeque<DeferredTaskId>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: VecDeque::new(),
        }
    }

    /// Schedule a task for the next drain.
    ///
    /// Returns the task ID that can be used to cancel the task before it
    /// runs.
    pub fn schedule(&mut self, value: T) -> DeferredTaskId {
        let id = self.tasks.insert(value);
        self.order.push_back(id);
        id
    }

    /// Cancel a pending task, returning its payload if it had not yet
    /// been drained.
    pub fn cancel(&mut self, id: DeferredTaskId) -> Option<T> {
        // The stale entry in `order` is skipped at drain time.
        self.tasks.remove(id)
    }

    /// Take every pending task, in submission order.
    pub fn drain(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.tasks.len());
        while let Some(id) = self.order.pop_front() {
            if let Some(value) = self.tasks.remove(id) {
                drained.push(value);
            }
        }
        tracing::trace!(
            target: crate::logging::targets::SCHEDULER,
            count = drained.len(),
            "drained deferred tasks"
        );
        drained
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether any tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_fifo_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(1);
        queue.schedule(2);
        queue.schedule(3);
        assert_eq!(queue.drain(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_removes_pending_task() {
        let mut queue = DeferredQueue::new();
        let keep = queue.schedule("keep");
        let drop = queue.schedule("drop");
        assert_eq!(queue.cancel(drop), Some("drop"));
        assert_eq!(queue.cancel(drop), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain(), vec!["keep"]);
        let _ = keep;
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = DeferredQueue::new();
        queue.schedule(());
        assert!(!queue.is_empty());
        let _ = queue.drain();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_schedule_after_drain() {
        let mut queue = DeferredQueue::new();
        queue.schedule("a");
        let _ = queue.drain();
        queue.schedule("b");
        assert_eq!(queue.drain(), vec!["b"]);
    }
}
