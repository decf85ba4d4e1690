//! Live-region announcer.
//!
//! Each container owns exactly one off-screen live region, created when
//! the container is attached and removed when it is detached. It is
//! never a process-wide singleton, so multiple independent lists can
//! coexist on one tree.
//!
//! Text swaps are deferred by one cooperative tick: screen readers
//! generally fail to pick up live-region changes that land in the same
//! tick as a structural mutation, so [`announce`](LiveAnnouncer::announce)
//! only schedules and [`flush`](LiveAnnouncer::flush) applies. The
//! deferral is mandatory, not cosmetic.

use rowlift_core::logging::targets;
use rowlift_core::{DeferredQueue, DeferredTaskId};

use crate::dom::{Dom, ElementId, attrs};

/// A per-container live region with deferred text swaps.
#[derive(Debug)]
pub struct LiveAnnouncer {
    /// The live-region element.
    region: ElementId,
    /// Swaps scheduled for the next tick.
    pending: DeferredQueue<String>,
}

impl LiveAnnouncer {
    /// Create the live region and append it to the tree root.
    ///
    /// The region is polite, announces additions, and is read atomically.
    pub fn attach<D: Dom>(dom: &mut D) -> Self {
        let region = dom.create_element("div");
        dom.set_attribute(region, attrs::ARIA_LIVE, "polite");
        dom.set_attribute(region, attrs::ARIA_RELEVANT, "additions");
        dom.set_attribute(region, attrs::ARIA_ATOMIC, "true");
        let root = dom.root();
        dom.append_child(root, region);
        Self {
            region,
            pending: DeferredQueue::new(),
        }
    }

    /// The live-region element.
    pub fn region(&self) -> ElementId {
        self.region
    }

    /// Schedule `text` to replace the region's content on the next tick.
    ///
    /// Empty text is a no-op (e.g. a template configured as the empty
    /// string). Returns the task ID when a swap was scheduled.
    pub fn announce(&mut self, text: impl Into<String>) -> Option<DeferredTaskId> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        tracing::debug!(target: targets::ANNOUNCER, %text, "scheduling announcement");
        Some(self.pending.schedule(text))
    }

    /// Number of swaps waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply every pending swap, in submission order.
    ///
    /// The region ends up holding the most recently scheduled text.
    /// Returns the number of swaps applied.
    pub fn flush<D: Dom>(&mut self, dom: &mut D) -> usize {
        let swaps = self.pending.drain();
        let count = swaps.len();
        for text in swaps {
            dom.set_text(self.region, &text);
        }
        count
    }

    /// Remove the live region from the tree, discarding pending swaps.
    pub fn detach<D: Dom>(self, dom: &mut D) {
        dom.remove(self.region);
    }
}
