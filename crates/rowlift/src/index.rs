//! Item/handle index.
//!
//! The index holds two parallel views of the list: the reorderable items
//! and the drag handles that receive focus. Both are recomputed from the
//! live tree at explicit synchronization points (after any structural
//! mutation, before any operation that depends on positions) and are
//! never patched incrementally.
//!
//! Immediately after [`ItemIndex::reindex`], `items[i]` corresponds to
//! `handles[i]`. Between a mutation and the next re-index the sequences
//! may be transiently stale; callers re-index before relying on them.

use crate::dom::{Dom, ElementId};
use crate::options::ReorderOptions;

/// Index-aligned sequences of items and their drag handles.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: Vec<ElementId>,
    handles: Vec<ElementId>,
}

impl ItemIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-scan the container for items and derive their handles.
    ///
    /// Items are the descendants of `container` matching the item
    /// selector, in document order. The handle is the first match of the
    /// drag selector inside each item, or the item itself when no drag
    /// selector is configured. An item with no handle match is excluded
    /// from both sequences, keeping them index-aligned.
    pub fn reindex<D: Dom>(&mut self, dom: &D, container: ElementId, options: &ReorderOptions) {
        self.items.clear();
        self.handles.clear();

        for item in dom.query(container, &options.item_selector) {
            let handle = match &options.drag_selector {
                Some(selector) => dom.query_first(item, selector),
                None => Some(item),
            };
            if let Some(handle) = handle {
                self.items.push(item);
                self.handles.push(handle);
            }
        }
    }

    /// The items, in document order.
    pub fn items(&self) -> &[ElementId] {
        &self.items
    }

    /// The handles, index-aligned with [`items`](Self::items).
    pub fn handles(&self) -> &[ElementId] {
        &self.handles
    }

    /// Position of an item in the sequence.
    pub fn item_position(&self, item: ElementId) -> Option<usize> {
        self.items.iter().position(|&i| i == item)
    }

    /// Position of a handle in the sequence.
    pub fn handle_position(&self, handle: ElementId) -> Option<usize> {
        self.handles.iter().position(|&h| h == handle)
    }

    /// The item owning a given handle.
    pub fn item_for_handle(&self, handle: ElementId) -> Option<ElementId> {
        self.handle_position(handle).map(|pos| self.items[pos])
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
