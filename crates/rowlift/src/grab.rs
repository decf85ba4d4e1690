//! Grab/release state machine.
//!
//! At most one handle in a container is ever grabbed. [`GrabManager`]
//! enforces that invariant the blunt way: every transition first forces a
//! full-sweep release (visual classes, grabbed flag, `aria-grabbed`)
//! across *all* items and handles, and only then applies the new grab.
//! The sweep is deliberately not a targeted diff: external mutation may
//! have changed which item looks active, and observers depend on the
//! clear/set ordering.
//!
//! The manager holds no tree reference; like the focus manager pattern,
//! the tree is passed into every call.

use crate::dom::{Dom, ElementId, attrs};
use crate::index::ItemIndex;
use crate::options::ReorderOptions;

/// Tracks which handle, if any, is currently grabbed.
#[derive(Debug, Default)]
pub struct GrabManager {
    /// The currently grabbed handle, if any.
    grabbed: Option<ElementId>,
}

impl GrabManager {
    /// Create a new manager with nothing grabbed.
    pub fn new() -> Self {
        Self { grabbed: None }
    }

    /// The currently grabbed handle.
    #[inline]
    pub fn grabbed_handle(&self) -> Option<ElementId> {
        self.grabbed
    }

    /// Check if a specific handle is grabbed.
    #[inline]
    pub fn is_grabbed(&self, handle: ElementId) -> bool {
        self.grabbed == Some(handle)
    }

    /// Force every handle back to the released state.
    ///
    /// Strips the active and inactive classes from every item, sets
    /// `aria-grabbed="false"` on every handle, and clears the grabbed
    /// flag. Safe to call redundantly.
    pub fn release_all<D: Dom>(
        &mut self,
        dom: &mut D,
        index: &ItemIndex,
        options: &ReorderOptions,
    ) {
        for &item in index.items() {
            if let Some(class) = &options.active_class {
                dom.remove_class(item, class);
            }
            if let Some(class) = &options.inactive_class {
                dom.remove_class(item, class);
            }
        }
        for &handle in index.handles() {
            dom.set_attribute(handle, attrs::ARIA_GRABBED, "false");
        }
        self.grabbed = None;
    }

    /// Enter the grabbed state for the handle at `position`.
    ///
    /// Callers run [`release_all`](Self::release_all) first; this method
    /// only applies the grab side effects: the grabbed flag, the active
    /// class on the owning item, the inactive class on every other item
    /// when configured, and `aria-grabbed="true"`. The attribute is set
    /// unconditionally, whether or not any class is configured.
    pub fn grab<D: Dom>(
        &mut self,
        dom: &mut D,
        index: &ItemIndex,
        options: &ReorderOptions,
        position: usize,
    ) {
        let (Some(&item), Some(&handle)) = (
            index.items().get(position),
            index.handles().get(position),
        ) else {
            return;
        };

        self.grabbed = Some(handle);

        if let Some(class) = &options.active_class {
            dom.add_class(item, class);
        }
        if let Some(class) = &options.inactive_class {
            for &other in index.items() {
                if other != item {
                    dom.add_class(other, class);
                }
            }
        }
        dom.set_attribute(handle, attrs::ARIA_GRABBED, "true");
    }

    /// Forget the grabbed state without touching the tree.
    ///
    /// Used when the container is torn down and the tree may already be
    /// gone.
    pub fn clear(&mut self) {
        self.grabbed = None;
    }
}
