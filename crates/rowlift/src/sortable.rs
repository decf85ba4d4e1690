//! Pointer-drag collaborator.
//!
//! The mouse-driven half of reordering (drag physics, ghost rendering,
//! hit testing) belongs to an external sortable behavior. This module
//! defines the seam: [`Sortable`], the interface the list binds to, and
//! [`PointerSortable`], a reference implementation suitable for tests and
//! for embedders without a toolkit sortable of their own.
//!
//! The list only ever observes the collaborator through its completion
//! callback; how the reorder happened is invisible, which is what keeps
//! pointer- and keyboard-driven changes indistinguishable downstream.

use rowlift_core::logging::targets;

use crate::dom::{Dom, ElementId};
use crate::options::SortableOptions;

/// Callback invoked with the moved item when a pointer reorder completes.
pub type ReorderCompleteCallback = Box<dyn FnMut(ElementId) + Send>;

/// The injected sortable behavior.
///
/// Implementations receive the pass-through configuration once and
/// notify the registered callbacks after every completed pointer reorder,
/// with the tree already mutated.
pub trait Sortable {
    /// Apply the pass-through configuration.
    fn configure(&mut self, options: SortableOptions);

    /// Register a callback fired after each completed reorder.
    fn on_reorder_complete(&mut self, callback: ReorderCompleteCallback);
}

/// State of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// Pointer is down on an item, waiting for the drag threshold.
    Pending,
    /// A drag is in progress.
    Dragging,
}

/// A minimal pointer-driven sortable.
///
/// Tracks the press/threshold/drag/release lifecycle over one container.
/// The drop position is supplied explicitly on release; translating
/// pointer coordinates into a position is the host's concern.
pub struct PointerSortable {
    /// The container whose items this sortable reorders.
    container: ElementId,
    /// Pass-through configuration; inert until configured.
    options: Option<SortableOptions>,
    /// Current interaction state.
    state: SortState,
    /// Item under the pointer, while Pending or Dragging.
    dragged: Option<ElementId>,
    /// Pointer position at press time.
    start_position: (f32, f32),
    /// Minimum distance to move before a drag starts.
    drag_threshold: f32,
    /// Completion callbacks.
    callbacks: Vec<ReorderCompleteCallback>,
}

impl std::fmt::Debug for PointerSortable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSortable")
            .field("container", &self.container)
            .field("state", &self.state)
            .field("dragged", &self.dragged)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl PointerSortable {
    /// Default drag threshold in pixels.
    pub const DEFAULT_DRAG_THRESHOLD: f32 = 4.0;

    /// Create a sortable for a container. Inert until configured.
    pub fn new(container: ElementId) -> Self {
        Self {
            container,
            options: None,
            state: SortState::Idle,
            dragged: None,
            start_position: (0.0, 0.0),
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
            callbacks: Vec::new(),
        }
    }

    /// Set the minimum distance the pointer must travel to start a drag.
    pub fn set_drag_threshold(&mut self, threshold: f32) {
        self.drag_threshold = threshold;
    }

    /// Current interaction state.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state == SortState::Dragging
    }

    /// The item being dragged, if any.
    pub fn dragged_item(&self) -> Option<ElementId> {
        self.dragged
    }

    /// Handle a pointer press on `target`.
    ///
    /// Resolves the pressed item by walking up from `target` to the
    /// nearest ancestor matching the items selector within the container.
    /// Targets matching the cancel selector never start a drag.
    pub fn press<D: Dom>(&mut self, dom: &D, target: ElementId, position: (f32, f32)) {
        let Some(options) = &self.options else {
            return;
        };
        if self.state != SortState::Idle {
            return;
        }
        if let Some(cancel) = &options.cancel
            && cancel.matches(dom, target)
        {
            return;
        }
        let Some(item) = self.resolve_item(dom, target) else {
            return;
        };
        self.state = SortState::Pending;
        self.dragged = Some(item);
        self.start_position = position;
    }

    /// Handle pointer movement.
    ///
    /// Returns `true` once the drag threshold has been crossed and a drag
    /// is active. While dragging, the placeholder class marks the dragged
    /// item.
    pub fn update<D: Dom>(&mut self, dom: &mut D, position: (f32, f32)) -> bool {
        match self.state {
            SortState::Idle => false,
            SortState::Dragging => true,
            SortState::Pending => {
                let dx = position.0 - self.start_position.0;
                let dy = position.1 - self.start_position.1;
                if (dx * dx + dy * dy).sqrt() < self.drag_threshold {
                    return false;
                }
                self.state = SortState::Dragging;
                if let (Some(item), Some(options)) = (self.dragged, &self.options) {
                    dom.add_class(item, &options.placeholder_class);
                }
                tracing::debug!(target: targets::SORTABLE, "pointer drag started");
                true
            }
        }
    }

    /// Handle pointer release at a target position among the container's
    /// items.
    ///
    /// When a drag was active, repositions the dragged item (clamping the
    /// position to the valid range) and notifies the completion
    /// callbacks. A release before the threshold was crossed is a plain
    /// click and changes nothing.
    pub fn release<D: Dom>(&mut self, dom: &mut D, target_position: usize) {
        let dragging = self.state == SortState::Dragging;
        let dragged = self.dragged.take();
        self.state = SortState::Idle;

        let (Some(item), Some(options)) = (dragged, &self.options) else {
            return;
        };
        if !dragging {
            return;
        }

        dom.remove_class(item, &options.placeholder_class);

        let siblings: Vec<ElementId> = dom
            .query(self.container, &options.items)
            .into_iter()
            .filter(|&other| other != item)
            .collect();
        let position = target_position.min(siblings.len());
        if position == siblings.len() {
            if let Some(&last) = siblings.last() {
                dom.insert_after(item, last);
            }
        } else {
            dom.insert_before(item, siblings[position]);
        }

        tracing::debug!(
            target: targets::SORTABLE,
            position,
            "pointer reorder complete"
        );
        for callback in &mut self.callbacks {
            callback(item);
        }
    }

    /// Abort the current interaction without reordering.
    pub fn cancel<D: Dom>(&mut self, dom: &mut D) {
        if let (Some(item), Some(options)) = (self.dragged.take(), &self.options) {
            dom.remove_class(item, &options.placeholder_class);
        }
        self.state = SortState::Idle;
    }

    /// Find the nearest ancestor-or-self of `target` that is an item of
    /// this container.
    fn resolve_item<D: Dom>(&self, dom: &D, target: ElementId) -> Option<ElementId> {
        let options = self.options.as_ref()?;
        let mut current = Some(target);
        while let Some(element) = current {
            if element == self.container {
                return None;
            }
            if options.items.matches(dom, element) {
                // The item must live inside the container.
                let mut ancestor = dom.parent(element);
                while let Some(a) = ancestor {
                    if a == self.container {
                        return Some(element);
                    }
                    ancestor = dom.parent(a);
                }
                return None;
            }
            current = dom.parent(element);
        }
        None
    }
}

impl Sortable for PointerSortable {
    fn configure(&mut self, options: SortableOptions) {
        self.options = Some(options);
    }

    fn on_reorder_complete(&mut self, callback: ReorderCompleteCallback) {
        self.callbacks.push(callback);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::dom::MemoryDom;
    use crate::selector::Selector;

    fn fixture() -> (MemoryDom, ElementId, Vec<ElementId>, PointerSortable) {
        let mut dom = MemoryDom::new();
        let list = dom.create_element("ul");
        dom.append_child(dom.root(), list);
        let items: Vec<_> = (0..3)
            .map(|n| {
                let item = dom.create_element("li");
                dom.set_text(item, &format!("Item {n}"));
                dom.append_child(list, item);
                item
            })
            .collect();
        let mut sortable = PointerSortable::new(list);
        sortable.configure(SortableOptions::for_items(Selector::type_selector("li")));
        (dom, list, items, sortable)
    }

    #[test]
    fn test_unconfigured_sortable_is_inert() {
        let mut dom = MemoryDom::new();
        let list = dom.create_element("ul");
        dom.append_child(dom.root(), list);
        let mut sortable = PointerSortable::new(list);

        sortable.press(&dom, list, (0.0, 0.0));
        assert_eq!(sortable.state(), SortState::Idle);
    }

    #[test]
    fn test_release_below_threshold_is_a_click() {
        let (mut dom, list, items, mut sortable) = fixture();

        sortable.press(&dom, items[0], (10.0, 10.0));
        assert!(!sortable.update(&mut dom, (11.0, 10.0)));
        sortable.release(&mut dom, 2);

        assert_eq!(dom.children(list), items);
        assert_eq!(sortable.state(), SortState::Idle);
    }

    #[test]
    fn test_drag_reorders_and_notifies() {
        let (mut dom, list, items, mut sortable) = fixture();
        let completed = Arc::new(Mutex::new(Vec::new()));
        let completed_clone = completed.clone();
        sortable.on_reorder_complete(Box::new(move |item| {
            completed_clone.lock().push(item);
        }));

        sortable.press(&dom, items[0], (10.0, 10.0));
        assert!(sortable.update(&mut dom, (10.0, 40.0)));
        assert!(dom.has_class(items[0], "rowlift-placeholder"));

        sortable.release(&mut dom, 2);
        assert_eq!(dom.children(list), vec![items[1], items[2], items[0]]);
        assert!(!dom.has_class(items[0], "rowlift-placeholder"));
        assert_eq!(*completed.lock(), vec![items[0]]);
    }

    #[test]
    fn test_release_position_is_clamped() {
        let (mut dom, list, items, mut sortable) = fixture();

        sortable.press(&dom, items[1], (0.0, 0.0));
        sortable.update(&mut dom, (0.0, 100.0));
        sortable.release(&mut dom, 99);

        assert_eq!(dom.children(list), vec![items[0], items[2], items[1]]);
    }

    #[test]
    fn test_cancel_selector_blocks_drag() {
        let (mut dom, _, items, mut sortable) = fixture();
        sortable.configure(
            SortableOptions::for_items(Selector::type_selector("li"))
                .with_cancel(Selector::class("pinned")),
        );
        dom.add_class(items[0], "pinned");

        sortable.press(&dom, items[0], (0.0, 0.0));
        assert_eq!(sortable.state(), SortState::Idle);

        sortable.press(&dom, items[1], (0.0, 0.0));
        assert_eq!(sortable.state(), SortState::Pending);
    }

    #[test]
    fn test_press_resolves_item_from_descendant() {
        let (mut dom, _, items, mut sortable) = fixture();
        let grip = dom.create_element("span");
        dom.append_child(items[2], grip);

        sortable.press(&dom, grip, (0.0, 0.0));
        assert_eq!(sortable.dragged_item(), Some(items[2]));
    }

    #[test]
    fn test_cancel_resets_state() {
        let (mut dom, list, items, mut sortable) = fixture();

        sortable.press(&dom, items[0], (0.0, 0.0));
        sortable.update(&mut dom, (0.0, 50.0));
        sortable.cancel(&mut dom);

        assert_eq!(sortable.state(), SortState::Idle);
        assert!(!dom.has_class(items[0], "rowlift-placeholder"));
        assert_eq!(dom.children(list), items);
    }
}
