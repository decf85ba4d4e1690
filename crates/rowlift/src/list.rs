//! The reorderable list controller.
//!
//! [`ReorderList`] is attached to a container element once and from then
//! on funnels every mutation, keyboard-driven or pointer-driven, through
//! a single re-index + notify + announce pipeline. It owns the
//! container's [`ItemIndex`], [`GrabManager`], and [`LiveAnnouncer`], and
//! exposes change notification through public signals in place of
//! callbacks.
//!
//! # Key contract (per handle)
//!
//! | Key | Effect |
//! |-----|--------|
//! | Enter / Space | Toggle the grab state |
//! | Left / Up | Move the grabbed item toward the start |
//! | Right / Down | Move the grabbed item toward the end |
//! | Tab | Auto-release before focus leaves |
//!
//! Directional keys on a non-grabbed handle are ignored so default
//! behavior (scrolling, caret movement) is preserved.
//!
//! # Example
//!
//! ```
//! use rowlift::dom::{Dom, MemoryDom};
//! use rowlift::events::{Key, KeyPressEvent, KeyboardModifiers};
//! use rowlift::{ReorderList, ReorderOptions};
//!
//! let mut dom = MemoryDom::new();
//! let list_element = dom.create_element("ul");
//! dom.append_child(dom.root(), list_element);
//! for text in ["A", "B", "C"] {
//!     let item = dom.create_element("li");
//!     dom.set_text(item, text);
//!     dom.append_child(list_element, item);
//! }
//!
//! let mut list = ReorderList::attach(&mut dom, list_element, ReorderOptions::default());
//! let b = list.items()[1];
//!
//! // Grab B, move it down one position.
//! let mut enter = KeyPressEvent::new(Key::Enter, KeyboardModifiers::none());
//! list.handle_key_press(&mut dom, b, &mut enter);
//! let mut down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::none());
//! list.handle_key_press(&mut dom, b, &mut down);
//!
//! assert_eq!(list.items()[2], b);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use rowlift_core::Signal;
use rowlift_core::logging::targets;

use crate::announcer::LiveAnnouncer;
use crate::dom::{Dom, ElementId, attrs};
use crate::events::{Key, KeyPressEvent};
use crate::grab::GrabManager;
use crate::index::ItemIndex;
use crate::options::ReorderOptions;
use crate::sortable::Sortable;
use crate::template::interpolate;

/// Direction of a keyboard-driven move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the first item (Left/Up).
    TowardStart,
    /// Toward the last item (Right/Down).
    TowardEnd,
}

impl MoveDirection {
    /// Map a directional key to its move direction.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft | Key::ArrowUp => Some(Self::TowardStart),
            Key::ArrowRight | Key::ArrowDown => Some(Self::TowardEnd),
            _ => None,
        }
    }
}

/// Keyboard-accessible reordering for one container element.
#[derive(Debug)]
pub struct ReorderList {
    /// The container element.
    container: ElementId,
    /// Immutable configuration.
    options: ReorderOptions,
    /// Item/handle index, recomputed at synchronization points.
    index: ItemIndex,
    /// Grab state machine.
    grab: GrabManager,
    /// Per-container live region.
    announcer: LiveAnnouncer,
    /// Completed pointer reorders awaiting processing.
    pointer_reorders: Arc<Mutex<VecDeque<ElementId>>>,

    // Signals
    /// Emitted after every successful reorder, keyboard- or
    /// pointer-driven, with the moved item and the full item sequence.
    pub order_changed: Signal<(ElementId, Vec<ElementId>)>,
    /// Emitted when a handle enters the grabbed state, with its row.
    pub item_grabbed: Signal<usize>,
    /// Emitted when a handle is explicitly released, with its row.
    /// A release forced by grabbing another handle does not emit.
    pub item_released: Signal<usize>,
}

impl ReorderList {
    /// Attach reordering behavior to a container.
    ///
    /// Creates the live region, indexes the current items, and decorates
    /// every handle (focusable, button role, `aria-grabbed="false"`,
    /// move drop effect).
    pub fn attach<D: Dom>(dom: &mut D, container: ElementId, options: ReorderOptions) -> Self {
        let announcer = LiveAnnouncer::attach(dom);
        let mut list = Self {
            container,
            options,
            index: ItemIndex::new(),
            grab: GrabManager::new(),
            announcer,
            pointer_reorders: Arc::new(Mutex::new(VecDeque::new())),
            order_changed: Signal::new(),
            item_grabbed: Signal::new(),
            item_released: Signal::new(),
        };
        list.refresh(dom);
        list
    }

    /// The container element.
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The configuration supplied at attach time.
    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// The indexed items, as of the last re-index.
    pub fn items(&self) -> &[ElementId] {
        self.index.items()
    }

    /// The indexed handles, as of the last re-index.
    pub fn handles(&self) -> &[ElementId] {
        self.index.handles()
    }

    /// The currently grabbed handle, if any.
    pub fn grabbed_handle(&self) -> Option<ElementId> {
        self.grab.grabbed_handle()
    }

    /// Check if a specific handle is grabbed.
    pub fn is_grabbed(&self, handle: ElementId) -> bool {
        self.grab.is_grabbed(handle)
    }

    /// The live-region element owned by this container.
    pub fn live_region(&self) -> ElementId {
        self.announcer.region()
    }

    /// Re-scan the container for items and handles.
    ///
    /// Call after any structural change and before relying on positions.
    /// An empty result set is valid; every dependent operation becomes a
    /// no-op.
    pub fn reindex<D: Dom>(&mut self, dom: &D) {
        self.index.reindex(dom, self.container, &self.options);
    }

    /// Re-index and (re)decorate every handle.
    ///
    /// Gives each handle `tabindex="0"`, `role="button"`,
    /// `aria-grabbed="false"`, and `aria-dropeffect="move"`, and strips
    /// the active/inactive classes from every item. Any grab in progress
    /// is reset.
    pub fn refresh<D: Dom>(&mut self, dom: &mut D) {
        self.grab.clear();
        self.reindex(dom);
        for &handle in self.index.handles() {
            dom.set_attribute(handle, attrs::TAB_INDEX, "0");
            dom.set_attribute(handle, attrs::ROLE, "button");
            dom.set_attribute(handle, attrs::ARIA_GRABBED, "false");
            dom.set_attribute(handle, attrs::ARIA_DROPEFFECT, "move");
        }
        for &item in self.index.items() {
            if let Some(class) = &self.options.active_class {
                dom.remove_class(item, class);
            }
            if let Some(class) = &self.options.inactive_class {
                dom.remove_class(item, class);
            }
        }
    }

    /// Toggle the grab state of a handle (click or activation key).
    ///
    /// Grabbing always forces every handle back to released first, so at
    /// most one handle is grabbed no matter how rapidly activations
    /// arrive. Unknown handles are ignored.
    pub fn activate<D: Dom>(&mut self, dom: &mut D, handle: ElementId) {
        self.reindex(dom);
        let Some(position) = self.index.handle_position(handle) else {
            return;
        };
        let was_grabbed = self.grab.is_grabbed(handle);

        // Full sweep, not a targeted diff: external mutation may have
        // changed which item carries the classes.
        self.grab.release_all(dom, &self.index, &self.options);

        if was_grabbed {
            tracing::debug!(target: targets::LIST, row = position, "handle released");
            self.item_released.emit(position);
            if let Some(template) = self.options.announcement.drop.clone() {
                self.announce_subject(dom, &template, position, position);
            }
        } else {
            self.grab.grab(dom, &self.index, &self.options, position);
            tracing::debug!(target: targets::LIST, row = position, "handle grabbed");
            self.item_grabbed.emit(position);
            if let Some(template) = self.options.announcement.grab.clone() {
                self.announce_subject(dom, &template, position, position);
            }
        }
    }

    /// Interpret a key press targeting a handle.
    ///
    /// Accepting the event marks its default behavior as consumed; Tab is
    /// deliberately left unaccepted so focus traversal continues after
    /// the auto-release.
    pub fn handle_key_press<D: Dom>(
        &mut self,
        dom: &mut D,
        handle: ElementId,
        event: &mut KeyPressEvent,
    ) {
        match event.key {
            Key::Enter | Key::Space => {
                event.base.accept();
                self.activate(dom, handle);
            }
            key if key.is_directional() => {
                if self.grab.is_grabbed(handle) {
                    event.base.accept();
                    if let Some(direction) = MoveDirection::from_key(key) {
                        self.move_toward(dom, handle, direction);
                    }
                }
            }
            Key::Tab => {
                if self.grab.is_grabbed(handle) {
                    self.activate(dom, handle);
                }
            }
            _ => {}
        }
    }

    /// Move the item owning `handle` one position in `direction`.
    ///
    /// Moving past either end of the list is a deliberate no-op clamp,
    /// not an error: no wraparound, focus and order stay unchanged. A
    /// successful move repositions exactly one item, returns focus to the
    /// moved handle, re-indexes, emits
    /// [`order_changed`](Self::order_changed), and announces the new
    /// position.
    pub fn move_toward<D: Dom>(&mut self, dom: &mut D, handle: ElementId, direction: MoveDirection) {
        let Some(position) = self.index.handle_position(handle) else {
            return;
        };
        let adjacent = match direction {
            MoveDirection::TowardStart => {
                if position == 0 {
                    return;
                }
                position - 1
            }
            MoveDirection::TowardEnd => {
                if position + 1 >= self.index.len() {
                    return;
                }
                position + 1
            }
        };

        let item = self.index.items()[position];
        let adjacent_item = self.index.items()[adjacent];
        match direction {
            MoveDirection::TowardStart => dom.insert_before(item, adjacent_item),
            MoveDirection::TowardEnd => dom.insert_after(item, adjacent_item),
        }

        // Focus must never be lost on a successful move.
        dom.focus(handle);
        self.reindex(dom);

        tracing::debug!(
            target: targets::LIST,
            from = position,
            to = adjacent,
            "item moved"
        );
        self.order_changed.emit((item, self.index.items().to_vec()));

        if let Some(template) = self.options.announcement.reorder.clone()
            && let Some(new_position) = self.index.item_position(item)
        {
            self.announce_subject(dom, &template, new_position, new_position + 1);
        }
    }

    /// Bind an external sortable behavior to this list.
    ///
    /// Forwards the pass-through options (or the synthesized default) and
    /// registers a completion callback. Completed pointer reorders are
    /// queued and finished by
    /// [`process_pointer_reorders`](Self::process_pointer_reorders).
    pub fn attach_sortable<S: Sortable + ?Sized>(&self, sortable: &mut S) {
        sortable.configure(self.options.sortable_options());
        let queue = Arc::clone(&self.pointer_reorders);
        sortable.on_reorder_complete(Box::new(move |item| {
            queue.lock().push_back(item);
        }));
    }

    /// Finish a pointer-driven reorder the external behavior already
    /// applied to the tree: re-index, then emit
    /// [`order_changed`](Self::order_changed) with the same shape as the
    /// keyboard path.
    pub fn complete_pointer_reorder<D: Dom>(&mut self, dom: &mut D, item: ElementId) {
        self.reindex(dom);
        tracing::debug!(target: targets::LIST, "pointer reorder completed");
        self.order_changed.emit((item, self.index.items().to_vec()));
    }

    /// Drain and finish all queued pointer reorders.
    pub fn process_pointer_reorders<D: Dom>(&mut self, dom: &mut D) -> usize {
        let completed: Vec<ElementId> = {
            let mut queue = self.pointer_reorders.lock();
            queue.drain(..).collect()
        };
        let count = completed.len();
        for item in completed {
            self.complete_pointer_reorder(dom, item);
        }
        count
    }

    /// The cooperative processing point: finish queued pointer reorders
    /// and apply deferred announcement swaps. Returns the number of
    /// actions performed.
    pub fn process_pending<D: Dom>(&mut self, dom: &mut D) -> usize {
        let reorders = self.process_pointer_reorders(dom);
        let announcements = self.announcer.flush(dom);
        reorders + announcements
    }

    /// Tear the list down: release any grab, remove the live region.
    ///
    /// The underlying markup keeps working as a plain list.
    pub fn detach<D: Dom>(mut self, dom: &mut D) {
        self.grab.release_all(dom, &self.index, &self.options);
        self.announcer.detach(dom);
    }

    /// Render and schedule an announcement about the item at
    /// `item_position`, substituting (text, `announced_position`, total).
    fn announce_subject<D: Dom>(
        &mut self,
        dom: &mut D,
        template: &str,
        item_position: usize,
        announced_position: usize,
    ) {
        let Some(&item) = self.index.items().get(item_position) else {
            return;
        };
        let text = self.subject_text(dom, item);
        let rendered = interpolate(
            template,
            &[
                &text,
                &announced_position.to_string(),
                &self.index.len().to_string(),
            ],
        );
        self.announcer.announce(rendered);
    }

    /// The announced text for an item: the text-selector match inside the
    /// item, falling back to the item's whole text.
    fn subject_text<D: Dom>(&self, dom: &D, item: ElementId) -> String {
        if let Some(selector) = &self.options.announcement.text_selector
            && let Some(source) = dom.query_first(item, selector)
        {
            return dom.text(source);
        }
        dom.text(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::events::KeyboardModifiers;
    use crate::selector::Selector;

    fn press(key: Key) -> KeyPressEvent {
        KeyPressEvent::new(key, KeyboardModifiers::none())
    }

    fn fixture(texts: &[&str]) -> (MemoryDom, ReorderList, Vec<ElementId>) {
        let mut dom = MemoryDom::new();
        let container = dom.create_element("ul");
        dom.append_child(dom.root(), container);
        let items: Vec<_> = texts
            .iter()
            .map(|text| {
                let item = dom.create_element("li");
                dom.set_text(item, text);
                dom.append_child(container, item);
                item
            })
            .collect();
        let list = ReorderList::attach(&mut dom, container, ReorderOptions::default());
        (dom, list, items)
    }

    #[test]
    fn test_attach_decorates_handles() {
        let (dom, list, items) = fixture(&["A", "B"]);
        assert_eq!(list.handles(), items.as_slice());
        for &handle in &items {
            assert_eq!(dom.attribute(handle, attrs::TAB_INDEX).as_deref(), Some("0"));
            assert_eq!(dom.attribute(handle, attrs::ROLE).as_deref(), Some("button"));
            assert_eq!(
                dom.attribute(handle, attrs::ARIA_GRABBED).as_deref(),
                Some("false")
            );
            assert_eq!(
                dom.attribute(handle, attrs::ARIA_DROPEFFECT).as_deref(),
                Some("move")
            );
        }
    }

    #[test]
    fn test_activation_keys_toggle_grab() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);

        let mut enter = press(Key::Enter);
        list.handle_key_press(&mut dom, items[0], &mut enter);
        assert!(enter.base.is_accepted());
        assert!(list.is_grabbed(items[0]));
        assert_eq!(
            dom.attribute(items[0], attrs::ARIA_GRABBED).as_deref(),
            Some("true")
        );

        let mut space = press(Key::Space);
        list.handle_key_press(&mut dom, items[0], &mut space);
        assert!(space.base.is_accepted());
        assert!(!list.is_grabbed(items[0]));
        assert_eq!(
            dom.attribute(items[0], attrs::ARIA_GRABBED).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_at_most_one_handle_grabbed() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);

        list.activate(&mut dom, items[0]);
        list.activate(&mut dom, items[1]);

        assert!(!list.is_grabbed(items[0]));
        assert!(list.is_grabbed(items[1]));
        assert_eq!(list.grabbed_handle(), Some(items[1]));
        assert_eq!(
            dom.attribute(items[0], attrs::ARIA_GRABBED).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_regrab_emits_grab_announcement_only() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);

        list.activate(&mut dom, items[0]);
        list.process_pending(&mut dom);
        list.activate(&mut dom, items[1]);
        list.process_pending(&mut dom);

        // The forced release of A runs cleanup only; B's grab is spoken.
        assert_eq!(dom.text(list.live_region()), "B grabbed.");
    }

    #[test]
    fn test_release_signal_not_fired_on_forced_cleanup() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);
        let released = Arc::new(Mutex::new(Vec::new()));
        let released_clone = released.clone();
        list.item_released.connect(move |row| {
            released_clone.lock().push(*row);
        });

        list.activate(&mut dom, items[0]);
        list.activate(&mut dom, items[1]); // forces A released, no signal
        list.activate(&mut dom, items[1]); // explicit release

        assert_eq!(*released.lock(), vec![1]);
    }

    #[test]
    fn test_directional_keys_ignored_when_not_grabbed() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);

        let mut down = press(Key::ArrowDown);
        list.handle_key_press(&mut dom, items[0], &mut down);

        // Default behavior preserved, order unchanged.
        assert!(!down.base.is_accepted());
        assert_eq!(list.items(), items.as_slice());
    }

    #[test]
    fn test_move_restores_focus_and_reindexes() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);

        list.activate(&mut dom, items[1]);
        let mut down = press(Key::ArrowDown);
        list.handle_key_press(&mut dom, items[1], &mut down);

        assert!(down.base.is_accepted());
        assert_eq!(list.items(), &[items[0], items[2], items[1]]);
        assert_eq!(dom.focused(), Some(items[1]));
        assert!(list.is_grabbed(items[1]));
    }

    #[test]
    fn test_boundary_moves_are_noops() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);

        list.activate(&mut dom, items[0]);
        list.move_toward(&mut dom, items[0], MoveDirection::TowardStart);
        assert_eq!(list.items(), items.as_slice());

        list.activate(&mut dom, items[0]); // release
        list.activate(&mut dom, items[2]);
        list.move_toward(&mut dom, items[2], MoveDirection::TowardEnd);
        assert_eq!(list.items(), items.as_slice());
    }

    #[test]
    fn test_move_preserves_count_and_relative_order() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C", "D"]);

        list.activate(&mut dom, items[2]);
        list.move_toward(&mut dom, items[2], MoveDirection::TowardStart);

        let now = list.items().to_vec();
        assert_eq!(now.len(), 4);
        assert_eq!(now, vec![items[0], items[2], items[1], items[3]]);
    }

    #[test]
    fn test_tab_auto_releases_without_accepting() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);

        list.activate(&mut dom, items[0]);
        let mut tab = press(Key::Tab);
        list.handle_key_press(&mut dom, items[0], &mut tab);

        assert!(!tab.base.is_accepted());
        assert!(!list.is_grabbed(items[0]));
    }

    #[test]
    fn test_tab_without_grab_does_nothing() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);

        let mut tab = press(Key::Tab);
        list.handle_key_press(&mut dom, items[0], &mut tab);
        assert!(!tab.base.is_accepted());
        assert_eq!(list.grabbed_handle(), None);
    }

    #[test]
    fn test_order_changed_carries_moved_item_and_sequence() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        list.order_changed.connect(move |(moved, all)| {
            seen_clone.lock().push((*moved, all.clone()));
        });

        list.activate(&mut dom, items[0]);
        list.move_toward(&mut dom, items[0], MoveDirection::TowardEnd);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, items[0]);
        assert_eq!(seen[0].1, vec![items[1], items[0], items[2]]);
    }

    #[test]
    fn test_pointer_and_keyboard_changes_look_identical() {
        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        list.order_changed.connect(move |(moved, all)| {
            seen_clone.lock().push((*moved, all.clone()));
        });

        // Keyboard move: A toward end.
        list.activate(&mut dom, items[0]);
        list.move_toward(&mut dom, items[0], MoveDirection::TowardEnd);
        // Pointer move: the external behavior moves A back, then reports.
        dom.insert_before(items[0], items[1]);
        list.complete_pointer_reorder(&mut dom, items[0]);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, seen[1].0);
        assert_eq!(seen[1].1, vec![items[0], items[1], items[2]]);
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let (mut dom, mut list, _) = fixture(&["A"]);
        let stranger = dom.create_element("li");

        list.activate(&mut dom, stranger);
        assert_eq!(list.grabbed_handle(), None);
        list.move_toward(&mut dom, stranger, MoveDirection::TowardEnd);
        assert_eq!(dom.focused(), None);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut dom = MemoryDom::new();
        let container = dom.create_element("ul");
        dom.append_child(dom.root(), container);
        let mut list = ReorderList::attach(&mut dom, container, ReorderOptions::default());

        let mut enter = press(Key::Enter);
        list.handle_key_press(&mut dom, container, &mut enter);
        assert_eq!(list.grabbed_handle(), None);
        assert_eq!(list.process_pending(&mut dom), 0);
    }

    #[test]
    fn test_text_selector_sources_announced_text() {
        let mut dom = MemoryDom::new();
        let container = dom.create_element("ul");
        dom.append_child(dom.root(), container);
        let item = dom.create_element("li");
        dom.set_text(item, "1. ");
        let label = dom.create_element("span");
        dom.add_class(label, "name");
        dom.set_text(label, "Write tests");
        dom.append_child(item, label);
        dom.append_child(container, item);

        let options = ReorderOptions::default().with_announcement(
            crate::options::AnnouncementOptions::default()
                .with_text_selector(Selector::class("name")),
        );
        let mut list = ReorderList::attach(&mut dom, container, options);

        list.activate(&mut dom, item);
        list.process_pending(&mut dom);
        assert_eq!(dom.text(list.live_region()), "Write tests grabbed.");
    }

    #[test]
    fn test_unmatched_text_selector_falls_back_to_item_text() {
        let mut dom = MemoryDom::new();
        let container = dom.create_element("ul");
        dom.append_child(dom.root(), container);
        let item = dom.create_element("li");
        dom.set_text(item, "Fallback");
        dom.append_child(container, item);

        let options = ReorderOptions::default().with_announcement(
            crate::options::AnnouncementOptions::default()
                .with_text_selector(Selector::class("missing")),
        );
        let mut list = ReorderList::attach(&mut dom, container, options);

        list.activate(&mut dom, item);
        list.process_pending(&mut dom);
        assert_eq!(dom.text(list.live_region()), "Fallback grabbed.");
    }

    #[test]
    fn test_silenced_template_announces_nothing() {
        let mut dom = MemoryDom::new();
        let container = dom.create_element("ul");
        dom.append_child(dom.root(), container);
        let item = dom.create_element("li");
        dom.set_text(item, "Quiet");
        dom.append_child(container, item);

        let options = ReorderOptions::default()
            .with_announcement(crate::options::AnnouncementOptions::silent());
        let mut list = ReorderList::attach(&mut dom, container, options);

        list.activate(&mut dom, item);
        assert_eq!(list.process_pending(&mut dom), 0);
        assert_eq!(dom.text(list.live_region()), "");
        // The grab itself still happened.
        assert!(list.is_grabbed(item));
    }

    #[test]
    fn test_detach_leaves_plain_list() {
        let (mut dom, mut list, items) = fixture(&["A", "B"]);
        list.activate(&mut dom, items[0]);
        let region = list.live_region();

        list.detach(&mut dom);
        assert!(!dom.contains(region));
        assert!(!dom.has_class(items[0], "drag-on"));
        assert_eq!(
            dom.attribute(items[0], attrs::ARIA_GRABBED).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_attach_sortable_queues_completions() {
        use crate::sortable::PointerSortable;

        let (mut dom, mut list, items) = fixture(&["A", "B", "C"]);
        let mut sortable = PointerSortable::new(list.container());
        list.attach_sortable(&mut sortable);

        sortable.press(&dom, items[0], (0.0, 0.0));
        sortable.update(&mut dom, (0.0, 50.0));
        sortable.release(&mut dom, 2);

        // The completion is queued until the processing point.
        assert_eq!(list.items(), items.as_slice());
        assert_eq!(list.process_pointer_reorders(&mut dom), 1);
        assert_eq!(list.items(), &[items[1], items[2], items[0]]);
    }
}
