//! Element tree abstraction.
//!
//! The reorder engine never owns the list markup: it operates on a
//! mutable element tree held by the embedding application. This module
//! models that tree as the [`Dom`] trait, the seam every manager in this
//! crate is generic over. The engine queries the tree through scoped
//! selectors at explicit re-index points and never assumes a query result
//! stays fresh across a mutation.
//!
//! [`MemoryDom`](memory::MemoryDom) is the in-crate implementation,
//! suitable for tests and for embedders that keep their list model in
//! memory.

pub mod memory;

use slotmap::new_key_type;

use crate::selector::Selector;

pub use memory::MemoryDom;

new_key_type! {
    /// A unique identifier for an element in the tree.
    ///
    /// IDs are stable for the lifetime of the element and are never
    /// reused while the element exists.
    pub struct ElementId;
}

/// Attribute names used by the reorder engine.
pub mod attrs {
    /// Marks the grabbed state of a handle; always mirrors the internal
    /// flag.
    pub const ARIA_GRABBED: &str = "aria-grabbed";
    /// Advertises the move effect on drag handles.
    pub const ARIA_DROPEFFECT: &str = "aria-dropeffect";
    /// Live-region politeness level.
    pub const ARIA_LIVE: &str = "aria-live";
    /// Live-region relevance filter.
    pub const ARIA_RELEVANT: &str = "aria-relevant";
    /// Live-region atomic-read flag.
    pub const ARIA_ATOMIC: &str = "aria-atomic";
    /// Element role exposed to assistive technology.
    pub const ROLE: &str = "role";
    /// Keyboard focusability marker.
    pub const TAB_INDEX: &str = "tabindex";
}

/// Mutable element tree the reorder engine operates on.
///
/// Implementations supply the primitive accessors; selector queries are
/// derived from them. All mutating operations are lenient: an unknown or
/// removed element ID is a no-op, never a panic.
pub trait Dom {
    /// The root element everything else descends from.
    fn root(&self) -> ElementId;

    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Remove an element and its entire subtree.
    fn remove(&mut self, element: ElementId);

    /// The element's parent, if attached.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// The element's children, in document order.
    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Append `child` as the last child of `parent`, detaching it from
    /// any previous parent.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Reposition `element` immediately before `sibling`, as a single
    /// atomic move. No-op if `sibling` is detached or equals `element`.
    fn insert_before(&mut self, element: ElementId, sibling: ElementId);

    /// Reposition `element` immediately after `sibling`, as a single
    /// atomic move. No-op if `sibling` is detached or equals `element`.
    fn insert_after(&mut self, element: ElementId, sibling: ElementId);

    /// The element's tag name, if it exists.
    fn tag(&self, element: ElementId) -> Option<String>;

    /// Check whether the element carries a class.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Add a class to the element (no duplicates).
    fn add_class(&mut self, element: ElementId, class: &str);

    /// Remove a class from the element.
    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Read a string attribute.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Set a string attribute, replacing any previous value.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// The element's own text plus that of all descendants, in document
    /// order.
    fn text(&self, element: ElementId) -> String;

    /// Replace the element's own text.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Move keyboard focus to the element.
    fn focus(&mut self, element: ElementId);

    /// The currently focused element, if any.
    fn focused(&self) -> Option<ElementId>;

    /// Check whether `selector` matches `element`.
    fn matches(&self, element: ElementId, selector: &Selector) -> bool
    where
        Self: Sized,
    {
        selector.matches(self, element)
    }

    /// All descendants of `scope` matching `selector`, in document order.
    ///
    /// The scope element itself is never included.
    fn query(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId>
    where
        Self: Sized,
    {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(scope);
        stack.reverse();
        while let Some(element) = stack.pop() {
            if selector.matches(self, element) {
                found.push(element);
            }
            let mut children = self.children(element);
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// First descendant of `scope` matching `selector`, in document
    /// order.
    fn query_first(&self, scope: ElementId, selector: &Selector) -> Option<ElementId>
    where
        Self: Sized,
    {
        self.query(scope, selector).into_iter().next()
    }
}
