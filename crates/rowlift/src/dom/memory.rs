//! In-memory element tree.

use std::collections::HashMap;

use slotmap::SlotMap;

use super::{Dom, ElementId};

/// Stored state for a single element.
#[derive(Debug, Clone, Default)]
struct ElementData {
    tag: String,
    text: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// A slotmap-backed element tree implementing [`Dom`].
///
/// The tree starts with a single root element (tag `body`). All
/// operations on unknown IDs are silent no-ops, matching the lenient
/// contract of the [`Dom`] trait.
///
/// # Example
///
/// ```
/// use rowlift::dom::{Dom, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// let list = dom.create_element("ul");
/// dom.append_child(dom.root(), list);
///
/// let item = dom.create_element("li");
/// dom.set_text(item, "Apple");
/// dom.append_child(list, item);
///
/// assert_eq!(dom.text(list), "Apple");
/// ```
#[derive(Debug)]
pub struct MemoryDom {
    elements: SlotMap<ElementId, ElementData>,
    root: ElementId,
    focused: Option<ElementId>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Create a tree containing only the root element.
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(ElementData {
            tag: "body".to_string(),
            ..Default::default()
        });
        Self {
            elements,
            root,
            focused: None,
        }
    }

    /// Check whether an element is still part of the tree.
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(element)
    }

    /// Number of elements, including the root.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether only the root remains.
    pub fn is_empty(&self) -> bool {
        self.elements.len() == 1
    }

    /// Detach an element from its current parent, keeping it alive.
    fn detach(&mut self, element: ElementId) {
        let Some(parent) = self.elements.get(element).and_then(|e| e.parent) else {
            return;
        };
        if let Some(parent_data) = self.elements.get_mut(parent) {
            parent_data.children.retain(|&c| c != element);
        }
        if let Some(data) = self.elements.get_mut(element) {
            data.parent = None;
        }
    }

    /// Check whether `ancestor` contains `element` (or is it).
    fn is_in_subtree(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.elements.get(id).and_then(|e| e.parent);
        }
        false
    }

    fn collect_text(&self, element: ElementId, out: &mut String) {
        let Some(data) = self.elements.get(element) else {
            return;
        };
        out.push_str(&data.text);
        for &child in &data.children {
            self.collect_text(child, out);
        }
    }
}

impl Dom for MemoryDom {
    fn root(&self) -> ElementId {
        self.root
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.insert(ElementData {
            tag: tag.to_string(),
            ..Default::default()
        })
    }

    fn remove(&mut self, element: ElementId) {
        if element == self.root || !self.elements.contains_key(element) {
            return;
        }
        self.detach(element);
        // Drop the whole subtree.
        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            if let Some(data) = self.elements.remove(id) {
                stack.extend(data.children);
            }
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(element).and_then(|e| e.parent)
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.elements
            .get(element)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child
            || !self.elements.contains_key(parent)
            || !self.elements.contains_key(child)
            || self.is_in_subtree(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(parent_data) = self.elements.get_mut(parent) {
            parent_data.children.push(child);
        }
        if let Some(data) = self.elements.get_mut(child) {
            data.parent = Some(parent);
        }
    }

    fn insert_before(&mut self, element: ElementId, sibling: ElementId) {
        if element == sibling || !self.elements.contains_key(element) {
            return;
        }
        let Some(parent) = self.elements.get(sibling).and_then(|e| e.parent) else {
            return;
        };
        if self.is_in_subtree(element, parent) {
            return;
        }
        self.detach(element);
        let Some(parent_data) = self.elements.get_mut(parent) else {
            return;
        };
        let position = parent_data
            .children
            .iter()
            .position(|&c| c == sibling)
            .unwrap_or(parent_data.children.len());
        parent_data.children.insert(position, element);
        if let Some(data) = self.elements.get_mut(element) {
            data.parent = Some(parent);
        }
    }

    fn insert_after(&mut self, element: ElementId, sibling: ElementId) {
        if element == sibling || !self.elements.contains_key(element) {
            return;
        }
        let Some(parent) = self.elements.get(sibling).and_then(|e| e.parent) else {
            return;
        };
        if self.is_in_subtree(element, parent) {
            return;
        }
        self.detach(element);
        let Some(parent_data) = self.elements.get_mut(parent) else {
            return;
        };
        let position = parent_data
            .children
            .iter()
            .position(|&c| c == sibling)
            .map(|p| p + 1)
            .unwrap_or(parent_data.children.len());
        parent_data.children.insert(position, element);
        if let Some(data) = self.elements.get_mut(element) {
            data.parent = Some(parent);
        }
    }

    fn tag(&self, element: ElementId) -> Option<String> {
        self.elements.get(element).map(|e| e.tag.clone())
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(data) = self.elements.get_mut(element)
            && !data.classes.iter().any(|c| c == class)
        {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(data) = self.elements.get_mut(element) {
            data.classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(data) = self.elements.get_mut(element) {
            data.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, element: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(data) = self.elements.get_mut(element) {
            data.text = text.to_string();
        }
    }

    fn focus(&mut self, element: ElementId) {
        if self.elements.contains_key(element) {
            self.focused = Some(element);
        }
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}
