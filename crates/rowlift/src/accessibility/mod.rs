//! AccessKit integration.
//!
//! This module mirrors a reorderable list into an [AccessKit](https://accesskit.dev/)
//! tree so platform assistive technology (UI Automation, NSAccessibility,
//! AT-SPI) sees the same structure a browser would expose: a list of list
//! items whose handles are focusable buttons, plus the container's live
//! region as a polite status node.
//!
//! The mirror is a snapshot: call [`build_tree_update`] after the list
//! has re-indexed (and after flushing announcements, if the live region
//! should be current) and hand the update to your platform adapter.

use accesskit::{Action, Live, Node, NodeId, Role, Tree, TreeUpdate};

use crate::dom::{Dom, ElementId};
use crate::list::ReorderList;

/// Convert an ElementId to an AccessKit NodeId.
///
/// Slotmap keys carry a stable index/version pair; its FFI encoding is a
/// unique u64 for the element's lifetime.
pub fn element_node_id(element: ElementId) -> NodeId {
    NodeId(slotmap::Key::data(&element).as_ffi())
}

/// Build a full accessibility snapshot of the list.
///
/// The returned update roots the tree at the element-tree root
/// (a generic container holding the list and its live region). Focus
/// points at the tree-focused handle when there is one, else at the root.
pub fn build_tree_update<D: Dom>(dom: &D, list: &ReorderList) -> TreeUpdate {
    let root_id = element_node_id(dom.root());
    let container_id = element_node_id(list.container());
    let region_id = element_node_id(list.live_region());

    let mut nodes = Vec::new();
    let total = list.items().len();
    let mut item_ids = Vec::with_capacity(total);

    for (position, (&item, &handle)) in
        list.items().iter().zip(list.handles().iter()).enumerate()
    {
        let item_id = element_node_id(item);
        item_ids.push(item_id);

        let mut item_node = Node::new(Role::ListItem);
        item_node.set_label(dom.text(item));
        item_node.set_position_in_set(position + 1);
        item_node.set_size_of_set(total);

        if handle == item {
            // The item is its own handle: expose the affordances directly.
            item_node.add_action(Action::Focus);
            item_node.add_action(Action::Click);
            item_node.set_selected(list.is_grabbed(handle));
        } else {
            let handle_id = element_node_id(handle);
            let mut handle_node = Node::new(Role::Button);
            handle_node.set_label(dom.text(handle));
            handle_node.add_action(Action::Focus);
            handle_node.add_action(Action::Click);
            handle_node.set_selected(list.is_grabbed(handle));
            nodes.push((handle_id, handle_node));
            item_node.set_children(vec![handle_id]);
        }

        nodes.push((item_id, item_node));
    }

    let mut container = Node::new(Role::List);
    container.set_children(item_ids);
    nodes.push((container_id, container));

    let mut region = Node::new(Role::Status);
    region.set_live(Live::Polite);
    let announcement = dom.text(list.live_region());
    if !announcement.is_empty() {
        region.set_label(announcement);
    }
    nodes.push((region_id, region));

    let mut root = Node::new(Role::GenericContainer);
    root.set_children(vec![container_id, region_id]);
    nodes.push((root_id, root));

    let focus = dom
        .focused()
        .filter(|focused| list.handles().contains(focused))
        .map(element_node_id)
        .unwrap_or(root_id);

    TreeUpdate {
        nodes,
        tree: Some(Tree::new(root_id)),
        focus,
    }
}
