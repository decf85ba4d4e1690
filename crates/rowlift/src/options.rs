//! Configuration for a reorderable list.
//!
//! Options are supplied once when the list is attached and are read-only
//! afterwards. Every field has a default recovered from common list
//! markup: items are `li` elements, the whole item is its own drag
//! handle, and the grabbed item is marked with the `drag-on` class.

use crate::selector::Selector;

/// Announcement template set.
///
/// Each template receives up to three positional arguments, in this exact
/// order: the subject's text, its position, and the total number of
/// items. Set a template to `None` (or an empty string) to silence that
/// announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementOptions {
    /// Selects a descendant of the item to source the announced text;
    /// absent (or unmatched) falls back to the item's whole text.
    pub text_selector: Option<Selector>,
    /// Spoken when a handle is grabbed. Arguments: text, 0-based index,
    /// total.
    pub grab: Option<String>,
    /// Spoken when a grabbed handle is released. Arguments: text, 0-based
    /// index, total.
    pub drop: Option<String>,
    /// Spoken after a successful move. Arguments: text, 1-based position,
    /// total.
    pub reorder: Option<String>,
}

impl Default for AnnouncementOptions {
    fn default() -> Self {
        Self {
            text_selector: None,
            grab: Some("%s grabbed.".to_string()),
            drop: Some("%s dropped.".to_string()),
            reorder: Some("The list has been reordered. %s is now item %s of %s".to_string()),
        }
    }
}

impl AnnouncementOptions {
    /// Template set with every announcement silenced.
    pub fn silent() -> Self {
        Self {
            text_selector: None,
            grab: None,
            drop: None,
            reorder: None,
        }
    }

    /// Set the text-source selector.
    pub fn with_text_selector(mut self, selector: Selector) -> Self {
        self.text_selector = Some(selector);
        self
    }

    /// Set the grab template.
    pub fn with_grab(mut self, template: impl Into<String>) -> Self {
        self.grab = Some(template.into());
        self
    }

    /// Set the drop template.
    pub fn with_drop(mut self, template: impl Into<String>) -> Self {
        self.drop = Some(template.into());
        self
    }

    /// Set the reorder template.
    pub fn with_reorder(mut self, template: impl Into<String>) -> Self {
        self.reorder = Some(template.into());
        self
    }
}

/// Pass-through configuration for the pointer-drag collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableOptions {
    /// Class marking the drop placeholder while a pointer drag is in
    /// flight.
    pub placeholder_class: String,
    /// Selects the draggable items.
    pub items: Selector,
    /// Elements matching this selector never start a pointer drag.
    pub cancel: Option<Selector>,
    /// Whether the placeholder is sized to the dragged item.
    pub force_placeholder_size: bool,
}

impl SortableOptions {
    /// The default synthesized when no pass-through options are
    /// configured: placeholder marker class, the list's item selector, no
    /// cancel selector, placeholder sized to the item.
    pub fn for_items(items: Selector) -> Self {
        Self {
            placeholder_class: "rowlift-placeholder".to_string(),
            items,
            cancel: None,
            force_placeholder_size: true,
        }
    }

    /// Set the placeholder class.
    pub fn with_placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    /// Set the cancel selector.
    pub fn with_cancel(mut self, selector: Selector) -> Self {
        self.cancel = Some(selector);
        self
    }
}

/// Configuration for a reorderable list, supplied once at attach time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderOptions {
    /// Selects the reorderable items, scoped within the container.
    pub item_selector: Selector,
    /// Selects the drag handle within each item; absent means the item is
    /// its own handle.
    pub drag_selector: Option<Selector>,
    /// Class toggled on the grabbed item.
    pub active_class: Option<String>,
    /// Class toggled on every item *except* the grabbed one, to visually
    /// de-emphasize the rest of the list.
    pub inactive_class: Option<String>,
    /// Announcement templates.
    pub announcement: AnnouncementOptions,
    /// Pass-through options for the pointer-drag collaborator; absent
    /// means a sensible default is synthesized.
    pub mouse_drag: Option<SortableOptions>,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            item_selector: Selector::type_selector("li"),
            drag_selector: None,
            active_class: Some("drag-on".to_string()),
            inactive_class: None,
            announcement: AnnouncementOptions::default(),
            mouse_drag: None,
        }
    }
}

impl ReorderOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item selector.
    pub fn with_item_selector(mut self, selector: Selector) -> Self {
        self.item_selector = selector;
        self
    }

    /// Set the drag handle selector.
    pub fn with_drag_selector(mut self, selector: Selector) -> Self {
        self.drag_selector = Some(selector);
        self
    }

    /// Set the active class.
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    /// Clear the active class.
    pub fn without_active_class(mut self) -> Self {
        self.active_class = None;
        self
    }

    /// Set the inactive class.
    pub fn with_inactive_class(mut self, class: impl Into<String>) -> Self {
        self.inactive_class = Some(class.into());
        self
    }

    /// Set the announcement templates.
    pub fn with_announcement(mut self, announcement: AnnouncementOptions) -> Self {
        self.announcement = announcement;
        self
    }

    /// Set the pointer-drag pass-through options.
    pub fn with_mouse_drag(mut self, options: SortableOptions) -> Self {
        self.mouse_drag = Some(options);
        self
    }

    /// Resolve the options forwarded to the pointer-drag collaborator:
    /// the configured pass-through, or the synthesized default.
    pub fn sortable_options(&self) -> SortableOptions {
        self.mouse_drag
            .clone()
            .unwrap_or_else(|| SortableOptions::for_items(self.item_selector.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_match_shipped_wording() {
        let announcement = AnnouncementOptions::default();
        assert_eq!(announcement.grab.as_deref(), Some("%s grabbed."));
        assert_eq!(announcement.drop.as_deref(), Some("%s dropped."));
        assert_eq!(
            announcement.reorder.as_deref(),
            Some("The list has been reordered. %s is now item %s of %s")
        );
        assert!(announcement.text_selector.is_none());
    }

    #[test]
    fn test_default_options() {
        let options = ReorderOptions::default();
        assert_eq!(options.item_selector, Selector::type_selector("li"));
        assert!(options.drag_selector.is_none());
        assert_eq!(options.active_class.as_deref(), Some("drag-on"));
        assert!(options.inactive_class.is_none());
        assert!(options.mouse_drag.is_none());
    }

    #[test]
    fn test_sortable_options_synthesized_from_item_selector() {
        let options = ReorderOptions::default();
        let sortable = options.sortable_options();
        assert_eq!(sortable.placeholder_class, "rowlift-placeholder");
        assert_eq!(sortable.items, options.item_selector);
        assert!(sortable.cancel.is_none());
        assert!(sortable.force_placeholder_size);
    }

    #[test]
    fn test_sortable_options_pass_through_wins() {
        let custom = SortableOptions::for_items(Selector::class("row"))
            .with_placeholder_class("ghost")
            .with_cancel(Selector::class("pinned"));
        let options = ReorderOptions::default().with_mouse_drag(custom.clone());
        assert_eq!(options.sortable_options(), custom);
    }
}
