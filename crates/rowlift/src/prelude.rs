//! Prelude module for Rowlift.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use rowlift::prelude::*;
//!
//! let mut dom = MemoryDom::new();
//! let container = dom.create_element("ul");
//! dom.append_child(dom.root(), container);
//! let _list = ReorderList::attach(&mut dom, container, ReorderOptions::default());
//! ```

pub use crate::dom::{Dom, ElementId, MemoryDom};
pub use crate::events::{Key, KeyPressEvent, KeyboardModifiers};
pub use crate::options::{AnnouncementOptions, ReorderOptions, SortableOptions};
pub use crate::selector::Selector;
pub use crate::sortable::{PointerSortable, Sortable};
pub use crate::{MoveDirection, ReorderList};

pub use rowlift_core::Signal;
