//! Rowlift - keyboard-accessible, screen-reader-announced list reordering.
//!
//! Rowlift layers a reorder state machine and an accessibility
//! announcement engine on top of a mouse-based sortable behavior supplied
//! by the host. It tracks which item is picked up, computes legal move
//! targets, performs the reorder, and emits correctly-worded,
//! correctly-timed live-region announcements that stay consistent across
//! keyboard- and pointer-driven changes.
//!
//! The list markup itself is external: Rowlift operates on any element
//! tree implementing the [`dom::Dom`] trait and ships
//! [`dom::MemoryDom`] as the in-memory implementation.
//!
//! # Example
//!
//! ```
//! use rowlift::dom::{Dom, MemoryDom};
//! use rowlift::events::{Key, KeyPressEvent, KeyboardModifiers};
//! use rowlift::{ReorderList, ReorderOptions};
//!
//! let mut dom = MemoryDom::new();
//! let tasks = dom.create_element("ul");
//! dom.append_child(dom.root(), tasks);
//! for text in ["Write tests", "Fix bug", "Ship it"] {
//!     let item = dom.create_element("li");
//!     dom.set_text(item, text);
//!     dom.append_child(tasks, item);
//! }
//!
//! let mut list = ReorderList::attach(&mut dom, tasks, ReorderOptions::default());
//! list.order_changed.connect(|(_moved, all)| {
//!     println!("list now has {} items", all.len());
//! });
//!
//! // Grab the first item and move it down.
//! let first = list.handles()[0];
//! let mut enter = KeyPressEvent::new(Key::Enter, KeyboardModifiers::none());
//! list.handle_key_press(&mut dom, first, &mut enter);
//! let mut down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::none());
//! list.handle_key_press(&mut dom, first, &mut down);
//!
//! // Announcements land on the next tick.
//! list.process_pending(&mut dom);
//! assert!(dom.text(list.live_region()).contains("item 2 of 3"));
//! ```

#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod announcer;
pub mod dom;
pub mod events;
pub mod grab;
pub mod index;
mod list;
pub mod options;
pub mod prelude;
pub mod selector;
pub mod sortable;
pub mod template;

pub use list::{MoveDirection, ReorderList};
pub use options::{AnnouncementOptions, ReorderOptions, SortableOptions};

// Re-export the core plumbing users interact with directly.
pub use rowlift_core::{ConnectionId, DeferredQueue, DeferredTaskId, Error, Result, Signal};
