//! Core plumbing for Rowlift.
//!
//! This crate provides the foundational components of the Rowlift widget
//! layer:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Deferred Queue**: Single-shot tasks executed on the next
//!   cooperative tick
//! - **Errors**: Configuration-edge error types
//! - **Logging**: `tracing` targets for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use rowlift_core::Signal;
//!
//! // Create a signal that notifies when an order changes
//! let order_changed = Signal::<Vec<usize>>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = order_changed.connect(|order| {
//!     println!("New order: {:?}", order);
//! });
//!
//! // Emit the signal
//! order_changed.emit(vec![2, 0, 1]);
//!
//! // Disconnect when done
//! order_changed.disconnect(conn_id);
//! ```
//!
//! # Deferred Queue Example
//!
//! ```
//! use rowlift_core::DeferredQueue;
//!
//! let mut pending = DeferredQueue::new();
//! pending.schedule(String::from("Item 2 of 3"));
//!
//! // Later, at the event loop's processing point:
//! for text in pending.drain() {
//!     // apply the deferred update
//!     let _ = text;
//! }
//! ```

mod error;
pub mod logging;
mod scheduler;
pub mod signal;

pub use error::{Error, Result};
pub use scheduler::{DeferredQueue, DeferredTaskId};
pub use signal::{ConnectionId, Signal};
