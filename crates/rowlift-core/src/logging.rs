//! Logging facilities for Rowlift.
//!
//! Rowlift uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "rowlift_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rowlift_core::signal";
    /// Deferred task queue target.
    pub const SCHEDULER: &str = "rowlift_core::scheduler";
    /// Widget layer target.
    pub const LIST: &str = "rowlift::list";
    /// Live announcer target.
    pub const ANNOUNCER: &str = "rowlift::announcer";
    /// Pointer-drag bridge target.
    pub const SORTABLE: &str = "rowlift::sortable";
}
