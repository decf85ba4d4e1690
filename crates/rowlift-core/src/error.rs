//! Error types for Rowlift.
//!
//! Interaction paths never fail: boundary moves, missing templates, and
//! empty item sets all degrade to silent no-ops. Errors exist only at the
//! configuration edge, where a malformed selector string is rejected
//! before it can reach the widget.

/// Result type alias for Rowlift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a reorderable list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Selector parsing error.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

impl Error {
    /// Create an invalid-selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
