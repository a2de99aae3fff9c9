//! Domain-level errors

use thiserror::Error;

/// A caller input that was rejected before any network call
///
/// `field` names the offending input (`from`, `to.lat`, `mode`, ...) so callers
/// can point the user at the exact flag or form field to correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Name of the rejected field
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a "required" error for a field
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "required")
    }
}
