//! Cross-cutting error types for Gemba.
//!
//! This module defines errors that can originate from the engine or any host
//! built on it. Host-specific errors (e.g., `StoreError`) are defined in their
//! respective crates and wrap `CoreError`.

use thiserror::Error;

/// Errors that can be raised by any Gemba crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that the lifecycle forbids.
    ///
    /// This is a caller contract violation (e.g., deciding on an action that
    /// was never executed), not a user-facing condition.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// User-supplied input violates a precondition.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Whether the error is recoverable by the actor correcting their input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
