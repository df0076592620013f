//! Store error types for gemba-store.

use gemba_core::enums::EntityType;
use gemba_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Engine or lookup failure (validation, bad transition, missing entity).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid state encountered (e.g., an unreadable trail).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A lock was poisoned by a panicking writer.
    #[error("Lock poisoned: {0}")]
    Poisoned(&'static str),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: EntityType, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity.to_string(),
            id: id.to_string(),
        })
    }

    /// Whether the caller can recover by correcting their input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
