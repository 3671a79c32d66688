//! # Store Errors
//!
//! Errors raised by the store plumbing itself. Entity-specific failures travel inside
//! [`StoreError::EntityError`] so each domain keeps its own error enum.

/// Errors that can occur within the entity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
