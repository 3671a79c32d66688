//! Error types for the order store.

use entity_store::StoreError;
use thiserror::Error;

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order is stored under this id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order with this id is already stored.
    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    /// The store replied with a result that does not belong to the request.
    #[error("Unexpected store response: {0}")]
    UnexpectedResponse(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::AlreadyExists(id) => OrderError::AlreadyExists(id),
            other => OrderError::StoreCommunicationError(other.to_string()),
        }
    }
}
