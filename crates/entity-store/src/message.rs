//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to a
//! [`StoreActor`](crate::StoreActor), each carrying a one-shot channel for the reply.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Message sent to the store actor.
///
/// The variants are the repository capability: `Save` (insert a new value), `Get`
/// (point lookup), `List` (all values in insertion order), `Update` (replace a whole
/// value), `Delete`, plus `Action` for entity-specific mutations that must go through the
/// entity's own methods.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Save {
        entity: T,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        entity: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
