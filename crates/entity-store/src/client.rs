//! # Store Client
//!
//! The cloneable handle used to talk to a [`StoreActor`](crate::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `StoreActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared across
/// tasks. Every method sends one request and awaits the reply.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn save(&self, entity: T) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Save { entity, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, entity: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update { entity, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
