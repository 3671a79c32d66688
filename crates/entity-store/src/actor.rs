//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of the store. It owns the
//! keyed collection and processes requests one at a time, so the collection needs no
//! lock: exclusive ownership inside the task is the synchronization.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that keeps a collection of whole entity values.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new(buffer_size)` returns the actor and a client.
/// 2. **Wire**: pass dependencies to `actor.run(context)`.
/// 3. **Run**: spawn the run loop on the Tokio runtime.
///
/// ```rust
/// use entity_store::{StoreActor, StoreEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] enum NoteAction { Append(String) }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Action = NoteAction;
///     type ActionResult = usize;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> u32 { self.id }
///
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<usize, NoteError> {
///         match action {
///             NoteAction::Append(more) => {
///                 self.text.push_str(&more);
///                 Ok(self.text.len())
///             }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.save(Note { id: 1, text: "a".into() }).await.unwrap();
///     let len = client.perform_action(1, NoteAction::Append("b".into())).await.unwrap();
///     assert_eq!(len, 2);
/// }
/// ```
///
/// # Operations
///
/// * **Save**: runs `on_save`, then inserts. An id already present is rejected with
///   [`StoreError::AlreadyExists`].
/// * **Get**: returns a clone, or `None`.
/// * **List**: returns clones of every value in insertion order.
/// * **Update**: runs `on_update` on the incoming value, then replaces the stored one.
///   Missing ids yield [`StoreError::NotFound`].
/// * **Delete**: runs `on_delete`, then removes.
/// * **Action**: runs `handle_action` against the stored value and returns its result.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Creates an actor pre-loaded with `initial` values, keeping their order.
    ///
    /// Later duplicates of an id are ignored.
    pub fn with_entities(
        buffer_size: usize,
        initial: impl IntoIterator<Item = T>,
    ) -> (Self, StoreClient<T>) {
        let (mut actor, client) = Self::new(buffer_size);
        for entity in initial {
            let id = entity.id();
            if actor.store.contains_key(&id) {
                continue;
            }
            actor.insertion_order.push(id.clone());
            actor.store.insert(id, entity);
        }
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// The `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "food_delivery::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save {
                    mut entity,
                    respond_to,
                } => {
                    let id = entity.id();
                    debug!(entity_type, %id, "Save");
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(id.to_string())));
                        continue;
                    }
                    if let Err(e) = entity.on_save(&context).await {
                        warn!(entity_type, %id, error = %e, "on_save failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.insertion_order.push(id.clone());
                    self.store.insert(id.clone(), entity);
                    info!(entity_type, %id, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    mut entity,
                    respond_to,
                } => {
                    let id = entity.id();
                    debug!(entity_type, %id, "Update");
                    let Some(previous) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = entity.on_update(previous, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), entity.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(entity));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    self.insertion_order.retain(|existing| existing != &id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
