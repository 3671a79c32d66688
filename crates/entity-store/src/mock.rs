//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`StoreActor`](crate::StoreActor).
//! Use it to test logic *around* a client (repositories, services) deterministically.
//!
//! | Feature | MockStore | Real actor |
//! |---------|-----------|------------|
//! | **State** | None, scripted replies | Real collection |
//! | **Error injection** | `return_err(..)` | Needs a specific state |
//! | **Use case** | Client and service logic | The store itself, full system |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use entity_store::mock::MockStore;
//! use entity_store::{StoreEntity, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Menu { id: u32, name: String }
//! #[derive(Debug)] enum MenuAction {}
//! #[derive(Debug, thiserror::Error)] #[error("menu error")] struct MenuError;
//!
//! #[async_trait]
//! impl StoreEntity for Menu {
//!     type Id = u32; type Action = MenuAction; type ActionResult = ();
//!     type Context = (); type Error = MenuError;
//!     fn id(&self) -> u32 { self.id }
//!     async fn handle_action(&mut self, _: MenuAction, _: &()) -> Result<(), MenuError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockStore::<Menu>::new();
//!     mock.expect_get(1).return_ok(Some(Menu { id: 1, name: "Lunch".into() }));
//!     mock.expect_get(2).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().name, "Lunch");
//!     assert!(matches!(client.get(2).await, Err(StoreError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver; the
//! `expect_*` functions pop the next request and hand back its payload and responder so
//! a test can assert on exactly what was sent.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request of a given kind.
enum Expectation<T: StoreEntity> {
    Save(Result<T::Id, StoreError>),
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List(Result<Vec<T>, StoreError>),
    Update(Result<T, StoreError>),
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

struct MockState<T: StoreEntity> {
    expectations: VecDeque<Expectation<T>>,
    received: Vec<T>,
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: StoreEntity>(state: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match the next expectation (wrong kind or wrong id) gets no reply, so the caller
/// sees [`StoreError::ActorDropped`], and the mismatch is reported by [`MockStore::verify`].
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: Vec::new(),
            mismatches: Vec::new(),
        }));
        let responder_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = lock(&responder_state);
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (StoreRequest::Save { entity, respond_to }, Some(Expectation::Save(response))) => {
                        state.received.push(entity);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response }))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Update { entity, respond_to }, Some(Expectation::Update(response))) => {
                        state.received.push(entity);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response }))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let got = describe_request(&request);
                        let wanted = expectation
                            .as_ref()
                            .map(describe_expectation)
                            .unwrap_or_else(|| "nothing".to_string());
                        state
                            .mismatches
                            .push(format!("unexpected {got}, expected {wanted}"));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `save`.
    pub fn expect_save(&self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Save)
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list`.
    pub fn expect_list(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    /// Expects an `update`.
    pub fn expect_update(&self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    /// Expects a `delete` for `id`.
    pub fn expect_delete(&self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an action against `id`.
    pub fn expect_action(&self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Entities received by `save` and `update`, in arrival order.
    pub fn received(&self) -> Vec<T> {
        lock(&self.state).received.clone()
    }

    /// Panics if any expectation is left over or any request did not match.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock store mismatches: {}", state.mismatches.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Builder that completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    state: Shared<T>,
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.wrap)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn describe_request<T: StoreEntity>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::Save { entity, .. } => format!("save({})", entity.id()),
        StoreRequest::Get { id, .. } => format!("get({id})"),
        StoreRequest::List { .. } => "list".to_string(),
        StoreRequest::Update { entity, .. } => format!("update({})", entity.id()),
        StoreRequest::Delete { id, .. } => format!("delete({id})"),
        StoreRequest::Action { id, action, .. } => format!("action({id}, {action:?})"),
    }
}

fn describe_expectation<T: StoreEntity>(expectation: &Expectation<T>) -> String {
    match expectation {
        Expectation::Save(_) => "save".to_string(),
        Expectation::Get { id, .. } => format!("get({id})"),
        Expectation::List(_) => "list".to_string(),
        Expectation::Update(_) => "update".to_string(),
        Expectation::Delete { id, .. } => format!("delete({id})"),
        Expectation::Action { id, .. } => format!("action({id})"),
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pops requests with the `expect_*` helpers, asserts on
/// the payload, and answers through the returned responder.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Pops the next request if it is a `Save`.
pub async fn expect_save<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a `Get`.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is an `Update`.
pub async fn expect_update<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is an `Action`.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
