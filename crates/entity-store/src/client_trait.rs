//! # EntityClient Trait
//!
//! Gives domain-specific client wrappers the standard read and delete operations on top
//! of their inner [`StoreClient`], with store errors mapped into the domain's error type.
use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for domain clients to inherit standard store operations.
///
/// # Example
///
/// ```rust
/// use entity_store::{EntityClient, StoreClient, StoreEntity, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Driver { id: u32 }
/// #[derive(Debug)] enum DriverAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DriverError(String);
///
/// impl From<String> for DriverError {
///     fn from(s: String) -> Self { DriverError(s) }
/// }
///
/// #[async_trait]
/// impl StoreEntity for Driver {
///     type Id = u32;
///     type Action = DriverAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = DriverError;
///
///     fn id(&self) -> u32 { self.id }
///     async fn handle_action(&mut self, _: DriverAction, _: &()) -> Result<(), DriverError> { Ok(()) }
/// }
///
/// struct DriverClient {
///     inner: StoreClient<Driver>,
/// }
///
/// #[async_trait]
/// impl EntityClient<Driver> for DriverClient {
///     type Error = DriverError;
///
///     fn inner(&self) -> &StoreClient<Driver> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         DriverError(e.to_string())
///     }
/// }
///
/// async fn usage(client: DriverClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic store client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a value by id. A missing id is `Ok(None)`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every value in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a value by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
