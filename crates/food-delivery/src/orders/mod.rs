//! # Order Store
//!
//! Keeps placed orders in a [`StoreActor`] and exposes them through [`OrderClient`].
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](entity_store::StoreEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for line and driver changes
//! - [`repository`] - the [`OrderRepository`] capability and [`InMemoryOrderRepository`]
//! - [`new()`] / [`with_orders()`] - factories that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use food_delivery::model::{Order, User};
//! use food_delivery::orders::{self, OrderRepository};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = orders::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let customer = Arc::new(User::new("c1", "John Doe", "john.doe@email.com", "+1234567890"));
//!     let id = client.save(Order::new("ord100", customer)).await?;
//!     assert!(client.find_by_id(&id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod client;
pub mod entity;
pub mod error;
pub mod repository;

pub use actions::*;
pub use client::OrderClient;
pub use error::*;
pub use repository::{InMemoryOrderRepository, OrderRepository};

use crate::model::Order;
use entity_store::StoreActor;

/// Creates an empty Order store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Order>, OrderClient) {
    let (actor, client) = StoreActor::new(buffer_size);
    (actor, OrderClient::new(client))
}

/// Creates an Order store preloaded with `orders`.
pub fn with_orders(
    buffer_size: usize,
    orders: impl IntoIterator<Item = Order>,
) -> (StoreActor<Order>, OrderClient) {
    let (actor, client) = StoreActor::with_entities(buffer_size, orders);
    (actor, OrderClient::new(client))
}
