//! # Entity Store
//!
//! A small, type-safe, in-memory resource store built on the actor model with Tokio.
//! Each store is a [`StoreActor`] task that exclusively owns a keyed collection of whole
//! values; callers talk to it through a cloneable [`StoreClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`StoreEntity`]) – the stored value, its key and its custom actions
//! 2. **Runtime** ([`StoreActor`]) – sequential request processing, no locks
//! 3. **Interface** ([`StoreClient`], [`EntityClient`]) – typed async calls
//!
//! ## Operations
//!
//! Every store offers the same repository capability: `save`, `get`, `list`, `update`,
//! `delete`, plus `perform_action` for entity-specific mutations that must go through the
//! entity's own methods. Values go in and come out whole; a client never reaches into a
//! stored value's internals.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests to one store are processed **one at a time**, so concurrent callers are
//!   serialized by the channel, not by a mutex
//! - Dropping every client ends the task
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a real [`StoreClient`] from scripted expectations, for
//! testing code around a client without running a store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
