//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every stored value must satisfy to be kept by
//! the generic [`StoreActor`](crate::StoreActor). Unlike a create-from-DTO design, the
//! store accepts and returns **whole values**: callers build the entity themselves and
//! hand it over with `save`, and get complete clones back from `get` and `list`.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_save`]
//! - [`StoreEntity::on_update`]
//! - [`StoreEntity::on_delete`]
//!
//! The defaults do nothing (`Ok(())`). Only [`StoreEntity::id`] and
//! [`StoreEntity::handle_action`] are required.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any value must implement to be managed by a `StoreActor`.
///
/// # Async & Context
/// Hooks are `async` so they may call other stores. The `Context` associated type is
/// injected into every hook when the actor starts (`actor.run(context)`), which lets
/// dependencies be wired after construction.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The key this value is stored under.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Enum of entity-specific operations executed inside the store (e.g. `AddItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies handed to every hook. Use `()` if none.
    type Context: Send + Sync;

    /// The error type produced by hooks and actions.
    ///
    /// One enum per entity rather than one per action: clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key of this value.
    fn id(&self) -> Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called before a new value is inserted. Returning an error rejects the save.
    async fn on_save(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on the incoming value before it replaces `previous`.
    async fn on_update(&mut self, _previous: &Self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the value is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle an entity-specific action against the stored value.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
