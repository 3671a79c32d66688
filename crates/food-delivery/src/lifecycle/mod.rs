//! # System Lifecycle
//!
//! [`DeliverySystem`] is the conductor: it builds the catalog, starts the order store
//! preloaded with the catalog's order history, wires the checkout to the store and shuts
//! everything down again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop every client**, including the one held by the checkout service
//! 2. **The store detects closure** and leaves its event loop
//! 3. **Await the task** so no request is lost

mod delivery_system;

pub use delivery_system::*;
