//! # Observability & Tracing
//!
//! Structured logging for stores and the services built on them.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup (with the preloaded size) and shutdown
//! - **Operations**: Save, Get, List, Update, Delete and Actions, tagged with
//!   `entity_type` and the entity id
//! - **Rejections**: duplicate saves, missing ids and failing hooks, at `warn`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact lifecycle logs
//! RUST_LOG=debug cargo run     # adds request payloads
//! RUST_LOG=entity_store=debug,food_delivery=info cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo checkout of `ord100` looks like:
//!
//! ```text
//! INFO Store started entity_type="food_delivery::model::order::Order" size=8
//! INFO Saved entity_type="food_delivery::model::order::Order" id=ord100 size=9
//! INFO checkout:checkout: Charging card last_four=4242 order_id=ord100
//! INFO checkout:checkout: Payment processed method="credit_card" amount=$37.03 reference=PAY-000001 order_id=ord100
//! INFO checkout:checkout: Order placed total=$37.03 payment=PAY-000001 order_id=ord100
//! INFO checkout:checkout: Email sent channel=email recipient="john.doe@email.com" subject="Order ord100 Confirmed!" order_id=ord100
//! ```
//!
//! `Sending request` lines from the order client are emitted at `debug`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, using `default_filter` when `RUST_LOG` is unset.
///
/// Does nothing if a subscriber is already installed, so tests may call it freely.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the store instead
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("debug");
        init_tracing("not a valid filter ===");
        ::tracing::info!("still logging");
    }
}
