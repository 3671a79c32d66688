//! # Food Delivery
//!
//! The domain core of a food delivery application.
//!
//! - **[model]**: food items, users, menus, restaurants and the [`Order`](model::Order)
//!   aggregate with its lines
//! - **[catalog]**: the read-only reference data and its lookups
//! - **[orders]**: the order store and the [`OrderRepository`](orders::OrderRepository)
//!   capability
//! - **[pricing]**, **[payment]**, **[notification]**: the collaborators of a checkout
//! - **[checkout]**: validation and the checkout pipeline
//! - **[lifecycle]**: starting and stopping the whole system
//!
//! ## Testing
//!
//! See [`entity_store::mock`] for utilities to test order store clients without running
//! a store.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notification;
pub mod orders;
pub mod payment;
pub mod pricing;
