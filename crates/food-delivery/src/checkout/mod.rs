//! Placing orders: validation rules and the checkout pipeline.

mod service;
mod validator;

pub use service::{CheckoutError, CheckoutReceipt, CheckoutService};
pub use validator::{OrderValidator, ValidationError};
