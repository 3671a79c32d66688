use crate::model::Money;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// Every method refuses to charge nothing.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Money),

    #[error("Insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: Money, available: Money },
}
