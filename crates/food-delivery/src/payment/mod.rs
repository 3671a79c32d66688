//! Simulated payment methods. No money moves; each method logs the charge and returns
//! a receipt.

mod error;
mod method;

pub use error::PaymentError;
pub use method::{
    BankTransfer, CashOnDelivery, CreditCard, CryptoPayment, PayPal, PaymentMethod, PaymentProcessor,
    PaymentReceipt, Wallet,
};
