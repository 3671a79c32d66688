use super::PaymentError;
use crate::model::Money;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

static NEXT_REFERENCE: AtomicU64 = AtomicU64::new(1);

/// Proof of a simulated charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub method: &'static str,
    pub amount: Money,
    pub reference: String,
}

impl PaymentReceipt {
    fn issue(method: &'static str, amount: Money) -> Self {
        let reference = format!("PAY-{:06}", NEXT_REFERENCE.fetch_add(1, Ordering::SeqCst));
        info!(method, %amount, %reference, "Payment processed");
        Self {
            method,
            amount,
            reference,
        }
    }
}

/// A way to pay for an order.
///
/// Implementations are substitutable: each accepts every positive amount it can cover
/// and rejects a zero amount with [`PaymentError::InvalidAmount`].
pub trait PaymentMethod: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError>;
}

fn require_positive(method: &'static str, amount: Money) -> Result<(), PaymentError> {
    if amount.is_zero() {
        warn!(method, "Payment rejected: zero amount");
        return Err(PaymentError::InvalidAmount(amount));
    }
    Ok(())
}

macro_rules! simple_method {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl PaymentMethod for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError> {
                require_positive($label, amount)?;
                Ok(PaymentReceipt::issue($label, amount))
            }
        }
    };
}

simple_method!(BankTransfer, "bank_transfer");
simple_method!(CryptoPayment, "crypto");
simple_method!(
    /// Nothing is charged up front; the receipt records what the driver collects.
    CashOnDelivery,
    "cash_on_delivery"
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    pub last_four: String,
}

impl CreditCard {
    pub fn new(last_four: impl Into<String>) -> Self {
        Self {
            last_four: last_four.into(),
        }
    }
}

impl PaymentMethod for CreditCard {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError> {
        require_positive(self.name(), amount)?;
        info!(last_four = %self.last_four, "Charging card");
        Ok(PaymentReceipt::issue(self.name(), amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPal {
    pub account: String,
}

impl PayPal {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}

impl PaymentMethod for PayPal {
    fn name(&self) -> &'static str {
        "paypal"
    }

    fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError> {
        require_positive(self.name(), amount)?;
        info!(account = %self.account, "Charging PayPal account");
        Ok(PaymentReceipt::issue(self.name(), amount))
    }
}

/// A prepaid balance. A successful payment is deducted from it.
#[derive(Debug)]
pub struct Wallet {
    balance: Mutex<Money>,
}

impl Wallet {
    pub fn new(balance: Money) -> Self {
        Self {
            balance: Mutex::new(balance),
        }
    }

    pub fn balance(&self) -> Money {
        *self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentMethod for Wallet {
    fn name(&self) -> &'static str {
        "wallet"
    }

    fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError> {
        require_positive(self.name(), amount)?;
        let mut balance = self.balance.lock().unwrap_or_else(PoisonError::into_inner);
        let available = *balance;
        if available < amount {
            warn!(needed = %amount, %available, "Payment rejected: insufficient funds");
            return Err(PaymentError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        *balance = balance.saturating_sub(amount);
        Ok(PaymentReceipt::issue(self.name(), amount))
    }
}

/// Pays through whichever method it was given.
#[derive(Debug)]
pub struct PaymentProcessor {
    method: Box<dyn PaymentMethod>,
}

impl PaymentProcessor {
    pub fn new(method: Box<dyn PaymentMethod>) -> Self {
        Self { method }
    }
}

impl PaymentMethod for PaymentProcessor {
    fn name(&self) -> &'static str {
        self.method.name()
    }

    fn pay(&self, amount: Money) -> Result<PaymentReceipt, PaymentError> {
        self.method.pay(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_method() -> Vec<Box<dyn PaymentMethod>> {
        vec![
            Box::new(CreditCard::new("4242")),
            Box::new(PayPal::new("john.doe@email.com")),
            Box::new(BankTransfer),
            Box::new(CryptoPayment),
            Box::new(CashOnDelivery),
            Box::new(Wallet::new(Money::from_cents(10_000))),
        ]
    }

    #[test]
    fn test_every_method_accepts_a_positive_amount() {
        for method in every_method() {
            let receipt = method.pay(Money::from_cents(3487)).unwrap();
            assert_eq!(receipt.method, method.name());
            assert_eq!(receipt.amount, Money::from_cents(3487));
            assert!(receipt.reference.starts_with("PAY-"));
        }
    }

    #[test]
    fn test_every_method_rejects_zero() {
        for method in every_method() {
            assert_eq!(
                method.pay(Money::zero()),
                Err(PaymentError::InvalidAmount(Money::zero())),
                "{} accepted a zero amount",
                method.name()
            );
        }
    }

    #[test]
    fn test_wallet_deducts_and_refuses_overdraft() {
        let wallet = Wallet::new(Money::from_cents(5000));
        wallet.pay(Money::from_cents(3487)).unwrap();
        assert_eq!(wallet.balance(), Money::from_cents(1513));

        assert_eq!(
            wallet.pay(Money::from_cents(3487)),
            Err(PaymentError::InsufficientFunds {
                needed: Money::from_cents(3487),
                available: Money::from_cents(1513),
            })
        );
        assert_eq!(wallet.balance(), Money::from_cents(1513));
    }

    #[test]
    fn test_processor_delegates() {
        let processor = PaymentProcessor::new(Box::new(PayPal::new("jane.smith@email.com")));
        assert_eq!(processor.name(), "paypal");
        assert_eq!(processor.pay(Money::from_cents(100)).unwrap().method, "paypal");
    }

    #[test]
    fn test_references_are_unique() {
        let first = BankTransfer.pay(Money::from_cents(100)).unwrap();
        let second = BankTransfer.pay(Money::from_cents(100)).unwrap();
        assert_ne!(first.reference, second.reference);
    }
}
