//! Discount policies.
//!
//! New kinds of discount are added by implementing [`DiscountPolicy`]; the
//! [`PriceCalculator`](super::PriceCalculator) takes any policy as `&dyn DiscountPolicy`.

use crate::model::Money;
use std::fmt::Debug;

pub trait DiscountPolicy: Send + Sync + Debug {
    /// The amount left to pay after the discount. Never more than `amount`.
    fn apply(&self, amount: Money) -> Money;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn apply(&self, amount: Money) -> Money {
        amount
    }
}

/// Takes `percent` off the amount, rounding the discount half up to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percent: u32,
}

impl PercentageDiscount {
    /// `percent` above 100 is treated as 100.
    pub fn new(percent: u32) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }
}

impl DiscountPolicy for PercentageDiscount {
    fn apply(&self, amount: Money) -> Money {
        amount.saturating_sub(amount.apply_rate(self.percent * 100))
    }
}

/// Takes a fixed amount off, never going below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAmountDiscount {
    pub amount: Money,
}

impl FixedAmountDiscount {
    pub fn new(amount: Money) -> Self {
        Self { amount }
    }
}

impl DiscountPolicy for FixedAmountDiscount {
    fn apply(&self, amount: Money) -> Money {
        amount.saturating_sub(self.amount)
    }
}
