//! Order pricing: interchangeable discount policies and the calculator that applies
//! tax and the delivery fee.

mod calculator;
mod discount;

pub use calculator::{PriceBreakdown, PriceCalculator};
pub use discount::{DiscountPolicy, FixedAmountDiscount, NoDiscount, PercentageDiscount};
