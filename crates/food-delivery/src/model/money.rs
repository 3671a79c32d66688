//! Currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::Add;

/// A non-negative currency amount, held as whole cents.
///
/// Integer cents keep totals exact: `$10.99 × 2 + $3.99` is `$25.97`, not
/// `25.970000000000002`. Arithmetic saturates at `u64::MAX` cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

/// One hundred percent, in basis points.
pub const FULL_RATE_BPS: u32 = 10_000;

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// This amount multiplied by a line quantity.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Subtraction that stops at zero.
    pub const fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `rate_bps` basis points of this amount, rounded half up to the cent.
    ///
    /// `Money::from_cents(2597).apply_rate(1500)` is 15% of $25.97, i.e. $3.90.
    pub const fn apply_rate(self, rate_bps: u32) -> Self {
        let scaled = self.0 as u128 * rate_bps as u128 + (FULL_RATE_BPS as u128 / 2);
        let cents = scaled / FULL_RATE_BPS as u128;
        if cents > u64::MAX as u128 {
            Self(u64::MAX)
        } else {
            Self(cents as u64)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_arithmetic_is_exact() {
        let total = Money::from_cents(1099).times(2) + Money::from_cents(399);
        assert_eq!(total, Money::from_cents(2597));
        assert_eq!(total.to_string(), "$25.97");
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
        assert_eq!(total.to_string(), "$0.00");
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        assert_eq!(Money::from_cents(2597).apply_rate(1500), Money::from_cents(390));
        assert_eq!(Money::from_cents(10).apply_rate(500), Money::from_cents(1)); // 0.5 cent
        assert_eq!(Money::from_cents(1234).apply_rate(FULL_RATE_BPS), Money::from_cents(1234));
        assert_eq!(Money::from_cents(1234).apply_rate(0), Money::zero());
    }

    #[test]
    fn test_arithmetic_saturates_at_max() {
        let half = Money::from_cents(u64::MAX / 2 + 1);
        assert_eq!(half.times(2), Money::from_cents(u64::MAX));
        assert_eq!(half + half, Money::from_cents(u64::MAX));
        assert_eq!(Money::from_cents(u64::MAX).apply_rate(20_000), Money::from_cents(u64::MAX));

        let total: Money = vec![half, half, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total, Money::from_cents(u64::MAX));
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let price = Money::from_cents(500);
        assert_eq!(price.saturating_sub(Money::from_cents(200)), Money::from_cents(300));
        assert_eq!(price.saturating_sub(Money::from_cents(900)), Money::zero());
    }
}
