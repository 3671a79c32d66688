use super::DiscountPolicy;
use crate::config::CheckoutConfig;
use crate::model::{Money, Order};
use serde::Serialize;
use tracing::debug;

/// What a customer pays for an order, line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    /// Amount taken off the subtotal.
    pub discount: Money,
    pub tax: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

/// Turns an order total into the amount charged: discount, then tax on the
/// discounted subtotal, then the delivery fee.
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    tax_rate_bps: u32,
    delivery_fee: Money,
}

impl PriceCalculator {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            tax_rate_bps: config.tax_rate_bps,
            delivery_fee: Money::from_cents(config.delivery_fee_cents),
        }
    }

    pub fn subtotal(&self, order: &Order) -> Money {
        order.calculate_total()
    }

    pub fn tax(&self, amount: Money) -> Money {
        amount.apply_rate(self.tax_rate_bps)
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn breakdown(&self, order: &Order, discount: &dyn DiscountPolicy) -> PriceBreakdown {
        let subtotal = self.subtotal(order);
        let discounted = discount.apply(subtotal).min(subtotal);
        let tax = self.tax(discounted);
        let breakdown = PriceBreakdown {
            subtotal,
            discount: subtotal.saturating_sub(discounted),
            tax,
            delivery_fee: self.delivery_fee,
            total: discounted + tax + self.delivery_fee,
        };
        debug!(order_id = %order.id(), ?discount, total = %breakdown.total, "Priced order");
        breakdown
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(&CheckoutConfig::default())
    }
}
