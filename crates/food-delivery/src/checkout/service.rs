//! # Checkout Service
//!
//! Turns a built [`Order`] into a placed one. Each step has its own collaborator,
//! injected at construction:
//!
//! 1. [`OrderValidator`] rejects orders that cannot be placed
//! 2. [`PriceCalculator`] applies the discount, tax and delivery fee
//! 3. the [`OrderRepository`] stores the order, claiming its id
//! 4. the caller's [`PaymentMethod`] charges the total
//! 5. the notification channels tell the customer, and the driver if one is assigned
//!
//! The first failing step ends the checkout. `save` rejects a taken id atomically, so of
//! two checkouts racing for the same id only one is ever charged. A failed payment
//! deletes the stored order again, so an order stays stored only once it has been paid
//! for.

use super::{OrderValidator, ValidationError};
use crate::config::CheckoutConfig;
use crate::model::{Order, OrderId};
use crate::notification::{
    self, CustomerNotifier, DriverNotifier, EmailService, Notification, PushService, SmsService,
};
use crate::orders::{OrderError, OrderRepository};
use crate::payment::{PaymentError, PaymentMethod, PaymentReceipt};
use crate::pricing::{DiscountPolicy, PriceBreakdown, PriceCalculator};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Store(#[from] OrderError),
}

/// Everything a successful checkout produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    pub pricing: PriceBreakdown,
    pub payment: PaymentReceipt,
    pub notifications: Vec<Notification>,
}

pub struct CheckoutService {
    repository: Arc<dyn OrderRepository>,
    validator: OrderValidator,
    calculator: PriceCalculator,
    email: Arc<dyn EmailService>,
    push: Arc<dyn PushService>,
    sms: Arc<dyn SmsService>,
}

impl CheckoutService {
    /// A service using `config` for pricing and validation, notifying through
    /// [`CustomerNotifier`] and [`DriverNotifier`].
    pub fn new(repository: Arc<dyn OrderRepository>, config: &CheckoutConfig) -> Self {
        Self {
            repository,
            validator: OrderValidator::new(config),
            calculator: PriceCalculator::new(config),
            email: Arc::new(CustomerNotifier),
            push: Arc::new(CustomerNotifier),
            sms: Arc::new(DriverNotifier),
        }
    }

    pub fn with_customer_channels(
        mut self,
        email: Arc<dyn EmailService>,
        push: Arc<dyn PushService>,
    ) -> Self {
        self.email = email;
        self.push = push;
        self
    }

    pub fn with_driver_channel(mut self, sms: Arc<dyn SmsService>) -> Self {
        self.sms = sms;
        self
    }

    pub fn repository(&self) -> &Arc<dyn OrderRepository> {
        &self.repository
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    /// Validates, prices, stores, charges and announces `order`.
    #[instrument(skip_all, fields(order_id = %order.id()))]
    pub async fn checkout(
        &self,
        order: Order,
        discount: &dyn DiscountPolicy,
        payment: &dyn PaymentMethod,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        self.validator.validate(&order)?;

        let pricing = self.calculator.breakdown(&order, discount);

        let order_id = self.repository.save(order.clone()).await.map_err(|e| {
            warn!(error = %e, "Checkout rejected: order not stored");
            e
        })?;

        let payment = match payment.pay(pricing.total) {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(error = %e, "Payment failed, releasing order id");
                if let Err(release) = self.repository.delete(&order_id).await {
                    error!(error = %release, "Failed to release order id");
                }
                return Err(e.into());
            }
        };
        info!(total = %pricing.total, payment = %payment.reference, "Order placed");

        let mut notifications = vec![
            notification::order_placed(self.email.as_ref(), &order, pricing.total),
            notification::order_placed_push(self.push.as_ref(), &order),
        ];
        if let Some(driver) = order.driver() {
            notifications.push(notification::driver_assigned(self.sms.as_ref(), driver, &order));
        }

        Ok(CheckoutReceipt {
            order_id,
            pricing,
            payment,
            notifications,
        })
    }
}
