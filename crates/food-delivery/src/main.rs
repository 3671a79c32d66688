use entity_store::tracing::init_tracing;
use food_delivery::config::AppConfig;
use food_delivery::lifecycle::DeliverySystem;
use food_delivery::model::{Order, OrderItem};
use food_delivery::orders::OrderRepository;
use food_delivery::payment::CreditCard;
use food_delivery::pricing::PercentageDiscount;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(None)?;
    init_tracing(&config.logging.filter);

    info!("Starting food delivery demo");
    let system = DeliverySystem::start(&config);

    for restaurant in system.catalog.list_restaurants() {
        match restaurant.menu() {
            Some(menu) => info!(restaurant = %restaurant.name, menu = %menu.name, items = menu.len(), "Restaurant"),
            None => warn!(restaurant = %restaurant.name, "Restaurant has no menu"),
        }
    }

    let Some(customer) = system.catalog.find_customer_by_id("c1").cloned() else {
        error!("Demo customer c1 is missing from the catalog");
        return Err("demo customer missing".into());
    };

    let mut order = Order::new("ord100", customer);
    for (food_item_id, quantity) in [("f1", 2), ("f5", 1), ("f15", 2)] {
        if let Some(item) = system.catalog.find_food_item_by_id(food_item_id) {
            order.add_item(OrderItem::new(item.clone(), quantity));
        }
    }
    if let Some(driver) = system.catalog.find_driver_by_id("d1") {
        order.assign_driver(driver.clone());
    }
    info!(order_id = %order.id(), lines = order.items().len(), subtotal = %order.calculate_total(), "Order built");

    let span = tracing::info_span!("checkout");
    let result = system
        .checkout
        .checkout(order, &PercentageDiscount::new(10), &CreditCard::new("4242"))
        .instrument(span)
        .await;

    match &result {
        Ok(receipt) => info!(
            order_id = %receipt.order_id,
            subtotal = %receipt.pricing.subtotal,
            discount = %receipt.pricing.discount,
            tax = %receipt.pricing.tax,
            delivery = %receipt.pricing.delivery_fee,
            total = %receipt.pricing.total,
            payment = %receipt.payment.reference,
            "Checkout complete"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    let history = system.order_client.find_by_customer(&"c1".into()).await?;
    for order in &history {
        info!(order_id = %order.id(), total = %order.calculate_total(), "Order history");
    }

    if let Ok(receipt) = &result {
        let total = system.order_client.total(receipt.order_id.clone()).await?;
        info!(order_id = %receipt.order_id, %total, "Stored order total");
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
