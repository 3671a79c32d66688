//! # Catalog
//!
//! The read-only reference data of the application: food items, menus, restaurants,
//! customers, drivers and the seed order history.
//!
//! Catalog entities are created once and shared through `Arc`; nothing here mutates
//! after [`CatalogBuilder::build`]. Seed orders are the one derived collection: they
//! reference customers, food items and drivers by id and are resolved lazily on the
//! first order query.
//!
//! Every lookup returns `Option` (or an empty sequence). An unknown id is never an
//! error.

mod seed;

use crate::model::{FoodItem, Menu, Order, OrderItem, Restaurant, User};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// An order described by ids, resolved against the catalog when orders are first read.
#[derive(Debug, Clone)]
pub struct OrderSeed {
    id: String,
    customer_id: String,
    lines: Vec<(String, u32)>,
    driver_id: Option<String>,
}

impl OrderSeed {
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            lines: Vec::new(),
            driver_id: None,
        }
    }

    pub fn line(mut self, food_item_id: impl Into<String>, quantity: u32) -> Self {
        self.lines.push((food_item_id.into(), quantity));
        self
    }

    pub fn driver(mut self, driver_id: impl Into<String>) -> Self {
        self.driver_id = Some(driver_id.into());
        self
    }
}

pub struct Catalog {
    food_items: Vec<Arc<FoodItem>>,
    menus: Vec<Arc<Menu>>,
    restaurants: Vec<Restaurant>,
    customers: Vec<Arc<User>>,
    drivers: Vec<Arc<User>>,
    order_seeds: Vec<OrderSeed>,
    orders: OnceLock<Vec<Order>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn find_restaurant_by_id(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id() == id)
    }

    pub fn list_restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// The full catalog, in insertion order.
    pub fn list_food_items(&self) -> &[Arc<FoodItem>] {
        &self.food_items
    }

    pub fn find_food_item_by_id(&self, id: &str) -> Option<&Arc<FoodItem>> {
        self.food_items.iter().find(|item| item.id() == id)
    }

    /// Food items whose name or description contains `query`, ignoring case.
    ///
    /// A blank query matches everything.
    pub fn search_food_items(&self, query: &str) -> Vec<Arc<FoodItem>> {
        let query = query.trim();
        self.food_items
            .iter()
            .filter(|item| query.is_empty() || item.matches(query))
            .cloned()
            .collect()
    }

    pub fn find_menu_by_id(&self, id: &str) -> Option<&Arc<Menu>> {
        self.menus.iter().find(|menu| menu.id() == id)
    }

    pub fn find_customer_by_id(&self, id: &str) -> Option<&Arc<User>> {
        self.customers.iter().find(|user| user.id() == id)
    }

    pub fn list_customers(&self) -> &[Arc<User>] {
        &self.customers
    }

    pub fn find_driver_by_id(&self, id: &str) -> Option<&Arc<User>> {
        self.drivers.iter().find(|user| user.id() == id)
    }

    pub fn list_drivers(&self) -> &[Arc<User>] {
        &self.drivers
    }

    pub fn find_order_by_id(&self, id: &str) -> Option<&Order> {
        self.orders().iter().find(|order| order.id() == id)
    }

    /// Orders placed by `customer_id`, in seed order. Empty for an unknown customer.
    pub fn list_orders_by_customer(&self, customer_id: &str) -> Vec<&Order> {
        self.orders()
            .iter()
            .filter(|order| order.customer().id() == customer_id)
            .collect()
    }

    pub fn list_all_orders(&self) -> &[Order] {
        self.orders()
    }

    fn orders(&self) -> &[Order] {
        self.orders.get_or_init(|| {
            let orders: Vec<Order> = self
                .order_seeds
                .iter()
                .filter_map(|seed| self.resolve(seed))
                .collect();
            debug!(count = orders.len(), "Seed orders resolved");
            orders
        })
    }

    /// Builds an order from its seed. A seed with an unknown customer is dropped;
    /// unknown food items or drivers are left out of the order.
    fn resolve(&self, seed: &OrderSeed) -> Option<Order> {
        let Some(customer) = self.find_customer_by_id(&seed.customer_id) else {
            warn!(order_id = %seed.id, customer_id = %seed.customer_id, "Seed order skipped: unknown customer");
            return None;
        };

        let mut order = Order::new(seed.id.as_str(), customer.clone());
        for (food_item_id, quantity) in &seed.lines {
            match self.find_food_item_by_id(food_item_id) {
                Some(item) => order.add_item(OrderItem::new(item.clone(), *quantity)),
                None => warn!(order_id = %seed.id, %food_item_id, "Seed line skipped: unknown food item"),
            }
        }

        if let Some(driver_id) = &seed.driver_id {
            match self.find_driver_by_id(driver_id) {
                Some(driver) => order.assign_driver(driver.clone()),
                None => warn!(order_id = %seed.id, %driver_id, "Seed driver skipped: unknown driver"),
            }
        }

        Some(order)
    }
}

/// Assembles a [`Catalog`].
///
/// Menus and restaurants reference earlier entries by id, so add food items before the
/// menus that list them and menus before the restaurants that serve them.
#[derive(Default)]
pub struct CatalogBuilder {
    food_items: Vec<Arc<FoodItem>>,
    menus: Vec<Arc<Menu>>,
    restaurants: Vec<Restaurant>,
    customers: Vec<Arc<User>>,
    drivers: Vec<Arc<User>>,
    order_seeds: Vec<OrderSeed>,
}

impl CatalogBuilder {
    pub fn food_item(mut self, item: FoodItem) -> Self {
        self.food_items.push(Arc::new(item));
        self
    }

    /// Adds a menu listing the given food items. Unknown ids are skipped.
    pub fn menu(mut self, id: &str, name: &str, food_item_ids: &[&str]) -> Self {
        let items = food_item_ids
            .iter()
            .filter_map(|food_item_id| {
                let found = self.food_items.iter().find(|item| item.id() == *food_item_id);
                if found.is_none() {
                    warn!(menu_id = id, food_item_id, "Menu entry skipped: unknown food item");
                }
                found.cloned()
            })
            .collect();
        self.menus.push(Arc::new(Menu::new(id, name, items)));
        self
    }

    /// Adds a menu listing every food item added so far.
    pub fn full_menu(self, id: &str, name: &str) -> Self {
        let ids: Vec<String> = self.food_items.iter().map(|item| item.id().to_string()).collect();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.menu(id, name, &ids)
    }

    /// Adds a restaurant serving `menu_id`, or no menu if it is `None` or unknown.
    pub fn restaurant(mut self, id: &str, name: &str, menu_id: Option<&str>) -> Self {
        let menu = menu_id.and_then(|menu_id| {
            let found = self.menus.iter().find(|menu| menu.id() == menu_id).cloned();
            if found.is_none() {
                warn!(restaurant_id = id, menu_id, "Restaurant menu skipped: unknown menu");
            }
            found
        });
        self.restaurants.push(Restaurant::new(id, name, menu));
        self
    }

    pub fn customer(mut self, user: User) -> Self {
        self.customers.push(Arc::new(user));
        self
    }

    pub fn driver(mut self, user: User) -> Self {
        self.drivers.push(Arc::new(user));
        self
    }

    pub fn order(mut self, seed: OrderSeed) -> Self {
        self.order_seeds.push(seed);
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            food_items: self.food_items,
            menus: self.menus,
            restaurants: self.restaurants,
            customers: self.customers,
            drivers: self.drivers,
            order_seeds: self.order_seeds,
            orders: OnceLock::new(),
        }
    }
}
