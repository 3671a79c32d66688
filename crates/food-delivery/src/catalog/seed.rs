//! Demonstration data.

use super::{Catalog, OrderSeed};
use crate::model::{FoodItem, Money, User};

const FOOD_ITEMS: &[(&str, &str, &str, u64)] = &[
    ("f1", "Classic Burger", "Juicy beef patty with lettuce and tomato", 1099),
    ("f2", "Double Cheeseburger", "Two beef patties with double cheese", 1399),
    ("f3", "Bacon Burger", "Beef patty with crispy bacon and BBQ sauce", 1249),
    ("f4", "Veggie Burger", "Plant-based patty with avocado", 1199),
    ("f5", "French Fries", "Crispy salted fries", 399),
    ("f6", "Onion Rings", "Golden fried onion rings", 449),
    ("f7", "Mozzarella Sticks", "Breaded mozzarella with marinara", 599),
    ("f8", "Margherita Pizza", "Fresh mozzarella and basil", 1299),
    ("f9", "Pepperoni Pizza", "Classic pepperoni and cheese", 1499),
    ("f10", "BBQ Chicken Pizza", "Grilled chicken with BBQ sauce", 1599),
    ("f11", "Veggie Supreme Pizza", "Loaded with fresh vegetables", 1399),
    ("f12", "Caesar Salad", "Fresh romaine with caesar dressing", 899),
    ("f13", "Greek Salad", "Feta, olives, and fresh vegetables", 949),
    ("f14", "Cobb Salad", "Chicken, bacon, egg, and avocado", 1199),
    ("f15", "Coca Cola", "Classic soft drink", 249),
    ("f16", "Fresh Orange Juice", "Freshly squeezed orange juice", 399),
    ("f17", "Iced Coffee", "Cold brew coffee with ice", 449),
    ("f18", "Chocolate Cake", "Rich chocolate layer cake", 699),
    ("f19", "Ice Cream Sundae", "Vanilla ice cream with toppings", 549),
    ("f20", "Apple Pie", "Classic apple pie with cinnamon", 599),
];

const MENUS: &[(&str, &str, &[&str])] = &[
    ("m1", "Burger Joint Menu", &["f1", "f2", "f3", "f4", "f5", "f6", "f7"]),
    ("m2", "Pizza Palace Menu", &["f8", "f9", "f10", "f11"]),
    ("m3", "Healthy Hub Menu", &["f12", "f13", "f14"]),
];

const RESTAURANTS: &[(&str, &str, &str)] = &[
    ("r1", "Big Burger Joint", "m1"),
    ("r2", "Amazing Pizza Palace", "m2"),
    ("r3", "The Healthy Hub", "m3"),
    ("r4", "Food Paradise", "m4"),
];

const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("c1", "John Doe", "john.doe@email.com", "+1234567890"),
    ("c2", "Jane Smith", "jane.smith@email.com", "+1234567891"),
    ("c3", "Mike Johnson", "mike.j@email.com", "+1234567892"),
    ("c4", "Sarah Williams", "sarah.w@email.com", "+1234567893"),
    ("c5", "David Brown", "david.b@email.com", "+1234567894"),
];

const DRIVERS: &[(&str, &str, &str, &str)] = &[
    ("d1", "Alex Driver", "alex.driver@delivery.com", "+1987654321"),
    ("d2", "Maria Rodriguez", "maria.r@delivery.com", "+1987654322"),
    ("d3", "Tom Wilson", "tom.w@delivery.com", "+1987654323"),
];

type OrderRow = (&'static str, &'static str, &'static [(&'static str, u32)], Option<&'static str>);

const ORDERS: &[OrderRow] = &[
    ("ord1", "c1", &[("f1", 2), ("f5", 1), ("f15", 2)], Some("d1")),
    ("ord2", "c2", &[("f9", 1), ("f16", 2), ("f18", 1)], Some("d2")),
    ("ord3", "c3", &[("f12", 1), ("f14", 1), ("f16", 1)], Some("d3")),
    ("ord4", "c4", &[("f2", 3), ("f5", 3), ("f6", 2), ("f15", 3), ("f18", 2)], Some("d1")),
    ("ord5", "c5", &[("f9", 2), ("f10", 1), ("f11", 1), ("f15", 4)], Some("d2")),
    ("ord6", "c1", &[("f4", 1), ("f12", 1), ("f17", 1)], None),
    ("ord7", "c2", &[("f17", 2), ("f20", 1)], None),
    ("ord8", "c3", &[("f7", 1), ("f15", 1)], Some("d3")),
];

impl Catalog {
    /// The demonstration catalog: 20 food items, 4 menus, 4 restaurants, 5 customers,
    /// 3 drivers and 8 past orders.
    pub fn seed() -> Self {
        let mut builder = Catalog::builder();

        for &(id, name, description, cents) in FOOD_ITEMS {
            builder = builder.food_item(FoodItem::new(id, name, description, Money::from_cents(cents)));
        }
        for &(id, name, items) in MENUS {
            builder = builder.menu(id, name, items);
        }
        builder = builder.full_menu("m4", "Full Menu");

        for &(id, name, menu_id) in RESTAURANTS {
            builder = builder.restaurant(id, name, Some(menu_id));
        }
        for &(id, name, email, phone) in CUSTOMERS {
            builder = builder.customer(User::new(id, name, email, phone));
        }
        for &(id, name, email, phone) in DRIVERS {
            builder = builder.driver(User::new(id, name, email, phone));
        }

        for &(id, customer_id, lines, driver_id) in ORDERS {
            let mut seed = OrderSeed::new(id, customer_id);
            for &(food_item_id, quantity) in lines {
                seed = seed.line(food_item_id, quantity);
            }
            if let Some(driver_id) = driver_id {
                seed = seed.driver(driver_id);
            }
            builder = builder.order(seed);
        }

        builder.build()
    }
}
