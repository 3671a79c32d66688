use food_delivery::catalog::Catalog;
use food_delivery::model::{Money, Order};
use std::sync::Arc;

#[test]
fn test_orders_by_customer_c1() {
    let catalog = Catalog::seed();

    let ids: Vec<&str> = catalog
        .list_orders_by_customer("c1")
        .iter()
        .map(|order| order.id().as_str())
        .collect();
    assert_eq!(ids, vec!["ord1", "ord6"]);
}

#[test]
fn test_orders_by_customer_is_a_filter_of_all_orders() {
    let catalog = Catalog::seed();

    for customer in catalog.list_customers() {
        let expected: Vec<&Order> = catalog
            .list_all_orders()
            .iter()
            .filter(|order| order.customer().id() == customer.id())
            .collect();
        assert_eq!(catalog.list_orders_by_customer(customer.id().as_str()), expected);
    }

    assert!(catalog.list_orders_by_customer("c99").is_empty());
}

#[test]
fn test_unknown_ids_are_absent() {
    let catalog = Catalog::seed();
    assert!(catalog.find_restaurant_by_id("r99").is_none());
    assert!(catalog.find_customer_by_id("c99").is_none());
    assert!(catalog.find_driver_by_id("d99").is_none());
    assert!(catalog.find_order_by_id("ord99").is_none());
    assert!(catalog.find_food_item_by_id("f99").is_none());
    assert!(catalog.find_menu_by_id("m99").is_none());

    // Roles are separate populations
    assert!(catalog.find_customer_by_id("d1").is_none());
    assert!(catalog.find_driver_by_id("c1").is_none());
}

#[test]
fn test_seed_order_contents() {
    let catalog = Catalog::seed();

    let ord1 = catalog.find_order_by_id("ord1").unwrap();
    assert_eq!(ord1.customer().name, "John Doe");
    assert_eq!(ord1.driver().map(|d| d.name.as_str()), Some("Alex Driver"));
    // 10.99 × 2 + 3.99 + 2.49 × 2
    assert_eq!(ord1.calculate_total(), Money::from_cents(3095));

    let ord6 = catalog.find_order_by_id("ord6").unwrap();
    assert!(ord6.driver().is_none());
    assert_eq!(ord6.items().len(), 3);
}

#[test]
fn test_menus_share_food_items() {
    let catalog = Catalog::seed();

    let burger_joint = catalog.find_restaurant_by_id("r1").unwrap().menu().unwrap();
    let paradise = catalog.find_restaurant_by_id("r4").unwrap().menu().unwrap();
    assert_eq!(burger_joint.name, "Burger Joint Menu");
    assert_eq!(burger_joint.len(), 7);
    assert_eq!(paradise.len(), catalog.list_food_items().len());

    assert!(Arc::ptr_eq(&burger_joint.items[0], &paradise.items[0]));
    assert!(Arc::ptr_eq(&paradise.items[0], &catalog.list_food_items()[0]));
}

#[test]
fn test_list_food_items_keeps_catalog_order() {
    let catalog = Catalog::seed();
    let items = catalog.list_food_items();
    assert_eq!(items.first().unwrap().name, "Classic Burger");
    assert_eq!(items.last().unwrap().name, "Apple Pie");
}

#[test]
fn test_search_food_items() {
    let catalog = Catalog::seed();

    let names: Vec<String> = catalog
        .search_food_items("pizza")
        .iter()
        .map(|item| item.name.clone())
        .collect();
    assert_eq!(
        names,
        vec!["Margherita Pizza", "Pepperoni Pizza", "BBQ Chicken Pizza", "Veggie Supreme Pizza"]
    );

    // Description matches count too
    let avocado: Vec<String> = catalog
        .search_food_items("Avocado")
        .iter()
        .map(|item| item.id().to_string())
        .collect();
    assert_eq!(avocado, vec!["f4", "f14"]);
}
