use super::{FoodItemId, Money};
use serde::{Deserialize, Serialize};

/// A purchasable dish or drink.
///
/// Food items are shared read-only between menus and order lines through `Arc`, so a
/// price never changes underneath an order that references it. The id is fixed at
/// construction:
///
/// ```compile_fail
/// use food_delivery::model::{FoodItem, Money};
/// let mut fries = FoodItem::new("f5", "French Fries", "", Money::from_cents(399));
/// fries.id = "f6".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    id: FoodItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl FoodItem {
    pub fn new(
        id: impl Into<FoodItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub fn id(&self) -> &FoodItemId {
        &self.id
    }

    /// Case-insensitive match against the name or the description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_readable_and_search_ignores_case() {
        let fries = FoodItem::new("f5", "French Fries", "Crispy salted fries", Money::from_cents(399));
        assert_eq!(fries.id(), "f5");
        assert!(fries.matches("SALTED"));
        assert!(!fries.matches("pizza"));
    }
}
