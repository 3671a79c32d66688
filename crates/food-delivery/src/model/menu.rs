use super::{FoodItem, FoodItemId, MenuId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named, ordered selection of food items.
///
/// Items are shared, not owned: the same `FoodItem` can appear on several menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    id: MenuId,
    pub name: String,
    pub items: Vec<Arc<FoodItem>>,
}

impl Menu {
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>, items: Vec<Arc<FoodItem>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }

    pub fn id(&self) -> &MenuId {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, food_item_id: &FoodItemId) -> bool {
        self.items.iter().any(|item| item.id() == food_item_id)
    }
}
