use super::{Menu, RestaurantId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A restaurant and the menu it currently serves, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    pub name: String,
    menu: Option<Arc<Menu>>,
}

impl Restaurant {
    pub fn new(id: impl Into<RestaurantId>, name: impl Into<String>, menu: Option<Arc<Menu>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            menu,
        }
    }

    pub fn id(&self) -> &RestaurantId {
        &self.id
    }

    pub fn menu(&self) -> Option<&Arc<Menu>> {
        self.menu.as_ref()
    }

    /// Points the restaurant at a different menu. The old menu is untouched.
    pub fn update_menu(&mut self, menu: Arc<Menu>) {
        self.menu = Some(menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_menu_replaces_the_reference() {
        let lunch = Arc::new(Menu::new("m1", "Lunch", Vec::new()));
        let dinner = Arc::new(Menu::new("m2", "Dinner", Vec::new()));

        let mut restaurant = Restaurant::new("r1", "Corner Bistro", None);
        assert!(restaurant.menu().is_none());

        restaurant.update_menu(lunch.clone());
        restaurant.update_menu(dinner.clone());

        assert!(Arc::ptr_eq(restaurant.menu().unwrap(), &dinner));
        assert_eq!(lunch.name, "Lunch");
    }
}
