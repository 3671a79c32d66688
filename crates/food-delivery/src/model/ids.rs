//! Typed identifiers.
//!
//! Every entity is keyed by a string id (`"f1"`, `"c1"`, `"ord1"`), wrapped in its own
//! newtype so a customer id cannot be passed where a food item id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a [`FoodItem`](crate::model::FoodItem).
    FoodItemId
);
string_id!(
    /// Identifier of a [`User`](crate::model::User), customer or driver.
    UserId
);
string_id!(
    /// Identifier of a [`Menu`](crate::model::Menu).
    MenuId
);
string_id!(
    /// Identifier of a [`Restaurant`](crate::model::Restaurant).
    RestaurantId
);
string_id!(
    /// Identifier of an [`Order`](crate::model::Order).
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_with_plain_strings() {
        let id = OrderId::from("ord1");
        assert_eq!(id, "ord1");
        assert_eq!(id.as_str(), "ord1");
        assert_eq!(id.to_string(), "ord1");
        assert_eq!(id, OrderId::new(String::from("ord1")));
    }

    #[test]
    fn test_ids_serialize_as_bare_strings() {
        let json = serde_json::to_string(&UserId::from("c1")).unwrap();
        assert_eq!(json, "\"c1\"");
    }
}
