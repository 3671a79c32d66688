use super::UserId;
use serde::{Deserialize, Serialize};

/// A person in the system. Customers and drivers share this shape; the role comes
/// from where the catalog keeps them.
///
/// The id is fixed at construction:
///
/// ```compile_fail
/// let mut driver = food_delivery::model::User::new("d1", "Alex", "alex@delivery.com", "+1");
/// driver.id = "d2".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
}
