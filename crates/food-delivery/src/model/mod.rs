//! Domain values: catalog entities, the relationships between them and the order
//! aggregate.

mod food_item;
mod ids;
mod menu;
mod money;
mod order;
mod restaurant;
mod user;

pub use food_item::FoodItem;
pub use ids::{FoodItemId, MenuId, OrderId, RestaurantId, UserId};
pub use menu::Menu;
pub use money::{Money, FULL_RATE_BPS};
pub use order::{Order, OrderItem};
pub use restaurant::Restaurant;
pub use user::User;
