//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient), one per
//! resource. Cross-actor orchestration that does not belong to a single entity (pricing a cart,
//! the duplicate-email check) lives here.

pub mod delivery_client;
pub mod dish_client;
pub mod order_client;
pub mod restaurant_client;
pub mod user_client;

pub use delivery_client::*;
pub use dish_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use user_client::*;
