//! Pure domain model: value objects, entities and their invariants.
//!
//! Nothing in here knows about actors or channels. [`Money`], [`Order`] and [`OpeningHours`]
//! hold the business rules; the remaining types are the records the actors manage.

pub mod address;
pub mod delivery;
pub mod dish;
pub mod error;
pub mod ids;
pub mod money;
pub mod opening_hours;
pub mod order;
pub mod restaurant;
pub mod user;

pub use address::*;
pub use delivery::*;
pub use dish::*;
pub use error::*;
pub use ids::*;
pub use money::*;
pub use opening_hours::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
