//! Type-safe identifiers.
//!
//! Every resource is keyed by a `u32` surrogate allocated by its actor. Wrapping the number
//! per resource keeps a `DishId` from being passed where an `OrderId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

typed_id!(
    /// Identifier of a customer, courier or administrator.
    UserId,
    "user"
);
typed_id!(RestaurantId, "restaurant");
typed_id!(DishId, "dish");
typed_id!(OrderId, "order");
typed_id!(DeliveryId, "delivery");
