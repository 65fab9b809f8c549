//! # Order Actor
//!
//! Hosts orders and drives their lifecycle. Depends on the user and restaurant actors
//! (`Context = (UserClient, RestaurantClient)`).
//!
//! Validation that needs other actors lives in the entity hooks; pricing a cart lives in
//! [`OrderClient::place_order`](crate::clients::OrderClient::place_order), which reads the dish
//! actor before anything is sent here.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{DishClient, OrderClient};
use crate::domain::Order;
use crate::framework::ResourceActor;

/// Creates a new Order actor and its client. The client prices carts through `dish_client`.
pub fn new(buffer_size: usize, dish_client: DishClient) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client, dish_client))
}
