//! # Dish Actor
//!
//! Hosts menu entries. Depends on the restaurant actor (`Context = RestaurantClient`) to check
//! that a new dish belongs to an existing restaurant.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::DishClient;
use crate::domain::Dish;
use crate::framework::ResourceActor;

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DishClient::new(generic_client))
}
