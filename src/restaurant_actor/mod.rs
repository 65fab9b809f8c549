//! # Restaurant Actor
//!
//! Hosts restaurants with their weekly opening hours. No dependencies (`Context = ()`).
//! Dishes and orders reference restaurants through a
//! [`RestaurantClient`](crate::clients::RestaurantClient) in their context.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::domain::Restaurant;
use crate::framework::ResourceActor;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
