//! # Delivery Actor
//!
//! Tracks the courier leg of an order. Depends on the order actor (`Context = OrderClient`):
//! assigning a courier dispatches the order and registering the delivery completes it.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::DeliveryCreate;
pub use error::*;

use crate::clients::DeliveryClient;
use crate::domain::Delivery;
use crate::framework::ResourceActor;

/// Creates a new Delivery actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Delivery>, DeliveryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DeliveryClient::new(generic_client))
}
