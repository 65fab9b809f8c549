//! Error types for the Order actor.

use crate::dish_actor::DishError;
use crate::domain::DomainError;
use crate::framework::FrameworkError;
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A domain rule rejected the request (bad input, illegal transition, not the owner...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

// Errors from the actors an order depends on. A missing dependency becomes a domain
// `NotFound`; the order itself exists.

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => DomainError::NotFound(id).into(),
            UserError::Domain(d) => d.into(),
            UserError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<RestaurantError> for OrderError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(id) => DomainError::NotFound(id).into(),
            RestaurantError::Domain(d) => d.into(),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<DishError> for OrderError {
    fn from(e: DishError) -> Self {
        match e {
            DishError::NotFound(id) => DomainError::NotFound(id).into(),
            DishError::Domain(d) => d.into(),
            DishError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}
