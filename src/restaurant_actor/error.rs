//! Error types for the Restaurant actor.

use crate::domain::DomainError;
use crate::framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The actor answered with a result that does not belong to the request.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}
