//! Error types for the Dish actor.

use crate::domain::DomainError;
use crate::framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    #[error("Dish not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<DishError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => DishError::NotFound(id),
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
