//! Error types for the Delivery actor.

use crate::domain::DomainError;
use crate::framework::FrameworkError;
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    #[error("Delivery not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DeliveryError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<DeliveryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => DeliveryError::NotFound(id),
            Err(other) => DeliveryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<OrderError> for DeliveryError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => DomainError::NotFound(id).into(),
            OrderError::Domain(d) => d.into(),
            OrderError::ActorCommunicationError(msg) => DeliveryError::ActorCommunicationError(msg),
        }
    }
}
