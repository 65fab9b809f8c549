//! # Framework Errors
//!
//! Errors raised by the message plumbing itself, plus a carrier for the entity's own error.

use std::error::Error;

#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's typed error from an `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or the boxed error is of a
    /// different type.
    pub fn into_entity_error<E: Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
