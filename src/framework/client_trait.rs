//! # ActorClient Trait
//!
//! Shared read/delete operations for the resource-specific clients, built on the generic
//! [`ResourceClient`].

use super::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by every domain client (`UserClient`, `OrderClient`, ...).
///
/// An implementor supplies the inner client and two error conversions; `get`, `find`, `list`
/// and `delete` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The error returned by [`find`](Self::find) when nothing has the id.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity that must exist.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(item) => Ok(item),
            None => Err(Self::not_found(&id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
