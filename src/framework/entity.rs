//! # ActorEntity Trait
//!
//! The contract every resource (User, Restaurant, Dish, Order, Delivery) implements so that the
//! generic [`ResourceActor`](super::ResourceActor) can host it.
//!
//! Associated types tie each resource to its own payloads: a `Dish` actor only accepts a
//! `DishCreate`, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::conflicts_with`]
//!
//! The first two default to `Ok(())`. Override them to validate against other actors or to veto
//! a deletion. `conflicts_with` defaults to no conflict; override it for uniqueness rules within
//! one actor's store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` is handed to
/// `ResourceActor::run`, not to the constructor, which lets actors be created first and wired
/// together afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier allocated by the actor from a sequential `u32`.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// What an action returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` if there are none.
    type Context: Send + Sync;

    /// Error raised by hooks and actions. Travels back to the client boxed inside
    /// [`FrameworkError::EntityError`](super::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its allocated id and payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs after construction and before the entity is stored. An error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Uniqueness check against one stored entity, run by the actor before a create or an update
    /// is committed. The actor handles one request at a time, so the check and the write cannot
    /// interleave with another request.
    fn conflicts_with(&self, _existing: &Self) -> Option<Self::Error> {
        None
    }

    /// Runs before removal. An error keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
