//! Generic actor framework for resource management.
//!
//! Building blocks for type-safe actor systems that manage resource entities with CRUD
//! operations and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities of one type
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`ActorClient`] - Shared `get`/`find`/`list`/`delete` for domain clients
//! - [`FrameworkError`] - Errors of the message plumbing
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
