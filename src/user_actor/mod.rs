//! # User Actor
//!
//! Hosts customers, couriers and administrators. Has no dependencies (`Context = ()`).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`]: activation and role-specific toggles
//! - [`error`] - [`UserError`]
//!
//! ## Usage
//!
//! ```rust
//! use delivery_actors::domain::{Role, UserCreate};
//! use delivery_actors::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .register(UserCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!             phone: None,
//!             role: Role::customer(),
//!             main_address: None,
//!         })
//!         .await?;
//!     assert_eq!(id.to_string(), "user_1");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::domain::User;
use crate::framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
