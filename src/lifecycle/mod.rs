//! Runtime orchestration and lifecycle management.
//!
//! - [`DeliverySystem`] starts the five actors, wires their dependencies and shuts them down.
//! - [`setup_tracing`] installs the log subscriber.

pub mod delivery_system;
pub mod tracing;

pub use self::delivery_system::DeliverySystem;
pub use self::tracing::setup_tracing;
