//! # Delivery Actors
//!
//! Core of a food-delivery ordering backend built from resource-oriented actors on Tokio.
//! Customers order dishes from restaurants, couriers deliver them.
//!
//! ## Core Concepts
//!
//! Every resource (user, restaurant, dish, order, delivery) lives in its own
//! `ResourceActor<T: ActorEntity>`, a task that owns the entities of one type and processes
//! requests one at a time. No locks are needed around entity state; different actors run in
//! parallel.
//!
//! The business rules live in plain types in [`domain`]: [`Money`](domain::Money) with its
//! currency arithmetic, the [`Order`](domain::Order) state machine with its line items and
//! total, and the [`OpeningHours`](domain::OpeningHours) check. Actors only add identity,
//! storage and the checks that need another actor.
//!
//! ## Architecture Notes
//!
//! ### 1. Typed errors across actors
//! Each actor has its own error (`UserError`, `OrderError`, ...) wrapping a shared
//! [`DomainError`](domain::DomainError). An entity's error crosses the channel boxed and is
//! downcast back by the client, so callers match on `OrderError::Domain(DomainError::...)`.
//!
//! ### 2. Context injection
//! Dependencies are handed to `run()`, not to the constructor. The order actor runs with
//! `(UserClient, RestaurantClient)`, the delivery actor with an `OrderClient`.
//!
//! ### 3. Failed requests change nothing
//! Updates and actions run on a copy of the entity that replaces the stored one only on
//! success, and an id is consumed only by a successful create.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`domain`]: value objects, entities and their rules.
//! - [`framework`]: the generic actor, its client, and the [`mock`](framework::mock) test kit.
//! - [`user_actor`], [`restaurant_actor`], [`dish_actor`], [`order_actor`], [`delivery_actor`]:
//!   `ActorEntity` implementations with their actions and errors.
//! - [`clients`]: domain clients; cart pricing and cross-entity queries live here.
//! - [`lifecycle`]: [`DeliverySystem`](lifecycle::DeliverySystem) wires and stops the actors.
//! - [`config`]: YAML settings.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod delivery_actor;
pub mod dish_actor;
pub mod domain;
pub mod framework;
pub mod lifecycle;
pub mod order_actor;
pub mod restaurant_actor;
pub mod user_actor;
