//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter without module targets.
//! The filter comes from `RUST_LOG` when set, otherwise from the configured default
//! (`log_filter` in the YAML config).
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run                            # payloads of every request
//! RUST_LOG=delivery_actors::framework=debug cargo run
//! ```
//!
//! With `info` a placed order reads roughly as:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order{customer_id=user_1 restaurant_id=restaurant_1}: Order placed id=order_1
//! INFO Action ok entity_type="Delivery" id=delivery_1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Panics if one is already installed.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
