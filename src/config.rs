//! YAML configuration for the actor system.
//!
//! ```yaml
//! channel_buffer: 64
//! log_filter: "delivery_actors=debug"
//! ```
//!
//! Every key is optional.

use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel. Must be at least 1.
    pub channel_buffer: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = serde_yml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid(
                "channel_buffer must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}
