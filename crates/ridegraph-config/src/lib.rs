//! Configuration loading and validation for ridegraph

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, DataConfig, GraphConfig, LoggingConfig, OutputConfig, SlotConfig};
