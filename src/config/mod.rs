//! Application configuration.
//!
//! Configuration is read once at startup from an optional TOML file and
//! then adjusted by command-line flags.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, EditTrigger, StoresConfig, UiConfig};
