//! docchat configuration system.
//!
//! Provides TOML-based configuration with sensible defaults for every field,
//! so a partial (or absent) config file works out of the box, plus
//! environment-based credential resolution for the Gemini API key.

pub mod credential;
pub mod loader;
pub mod schema;

pub use credential::{resolve_api_key, API_KEY_VAR};
pub use loader::load_from_path;
pub use schema::DocChatConfig;

use docchat_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a commented
/// default file if none exists.
pub fn load_config() -> Result<DocChatConfig, ConfigError> {
    loader::load_default()
}
