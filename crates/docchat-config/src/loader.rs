//! TOML config loading: read from path or platform default.

use std::path::Path;

use docchat_common::ConfigError;
use tracing::{info, warn};

use crate::schema::DocChatConfig;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<DocChatConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: DocChatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validate(&config) {
        warn!(
            "config validation warning: {e} — using parsed config with potentially invalid values"
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/docchat/config.toml`
/// On Linux: `~/.config/docchat/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<DocChatConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(DocChatConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("docchat").join("config.toml"))
}

/// Check that config values are inside their documented ranges.
pub fn validate(config: &DocChatConfig) -> Result<(), ConfigError> {
    if config.api.model.trim().is_empty() {
        return Err(ConfigError::ValidationError("api.model is empty".into()));
    }
    if config.api.max_tokens == 0 || config.api.max_tokens > 8192 {
        return Err(ConfigError::ValidationError(format!(
            "api.max_tokens {} outside valid range 1-8192",
            config.api.max_tokens
        )));
    }
    if !(0.0..=2.0).contains(&config.api.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "api.temperature {} outside valid range 0.0-2.0",
            config.api.temperature
        )));
    }
    Ok(())
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Default config content with commented-out fields.
const DEFAULT_CONFIG_TOML: &str = r##"# docchat configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# model = "gemini-2.0-flash"
# max_tokens = 4096     # 1-8192
# temperature = 0.7     # 0.0-2.0

[logging]
# directive = "docchat=info"
"##;
