//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic checks on top of serde's syntactic ones.
pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
    if config.listener.bind_address.is_empty() {
        return Err(ConfigError::Validation(
            "listener.bind_address must not be empty".to_string(),
        ));
    }
    if config.timeouts.request_secs == 0 {
        return Err(ConfigError::Validation(
            "timeouts.request_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
