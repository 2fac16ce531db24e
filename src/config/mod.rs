pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Locations searched, in order, when no config path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 4] = [
    "./watchcover.toml",
    "./config.toml",
    "~/.config/watchcover/config.toml",
    "/etc/watchcover/config.toml",
];

/// First existing file among the default locations
pub fn find_default_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(|path_str| PathBuf::from(shellexpand::tilde(path_str).as_ref()))
        .find(|path| path.exists())
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    if let Some(path) = find_default_config() {
        return load_config(&path);
    }

    tracing::debug!("No config file found; using defaults");
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    config.coverage.validate()?;

    let slack = config.completion.slack_secs;
    if !slack.is_finite() || slack < 0.0 {
        anyhow::bail!(
            "completion.slack_secs must be a non-negative number, got {}",
            slack
        );
    }

    if config.completion.reward == 0 {
        tracing::warn!("completion.reward is 0; completed views earn nothing");
    }

    Ok(())
}
