//! Writing configuration back to disk.

use anyhow::{Context, Result};
use std::path::Path;

/// Save the entire config to a TOML file, replacing any existing content
pub fn save_config(path: &Path, config: &super::Config) -> Result<()> {
    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, Config};

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("watchcover.toml");

        let mut config = Config::default();
        config.coverage.slack_secs = 3.0;
        config.completion.reward = 10;
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.coverage.slack_secs, 3.0);
        assert_eq!(loaded.coverage.speed_factor, 2.0);
        assert_eq!(loaded.completion.reward, 10);
    }
}
