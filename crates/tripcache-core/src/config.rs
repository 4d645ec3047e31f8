//! Configuration for where the planner's static datasets are hosted.
//!
//! Stored at `{config_dir}/tripcache/config.json`. The core only needs a
//! base URL; per-frontend settings live with the frontends.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "tripcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Host serving the `/data/*.json` reference files when none is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:4173";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// The dataset host to fetch from.
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_default_host() {
        let config = Config::default();
        assert_eq!(config.base_url_or_default(), DEFAULT_BASE_URL);
    }

    #[test]
    fn configured_host_wins() {
        let config = Config {
            base_url: Some("https://planner.example".to_string()),
        };
        assert_eq!(config.base_url_or_default(), "https://planner.example");
    }
}
