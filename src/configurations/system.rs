//! This file defines the configurations that are set in the configurations file.
//! They are not mutable during the runtime and are loaded when the program starts.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,

    pub logging: LoggingConfig,

    pub artifacts: ArtifactsConfig,

    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Serialized KMeans model together with the verse corpus it was
    /// fitted on
    pub clustering_model_path: String,

    /// Serialized fitted vectorizer matching the clustering model
    pub vectorizer_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on the number of verses returned per query
    pub top_n: usize,
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content: String = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        log::info!("Configuration loaded from: {}", path);
        Ok(config)
    }

    /// Reserved for future uses
    #[allow(dead_code)]
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        log::info!("Configuration saved to: {}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if !["trace", "debug", "info", "warn", "error"].contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid logging level: {}",
                self.logging.level
            ));
        }

        if self.search.top_n == 0 {
            return Err(anyhow::anyhow!("search.top_n cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "plain".to_string(),
            },
            artifacts: ArtifactsConfig {
                clustering_model_path: "./data/kmeans_model.json".to_string(),
                vectorizer_path: "./data/vectorizer.json".to_string(),
            },
            search: SearchConfig { top_n: 3 },
        }
    }

    #[test]
    fn validates_a_well_formed_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn rejects_port_zero() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_logging_level() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_top_n() {
        let mut config = valid_config();
        config.search.top_n = 0;
        assert!(config.validate().is_err());
    }
}
