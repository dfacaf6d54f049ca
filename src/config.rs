//! Server configuration file support.
//!
//! This module provides utilities for reading server configuration from
//! TOML configuration files, with environment variable overrides applied
//! on top.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Server configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "data/channel_metrics.csv".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_display = path.as_ref().display().to_string();

        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path_display.clone(),
            source: e,
        })?;

        let config: ServerConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_display,
            source: e,
        })?;

        Ok(config)
    }

    /// Load server configuration from the default location.
    ///
    /// Searches for `cca.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    ///
    /// A missing file falls back to the built-in defaults; a file that
    /// exists but fails to parse is an error.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![PathBuf::from("cca.toml"), PathBuf::from("config/cca.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides on top of the file settings.
    ///
    /// - `HOST` overrides `server.host`
    /// - `PORT` overrides `server.port` (ignored when unparseable)
    /// - `CCA_DATASET` overrides `dataset.path`
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(path) = env::var("CCA_DATASET") {
            self.dataset.path = path;
        }
        self
    }

    /// The `host:port` pair to bind the server to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
