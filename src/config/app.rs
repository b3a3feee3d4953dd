// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_symmetric")]
    pub symmetric: Symmetric,
    #[serde(default = "default_key_sizes")]
    pub key_sizes: KeySizes,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Symmetric {
    pub default_mode: String,
    pub default_padding: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeySizes {
    #[serde(default = "default_dh_sizes")]
    pub dh: SizeRange,
    #[serde(default = "default_dsa_sizes")]
    pub dsa: SizeRange,
}

/// Inclusive range of prime sizes in bits
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SizeRange {
    pub min_bits: usize,
    pub max_bits: usize,
}

impl SizeRange {
    pub fn contains(&self, bits: usize) -> bool {
        (self.min_bits..=self.max_bits).contains(&bits)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symmetric: default_symmetric(),
            key_sizes: default_key_sizes(),
        }
    }
}

impl Default for Symmetric {
    fn default() -> Self {
        default_symmetric()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read and parse one config file
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// Global config, loaded once. Falls back to built-in defaults when the file
/// is missing or unusable.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            tracing::debug!(%config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        match load_from_path(&config_path) {
            Ok(conf) => conf,
            Err(error) => {
                tracing::warn!(%config_path, %error, "ignoring unusable config file");
                Config::default()
            }
        }
    })
}
