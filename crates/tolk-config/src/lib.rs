use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod error;
pub mod network;
pub mod translator;
pub mod ui;

pub use error::ConfigError;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by `TOLK_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            network: NetworkConfig::from_lookup(&lookup),
            translator: TranslatorConfig::from_lookup(&lookup),
            ui: UiConfig::from_lookup(&lookup),
        }
    }

    /// Load a JSON config file, missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.network.validate()?;

        if self.translator.max_chars == 0 {
            return Err(ConfigError::ZeroMaxChars);
        }

        Ok(())
    }
}
