//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/modelhier/modelhier.toml`
//! 3. Environment variables: `MODELHIER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// File extension of model files scanned during discovery
    pub model_extension: String,
    /// Module filter applied when the CLI does not pass one
    pub module: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_extension: "toml".to_string(),
            module: None,
        }
    }
}

impl Settings {
    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings with an explicit config file location.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("model_extension", Settings::default().model_extension)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("MODELHIER"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Path of the global config file, e.g.
    /// `~/.config/modelhier/modelhier.toml` on Linux.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "modelhier")
            .map(|dirs| dirs.config_dir().join("modelhier.toml"))
    }
}
