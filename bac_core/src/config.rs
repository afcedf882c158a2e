//! Configuration file support for the BAC estimator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bac/config.toml`. It only
//! supplies defaults for command-line input; the model constants are fixed.

use crate::person::Sex;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Body measurements used when the command line omits them
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_height_cm")]
    pub height_cm: f64,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_sex")]
    pub sex: Sex,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            height_cm: default_height_cm(),
            weight_kg: default_weight_kg(),
            sex: default_sex(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Print JSON reports instead of the text summary
    #[serde(default)]
    pub json: bool,
}

fn default_height_cm() -> f64 {
    175.0
}

fn default_weight_kg() -> f64 {
    75.0
}

fn default_sex() -> Sex {
    Sex::Other
}

impl Config {
    /// Load configuration from the standard config path
    ///
    /// If no config location can be determined, defaults are used.
    pub fn load() -> Result<Self> {
        let config_path = match Self::default_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("{}; using default config", e);
                None
            }
        };
        Self::load_or_default(config_path.as_deref())
    }

    /// Load configuration from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            Some(path) => {
                tracing::info!("No config file found at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("neither a config dir nor HOME is available".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("bac").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        let profile = &self.profile;
        if !(profile.height_cm > 0.0) || !(profile.weight_kg > 0.0) {
            return Err(Error::Config(format!(
                "profile height and weight must be positive (got {} cm, {} kg)",
                profile.height_cm, profile.weight_kg
            )));
        }
        Ok(())
    }
}
