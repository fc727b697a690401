//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/widmark/config.toml`.

use crate::{DecimalSeparator, Error, Preset, PresetCatalog, Result, Sex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub subject: SubjectConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub presets: PresetsConfig,
}

/// Defaults for values the user would otherwise pass every time
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SubjectConfig {
    #[serde(default)]
    pub sex: Option<Sex>,

    #[serde(default)]
    pub weight_kg: Option<f64>,
}

/// Number rendering
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub decimal_separator: DecimalSeparator,

    #[serde(default = "default_bac_places")]
    pub bac_places: usize,

    #[serde(default = "default_grams_places")]
    pub grams_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DecimalSeparator::default(),
            bac_places: default_bac_places(),
            grams_places: default_grams_places(),
        }
    }
}

/// User-defined presets, merged over the built-in catalog
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PresetsConfig {
    #[serde(default)]
    pub custom: Vec<Preset>,
}

fn default_bac_places() -> usize {
    2
}

fn default_grams_places() -> usize {
    1
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
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
    pub fn default_config_path() -> Option<PathBuf> {
        let base = dirs::config_dir().or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        })?;
        Some(base.join("widmark").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.subject.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::Config(format!(
                    "subject.weight_kg must be positive, got {}",
                    weight
                )));
            }
        }

        // Checked unmerged so repeated custom ids are reported.
        let custom = PresetCatalog {
            presets: self.presets.custom.clone(),
        };
        let errors = custom.validate();
        if !errors.is_empty() {
            return Err(Error::Config(format!(
                "invalid custom presets: {}",
                errors.join("; ")
            )));
        }

        Ok(())
    }

    /// Built-in presets with this config's custom presets merged in
    pub fn preset_catalog(&self) -> PresetCatalog {
        crate::presets::get_default_catalog().with_custom(&self.presets.custom)
    }
}
