//! Built-in catalog of common drinks.
//!
//! Presets are the quick-add entries a front end offers next to manual
//! input. Custom presets from the config file are merged over these.

use crate::types::{validate_abv, validate_volume};
use crate::{Drink, Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named drink template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub volume_ml: f64,
    pub abv: f64,
}

impl Preset {
    fn new(id: &str, label: &str, volume_ml: f64, abv: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            volume_ml,
            abv,
        }
    }

    /// A new drink entry (fresh id) with this preset's values
    pub fn to_drink(&self) -> Drink {
        Drink::unchecked(self.label.clone(), self.volume_ml, self.abv)
    }
}

/// Ordered set of presets; order is listing order
#[derive(Clone, Debug, Default)]
pub struct PresetCatalog {
    pub presets: Vec<Preset>,
}

/// Cached default catalog - built once and reused
static DEFAULT_CATALOG: Lazy<PresetCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static PresetCatalog {
    &DEFAULT_CATALOG
}

/// Look up a built-in preset by id
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    get_default_catalog().get(id)
}

/// Builds the default catalog of built-in presets
pub fn build_default_catalog() -> PresetCatalog {
    PresetCatalog {
        presets: vec![
            Preset::new("beer", "Beer (500 ml)", 500.0, 5.0),
            Preset::new("small_beer", "Beer (330 ml)", 330.0, 5.0),
            Preset::new("wine", "Wine glass", 150.0, 12.0),
            Preset::new("sparkling", "Sparkling wine", 120.0, 11.0),
            Preset::new("shot", "Spirit shot", 40.0, 40.0),
            Preset::new("cocktail", "Cocktail", 200.0, 12.0),
        ],
    }
}

impl PresetCatalog {
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn find(&self, id: &str) -> Result<&Preset> {
        self.get(id)
            .ok_or_else(|| Error::UnknownPreset(id.to_string()))
    }

    /// A copy of this catalog with `custom` merged in
    ///
    /// A custom preset whose id matches a built-in replaces it in place;
    /// new ids are appended in the order given.
    pub fn with_custom(&self, custom: &[Preset]) -> PresetCatalog {
        let mut merged = self.clone();
        for preset in custom {
            match merged.presets.iter_mut().find(|p| p.id == preset.id) {
                Some(existing) => {
                    tracing::debug!("Custom preset '{}' overrides built-in", preset.id);
                    *existing = preset.clone();
                }
                None => merged.presets.push(preset.clone()),
            }
        }
        merged
    }

    /// Validate the catalog, returning a list of problems (empty if valid)
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for preset in &self.presets {
            if preset.id.trim().is_empty() {
                errors.push(format!("Preset '{}' has an empty id", preset.label));
            }
            if !seen.insert(preset.id.as_str()) {
                errors.push(format!("Duplicate preset id '{}'", preset.id));
            }
            if let Err(e) = validate_volume(preset.volume_ml) {
                errors.push(format!("Preset '{}': {}", preset.id, e));
            }
            if let Err(e) = validate_abv(preset.abv) {
                errors.push(format!("Preset '{}': {}", preset.id, e));
            }
        }

        errors
    }
}
