//! The caller-owned list of consumed drinks.
//!
//! Insertion order is display order only; the estimator just needs the
//! (volume, abv) pairs.

use crate::types::{validate_abv, validate_volume};
use crate::{Drink, DrinkUpdate, Error, Preset, Result, VolumeUnit};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered collection of drinks with a single owner
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DrinkList {
    drinks: Vec<Drink>,
}

impl DrinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drink, returning its id
    pub fn add(&mut self, drink: Drink) -> Uuid {
        let id = drink.id;
        tracing::debug!("Adding drink {} ({} ml @ {}%)", drink.label, drink.volume_ml, drink.abv);
        self.drinks.push(drink);
        id
    }

    /// Append a fresh drink built from a preset
    pub fn add_preset(&mut self, preset: &Preset) -> Uuid {
        self.add(preset.to_drink())
    }

    /// Apply a partial edit to the drink with `id`
    ///
    /// All new values are validated before anything is changed.
    pub fn update(&mut self, id: Uuid, update: DrinkUpdate) -> Result<()> {
        if let Some(volume_ml) = update.volume_ml {
            validate_volume(volume_ml)?;
        }
        if let Some(abv) = update.abv {
            validate_abv(abv)?;
        }

        let drink = self
            .drinks
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(Error::DrinkNotFound(id))?;

        if let Some(label) = update.label {
            drink.label = label;
        }
        if let Some(volume_ml) = update.volume_ml {
            drink.volume_ml = volume_ml;
        }
        if let Some(abv) = update.abv {
            drink.abv = abv;
        }

        tracing::debug!("Updated drink {}", id);
        Ok(())
    }

    /// Remove and return the drink with `id`
    pub fn remove(&mut self, id: Uuid) -> Result<Drink> {
        let index = self
            .drinks
            .iter()
            .position(|d| d.id == id)
            .ok_or(Error::DrinkNotFound(id))?;
        tracing::debug!("Removing drink {}", id);
        Ok(self.drinks.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Drink> {
        self.drinks.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Drink> {
        self.drinks.iter()
    }

    pub fn as_slice(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    pub fn clear(&mut self) {
        self.drinks.clear();
    }
}

impl<'a> IntoIterator for &'a DrinkList {
    type Item = &'a Drink;
    type IntoIter = std::slice::Iter<'a, Drink>;

    fn into_iter(self) -> Self::IntoIter {
        self.drinks.iter()
    }
}

/// Parse a drink from `[label=]<volume>[unit]@<abv>[%]`
///
/// Examples: `500@5`, `0.5l@5%`, `Wine=15cl@12.5`. Volume defaults to
/// milliliters; the label defaults to "Drink".
pub fn parse_drink_spec(spec: &str) -> Result<Drink> {
    let (label, rest) = match spec.split_once('=') {
        Some((label, rest)) if !label.trim().is_empty() => (label.trim(), rest),
        Some((_, rest)) => ("Drink", rest),
        None => ("Drink", spec),
    };

    let (volume_part, abv_part) = rest.split_once('@').ok_or_else(|| {
        Error::Parse(format!(
            "drink '{}' must look like <volume>[unit]@<abv>, e.g. 500ml@5",
            spec
        ))
    })?;

    let volume_part = volume_part.trim();
    let split_at = volume_part
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(volume_part.len());
    let (amount, unit) = volume_part.split_at(split_at);

    let amount: f64 = amount
        .parse()
        .map_err(|e| Error::Parse(format!("invalid volume in '{}': {}", spec, e)))?;
    let unit: VolumeUnit = unit.parse()?;

    let abv: f64 = abv_part
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid ABV in '{}': {}", spec, e)))?;

    Drink::new(label, unit.to_ml(amount), abv)
}
