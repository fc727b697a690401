//! Core domain types for the Widmark estimator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Sex categories and their distribution coefficients
//! - Drinks and volume units
//! - Subject parameters
//! - The derived estimation result

use crate::constants::{
    DISTRIBUTION_COEFFICIENT_FEMALE, DISTRIBUTION_COEFFICIENT_MALE, LEGAL_THRESHOLD_G_PER_L,
    ML_PER_US_FL_OZ,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Subject Types
// ============================================================================

/// Sex category used to pick the Widmark distribution coefficient
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Distribution coefficient table, indexed by `Sex::table_index`
const DISTRIBUTION_COEFFICIENTS: [(Sex, f64); 2] = [
    (Sex::Male, DISTRIBUTION_COEFFICIENT_MALE),
    (Sex::Female, DISTRIBUTION_COEFFICIENT_FEMALE),
];

impl Sex {
    /// All categories, in table order
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    fn table_index(self) -> usize {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }

    /// Widmark distribution coefficient r for this category
    pub fn distribution_coefficient(self) -> f64 {
        let (sex, r) = DISTRIBUTION_COEFFICIENTS[self.table_index()];
        debug_assert_eq!(sex, self);
        r
    }

    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(Error::Parse(format!(
                "unknown sex '{}', expected 'male' or 'female'",
                other
            ))),
        }
    }
}

/// Personal parameters for one estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubjectParams {
    pub sex: Sex,
    pub weight_kg: f64,
    pub elapsed_hours: f64,
}

impl SubjectParams {
    /// Build validated subject parameters
    ///
    /// Weight must be finite and positive. Elapsed time must be finite;
    /// negative values are accepted and treated as zero by the estimator.
    pub fn new(sex: Sex, weight_kg: f64, elapsed_hours: f64) -> Result<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidSubject(format!(
                "weight must be a positive number of kilograms, got {}",
                weight_kg
            )));
        }
        if !elapsed_hours.is_finite() {
            return Err(Error::InvalidSubject(format!(
                "elapsed hours must be finite, got {}",
                elapsed_hours
            )));
        }
        Ok(Self {
            sex,
            weight_kg,
            elapsed_hours,
        })
    }
}

// ============================================================================
// Drink Types
// ============================================================================

/// A single consumed drink
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Drink {
    pub id: Uuid,
    pub label: String,
    pub volume_ml: f64,
    /// Alcohol by volume, in percent (0-100)
    pub abv: f64,
}

impl Drink {
    /// Create a drink with a fresh id, validating volume and ABV
    pub fn new(label: impl Into<String>, volume_ml: f64, abv: f64) -> Result<Self> {
        validate_volume(volume_ml)?;
        validate_abv(abv)?;
        Ok(Self::unchecked(label, volume_ml, abv))
    }

    /// Create a drink with a fresh id without range checks
    pub fn unchecked(label: impl Into<String>, volume_ml: f64, abv: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            volume_ml,
            abv,
        }
    }
}

/// Partial edit of a drink's fields; `None` leaves a field unchanged
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrinkUpdate {
    pub label: Option<String>,
    pub volume_ml: Option<f64>,
    pub abv: Option<f64>,
}

pub(crate) fn validate_volume(volume_ml: f64) -> Result<()> {
    if !volume_ml.is_finite() || volume_ml <= 0.0 {
        return Err(Error::InvalidDrink(format!(
            "volume must be a positive number of milliliters, got {}",
            volume_ml
        )));
    }
    Ok(())
}

pub(crate) fn validate_abv(abv: f64) -> Result<()> {
    if !abv.is_finite() || !(0.0..=100.0).contains(&abv) {
        return Err(Error::InvalidDrink(format!(
            "ABV must be between 0 and 100 percent, got {}",
            abv
        )));
    }
    Ok(())
}

/// Unit a drink volume is entered in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Ml,
    Cl,
    L,
    /// US fluid ounce
    Oz,
}

impl VolumeUnit {
    /// Convert a volume in this unit to milliliters
    pub fn to_ml(self, value: f64) -> f64 {
        match self {
            VolumeUnit::Ml => value,
            VolumeUnit::Cl => value * 10.0,
            VolumeUnit::L => value * 1000.0,
            VolumeUnit::Oz => value * ML_PER_US_FL_OZ,
        }
    }

    /// Short unit suffix used in drink specs and output
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::Cl => "cl",
            VolumeUnit::L => "l",
            VolumeUnit::Oz => "oz",
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "ml" => Ok(VolumeUnit::Ml),
            "cl" => Ok(VolumeUnit::Cl),
            "l" => Ok(VolumeUnit::L),
            "oz" | "floz" | "fl oz" => Ok(VolumeUnit::Oz),
            other => Err(Error::Parse(format!("unknown volume unit '{}'", other))),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Output of one estimate. Recomputed on every input change.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EstimationResult {
    #[serde(rename = "gramsPureAlcohol")]
    pub grams_pure_alcohol: f64,
    #[serde(rename = "peakBAC")]
    pub peak_bac: f64,
    #[serde(rename = "currentBAC")]
    pub current_bac: f64,
    #[serde(rename = "hoursToLegalThreshold")]
    pub hours_to_legal_threshold: f64,
    #[serde(rename = "hoursToZero")]
    pub hours_to_zero: f64,
}

impl EstimationResult {
    /// Current BAC is strictly above the legal threshold
    pub fn is_over_legal_limit(&self) -> bool {
        self.current_bac > LEGAL_THRESHOLD_G_PER_L
    }

    /// No alcohol left in the blood
    pub fn is_sober(&self) -> bool {
        self.current_bac <= 0.0
    }
}
