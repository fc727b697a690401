//! Widmark BAC estimator.
//!
//! Five pure steps, composed in order by [`estimate`]:
//! 1. Grams of pure alcohol from the drink list
//! 2. Peak BAC via the Widmark formula
//! 3. Current BAC after linear elimination
//! 4. Hours until the legal threshold is reached
//! 5. Hours until BAC reaches zero
//!
//! Degenerate inputs (empty list, weight <= 0, negative elapsed time) are
//! normalized to zero rather than reported as errors.

use crate::constants::{
    ELIMINATION_RATE_PER_HOUR, ETHANOL_DENSITY_G_PER_ML, LEGAL_THRESHOLD_G_PER_L,
};
use crate::{Drink, EstimationResult, Sex, SubjectParams};

/// Total grams of pure alcohol across all drinks
///
/// Inputs are not sanitized: volumes are assumed >= 0 and ABV in [0, 100].
pub fn compute_pure_alcohol_grams(drinks: &[Drink]) -> f64 {
    drinks
        .iter()
        .map(|d| d.volume_ml * (d.abv / 100.0) * ETHANOL_DENSITY_G_PER_ML)
        .sum()
}

/// Peak BAC in g/L, or 0 when weight is not positive
pub fn compute_peak_bac(grams: f64, weight_kg: f64, sex: Sex) -> f64 {
    if weight_kg <= 0.0 {
        return 0.0;
    }
    grams / (weight_kg * sex.distribution_coefficient())
}

/// BAC after `elapsed_hours` of elimination, floored at 0
///
/// Negative elapsed time counts as zero.
pub fn compute_current_bac(peak_bac: f64, elapsed_hours: f64) -> f64 {
    let hours = elapsed_hours.max(0.0);
    // Exactly zero from peak/β onward, whatever the rounding of β * hours.
    if hours >= peak_bac / ELIMINATION_RATE_PER_HOUR {
        return 0.0;
    }
    (peak_bac - ELIMINATION_RATE_PER_HOUR * hours).max(0.0)
}

/// Hours until BAC drops to the legal threshold; 0 if already at or below it
pub fn compute_hours_to_legal_threshold(current_bac: f64) -> f64 {
    if current_bac <= LEGAL_THRESHOLD_G_PER_L {
        return 0.0;
    }
    (current_bac - LEGAL_THRESHOLD_G_PER_L) / ELIMINATION_RATE_PER_HOUR
}

/// Hours until BAC reaches zero
pub fn compute_hours_to_zero(current_bac: f64) -> f64 {
    current_bac / ELIMINATION_RATE_PER_HOUR
}

/// Run the full estimate for a drink list and subject
pub fn estimate(drinks: &[Drink], sex: Sex, weight_kg: f64, elapsed_hours: f64) -> EstimationResult {
    let grams_pure_alcohol = compute_pure_alcohol_grams(drinks);
    let peak_bac = compute_peak_bac(grams_pure_alcohol, weight_kg, sex);
    let current_bac = compute_current_bac(peak_bac, elapsed_hours);

    let result = EstimationResult {
        grams_pure_alcohol,
        peak_bac,
        current_bac,
        hours_to_legal_threshold: compute_hours_to_legal_threshold(current_bac),
        hours_to_zero: compute_hours_to_zero(current_bac),
    };

    tracing::trace!(drinks = drinks.len(), %sex, weight_kg, elapsed_hours, ?result, "estimated BAC");

    result
}

/// Same as [`estimate`], taking validated subject parameters
pub fn estimate_for(drinks: &[Drink], subject: &SubjectParams) -> EstimationResult {
    estimate(drinks, subject.sex, subject.weight_kg, subject.elapsed_hours)
}
