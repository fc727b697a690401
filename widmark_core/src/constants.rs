//! Fixed physical and regulatory constants used by the estimator.

/// Density of ethanol in grams per milliliter
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

/// Elimination rate β in g/L per hour
pub const ELIMINATION_RATE_PER_HOUR: f64 = 0.15;

/// Legal driving threshold in g/L
pub const LEGAL_THRESHOLD_G_PER_L: f64 = 0.5;

/// Widmark distribution coefficient for males
pub const DISTRIBUTION_COEFFICIENT_MALE: f64 = 0.68;

/// Widmark distribution coefficient for females
pub const DISTRIBUTION_COEFFICIENT_FEMALE: f64 = 0.55;

/// Milliliters per US fluid ounce
pub const ML_PER_US_FL_OZ: f64 = 29.5735;
