#![forbid(unsafe_code)]

//! Blood alcohol concentration estimation with the Widmark formula.
//!
//! This crate provides:
//! - The estimator (pure functions, no I/O)
//! - Domain types (sex, drinks, subject parameters, results)
//! - A caller-owned drink list and a built-in preset catalog
//! - Output formatting, configuration and logging setup

pub mod constants;
pub mod types;
pub mod error;
pub mod estimator;
pub mod drinks;
pub mod presets;
pub mod format;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use estimator::{
    compute_current_bac, compute_hours_to_legal_threshold, compute_hours_to_zero,
    compute_peak_bac, compute_pure_alcohol_grams, estimate, estimate_for,
};
pub use drinks::{parse_drink_spec, DrinkList};
pub use presets::{find_preset, get_default_catalog, Preset, PresetCatalog};
pub use format::{fmt_decimal, fmt_hm, parse_hm, DecimalSeparator};
pub use config::Config;
