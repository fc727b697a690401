//! Display formatting for estimation output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest number of decimal places `fmt_decimal` will render
pub const MAX_DECIMAL_PLACES: usize = 6;

/// Decimal separator used when rendering numbers
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

/// Render an hour count as `"Hh MMm"`
///
/// Rounds to the nearest whole minute first. Negative or non-finite
/// values render as `"0h 00m"`.
pub fn fmt_hm(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0h 00m".to_string();
    }
    let minutes = (hours * 60.0).round() as i64;
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Parse a `"Hh MMm"` string back to a total number of minutes
pub fn parse_hm(s: &str) -> Result<i64> {
    let trimmed = s.trim();
    let (hours_part, rest) = trimmed
        .split_once('h')
        .ok_or_else(|| Error::Parse(format!("expected 'Hh MMm', got '{}'", s)))?;
    let minutes_part = rest
        .trim()
        .strip_suffix('m')
        .ok_or_else(|| Error::Parse(format!("expected 'Hh MMm', got '{}'", s)))?;

    let hours: i64 = hours_part
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid hours in '{}': {}", s, e)))?;
    let minutes: i64 = minutes_part
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid minutes in '{}': {}", s, e)))?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(Error::Parse(format!("out of range duration '{}'", s)));
    }

    Ok(hours * 60 + minutes)
}

/// Render a number with a fixed number of decimal places
pub fn fmt_decimal(value: f64, places: usize, separator: DecimalSeparator) -> String {
    let rendered = format!("{:.*}", places.min(MAX_DECIMAL_PLACES), value);
    match separator {
        DecimalSeparator::Point => rendered,
        DecimalSeparator::Comma => rendered.replace('.', ","),
    }
}
