//! Unit conversion utilities
//!
//! Converts between internal units (nanometres) and the text shown in
//! editing fields. Lengths display in millimetres (Metric) or inches
//! (Imperial); imperial input accepts decimal and fractional inches.
//! Angles display in degrees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;
use crate::geometry::{IU_PER_INCH, IU_PER_MM};

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

fn iu_per_unit(system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => IU_PER_MM,
        MeasurementSystem::Imperial => IU_PER_INCH,
    }
}

fn parse_error(text: &str, reason: impl Into<String>) -> FieldError {
    FieldError::Parse {
        text: text.to_string(),
        reason: reason.into(),
    }
}

/// Format a length for display
///
/// * `value_iu` - Value in internal units
/// * `system` - Target measurement system
/// * `precision` - Decimal places
pub fn format_length(value_iu: f64, system: MeasurementSystem, precision: usize) -> String {
    format!("{:.*}", precision, value_iu / iu_per_unit(system))
}

/// Parse length text to internal units
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let units = match system {
        MeasurementSystem::Metric => trimmed
            .parse::<f64>()
            .map_err(|e| parse_error(input, e.to_string()))?,
        MeasurementSystem::Imperial if trimmed.contains('/') => {
            parse_fractional_inches(input, trimmed)?
        }
        MeasurementSystem::Imperial => trimmed
            .parse::<f64>()
            .map_err(|e| parse_error(input, e.to_string()))?,
    };

    if !units.is_finite() {
        return Err(parse_error(input, "value is not finite"));
    }
    Ok(units * iu_per_unit(system))
}

// "1 1/4", "-3/8", "2 1/2"
fn parse_fractional_inches(input: &str, trimmed: &str) -> Result<f64, FieldError> {
    let negative = trimmed.starts_with('-');
    let body = trimmed.trim_start_matches('-');
    let mut total = 0.0;

    for part in body.split_whitespace() {
        if let Some((num, den)) = part.split_once('/') {
            let num = num
                .parse::<f64>()
                .map_err(|_| parse_error(input, "invalid numerator"))?;
            let den = den
                .parse::<f64>()
                .map_err(|_| parse_error(input, "invalid denominator"))?;
            if den == 0.0 {
                return Err(parse_error(input, "division by zero"));
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| parse_error(input, "invalid number part"))?;
        }
    }

    Ok(if negative { -total } else { total })
}

/// Format an angle in degrees for display
pub fn format_angle(degrees: f64, precision: usize) -> String {
    format!("{:.*}", precision, degrees)
}

/// Parse angle text (degrees, optional trailing `°`)
pub fn parse_angle(input: &str) -> Result<f64, FieldError> {
    let trimmed = input.trim().trim_end_matches('°').trim_end();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let degrees = trimmed
        .parse::<f64>()
        .map_err(|e| parse_error(input, e.to_string()))?;
    if !degrees.is_finite() {
        return Err(parse_error(input, "value is not finite"));
    }
    Ok(degrees)
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
