//! Unit conversion utilities
//!
//! Model lengths are centimeters throughout. This module handles
//! display formatting (dimension labels, take-off reports in meters)
//! and parsing of user-entered lengths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit for display and parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimeters, the model unit
    Centimeters,
    /// Meters, used by take-off reports
    Meters,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Centimeters
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centimeters => write!(f, "cm"),
            Self::Meters => write!(f, "m"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "m" | "meters" => Ok(Self::Meters),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Format a length value for display, without the unit suffix.
///
/// * `value_cm` - Value in centimeters
/// * `unit` - Target unit
pub fn format_length(value_cm: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Centimeters => format!("{:.1}", value_cm),
        LengthUnit::Meters => format!("{:.3}", value_cm / 100.0),
    }
}

/// Format an area value for display, without the unit suffix.
///
/// * `value_cm2` - Value in square centimeters
/// * `unit` - Target unit (squared)
pub fn format_area(value_cm2: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Centimeters => format!("{:.1}", value_cm2),
        LengthUnit::Meters => format!("{:.3}", value_cm2 / 10_000.0),
    }
}

/// Render the label text for a dimension annotation or wall segment.
///
/// Whole-centimeter values print without decimals ("185 cm"), everything
/// else keeps one decimal ("62.5 cm").
pub fn dimension_label(value_cm: f64) -> String {
    if (value_cm - value_cm.round()).abs() < 1e-9 {
        format!("{:.0} cm", value_cm)
    } else {
        format!("{:.1} cm", value_cm)
    }
}

/// Parse a length string to centimeters.
///
/// * `input` - String to parse
/// * `unit` - Assumed unit of the input
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid length: {}", input))?;

    match unit {
        LengthUnit::Centimeters => Ok(value),
        LengthUnit::Meters => Ok(value * 100.0),
    }
}
