//! Area and volume unit conversions.
//!
//! The factors are fixed, rounded constants, so converting back and forth
//! does not give back the exact starting value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acres in one hectare.
pub const ACRES_PER_HECTARE: f64 = 2.47105;

/// Hectares in one acre.
pub const HECTARES_PER_ACRE: f64 = 0.404686;

/// Cubic meters in one US gallon.
pub const CUBIC_METERS_PER_GALLON: f64 = 0.00378541;

pub fn hectares_to_acres(hectares: f64) -> f64 {
    hectares * ACRES_PER_HECTARE
}

pub fn acres_to_hectares(acres: f64) -> f64 {
    acres * HECTARES_PER_ACRE
}

pub fn gallons_to_cubic_meters(gallons: f64) -> f64 {
    gallons * CUBIC_METERS_PER_GALLON
}

pub fn cubic_meters_to_gallons(cubic_meters: f64) -> f64 {
    cubic_meters / CUBIC_METERS_PER_GALLON
}

/// Units accepted by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Acres,
    Hectares,
    Gallons,
    CubicMeters,
}

impl fmt::Display for Unit {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::Acres => "acres",
            Self::Hectares => "hectares",
            Self::Gallons => "gallons",
            Self::CubicMeters => "cubic meters",
        })
    }
}

/// Errors returned by [`convert`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Area and volume units cannot be converted into each other.
    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },
}

/// Converts `value` between two units of the same dimension.
///
/// # Examples
///
/// ```
/// use water_core::calculations::units::{Unit, convert};
///
/// let acres = convert(10.0, Unit::Hectares, Unit::Acres).unwrap();
/// assert!((acres - 24.7105).abs() < 1e-9);
/// assert!(convert(1.0, Unit::Acres, Unit::Gallons).is_err());
/// ```
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
) -> Result<f64, ConversionError> {
    match (from, to) {
        _ if from == to => Ok(value),
        (Unit::Hectares, Unit::Acres) => Ok(hectares_to_acres(value)),
        (Unit::Acres, Unit::Hectares) => Ok(acres_to_hectares(value)),
        (Unit::Gallons, Unit::CubicMeters) => Ok(gallons_to_cubic_meters(value)),
        (Unit::CubicMeters, Unit::Gallons) => Ok(cubic_meters_to_gallons(value)),
        _ => Err(ConversionError::IncompatibleUnits { from, to }),
    }
}
