//! Text conversions for numeric, boolean and coordinate fields.
//!
//! Parsing trims surrounding whitespace; formatting produces text the parsing
//! side reads back to an equal value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScalarError;

pub fn parse_double(text: &str) -> Result<f64, ScalarError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ScalarError::new("double", text))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScalarError::new("finite double", text))
    }
}

pub fn parse_int(text: &str) -> Result<i32, ScalarError> {
    text.trim()
        .parse()
        .map_err(|_| ScalarError::new("integer", text))
}

/// KML booleans are `0`/`1`; `true`/`false` are accepted as well.
pub fn parse_bool(text: &str) -> Result<bool, ScalarError> {
    match text.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ScalarError::new("boolean", text)),
    }
}

/// Shortest text that parses back to `value`; integral values keep a `.0`.
pub fn format_double(value: f64) -> String {
    format!("{value:?}")
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// One `lon,lat[,alt]` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// A tuple without an altitude component.
    pub fn flat(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, 0.0)
    }
}

/// Parse whitespace-separated `lon,lat[,alt]` tuples, preserving order.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>, ScalarError> {
    // Whitespace next to a comma belongs to the tuple, not between tuples.
    let joined = text.split(',').map(str::trim).collect::<Vec<_>>().join(",");
    joined
        .split_whitespace()
        .map(|tuple| {
            let parts: Vec<&str> = tuple.split(',').collect();
            let component =
                |part: &str| parse_double(part).map_err(|_| ScalarError::new("coordinate", tuple));
            match parts.as_slice() {
                [lon, lat] => Ok(Coordinate::flat(component(*lon)?, component(*lat)?)),
                [lon, lat, alt] => Ok(Coordinate::new(
                    component(*lon)?,
                    component(*lat)?,
                    component(*alt)?,
                )),
                _ => Err(ScalarError::new("coordinate", tuple)),
            }
        })
        .collect()
}

/// Inverse of [`parse_coordinates`]. A zero altitude is left out.
pub fn format_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|c| {
            if c.altitude == 0.0 {
                format!("{},{}", format_double(c.longitude), format_double(c.latitude))
            } else {
                format!(
                    "{},{},{}",
                    format_double(c.longitude),
                    format_double(c.latitude),
                    format_double(c.altitude)
                )
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
