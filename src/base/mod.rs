//! Scalar value types and conversions shared by the reader and the writer.
//!
//! - [`angle`] - the single angle normalization routine and its ranges
//! - [`Color`] - `aabbggrr` hex colors
//! - [`Coordinate`] and the numeric/boolean text conversions in [`scalar`]
//! - [`KmlDateTime`] - the partial date/time forms KML accepts
//!
//! This module has NO dependencies on the reader, writer or model.

pub mod angle;
mod color;
mod datetime;
pub mod scalar;

pub use angle::{AngleRange, normalize};
pub use color::Color;
pub use datetime::KmlDateTime;
pub use scalar::Coordinate;
