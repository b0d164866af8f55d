//! End-to-end tests through `KmlCodec` and the element-level entry points:
//! - Round-trip of every concrete type
//! - Default omission and angle normalization on output
//! - Classifier / writer dispatch consistency
//! - Tolerance of unknown elements
//! - Extension handler selection
//! - Error taxonomy

pub mod tests_classify;
pub mod tests_defaults;
pub mod tests_errors;
pub mod tests_extensions;
pub mod tests_roundtrip;
pub mod tests_scenarios;
#[cfg(feature = "serde")]
pub mod tests_serde;
pub mod tests_tolerance;
