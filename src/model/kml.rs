//! The document root.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Feature, ForeignElement};

/// `<kml>`: at most one root feature.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kml {
    /// The `hint` attribute, e.g. `target=sky`.
    pub hint: Option<String>,
    pub feature: Option<Feature>,
    pub extensions: Vec<ForeignElement>,
}

impl Kml {
    pub fn new(feature: impl Into<Feature>) -> Self {
        Self {
            feature: Some(feature.into()),
            ..Self::default()
        }
    }
}
