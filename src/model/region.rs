//! Lat-lon boxes and regions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ObjectData;
use super::enums::AltitudeMode;
use crate::schema::{ConcreteKind, defaults};

/// Any lat-lon box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbstractLatLonBox {
    LatLonBox(LatLonBox),
    LatLonAltBox(LatLonAltBox),
}

impl AbstractLatLonBox {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::LatLonBox(_) => ConcreteKind::LatLonBox,
            Self::LatLonAltBox(_) => ConcreteKind::LatLonAltBox,
        }
    }

    pub fn bounds(&self) -> &LatLonBounds {
        match self {
            Self::LatLonBox(b) => &b.bounds,
            Self::LatLonAltBox(b) => &b.bounds,
        }
    }
}

/// North/south/east/west edges in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Default for LatLonBounds {
    fn default() -> Self {
        Self {
            north: defaults::DEF_NORTH,
            south: defaults::DEF_SOUTH,
            east: defaults::DEF_EAST,
            west: defaults::DEF_WEST,
        }
    }
}

impl LatLonBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }
}

/// Image extent of a ground overlay.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonBox {
    pub object: ObjectData,
    pub bounds: LatLonBounds,
    pub rotation: f64,
}

/// Extent of a region, with an altitude band.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonAltBox {
    pub object: ObjectData,
    pub bounds: LatLonBounds,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub altitude_mode: AltitudeMode,
}

/// Level-of-detail limits in screen pixels. `max_lod_pixels == -1` means unbounded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lod {
    pub object: ObjectData,
    pub min_lod_pixels: f64,
    pub max_lod_pixels: f64,
    pub min_fade_extent: f64,
    pub max_fade_extent: f64,
}

impl Default for Lod {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            min_lod_pixels: defaults::DEF_MIN_LOD_PIXELS,
            max_lod_pixels: defaults::DEF_MAX_LOD_PIXELS,
            min_fade_extent: defaults::DEF_MIN_FADE_EXTENT,
            max_fade_extent: defaults::DEF_MAX_FADE_EXTENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub object: ObjectData,
    pub lat_lon_alt_box: Option<LatLonAltBox>,
    pub lod: Option<Lod>,
}

impl From<LatLonBox> for AbstractLatLonBox {
    fn from(value: LatLonBox) -> Self {
        Self::LatLonBox(value)
    }
}

impl From<LatLonAltBox> for AbstractLatLonBox {
    fn from(value: LatLonAltBox) -> Self {
        Self::LatLonAltBox(value)
    }
}
