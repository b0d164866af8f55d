//! Geometries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::enums::AltitudeMode;
use super::{Link, ObjectData};
use crate::base::Coordinate;
use crate::schema::{ConcreteKind, defaults};

/// Any geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
    Model(Model),
}

impl Geometry {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Point(_) => ConcreteKind::Point,
            Self::LineString(_) => ConcreteKind::LineString,
            Self::LinearRing(_) => ConcreteKind::LinearRing,
            Self::Polygon(_) => ConcreteKind::Polygon,
            Self::MultiGeometry(_) => ConcreteKind::MultiGeometry,
            Self::Model(_) => ConcreteKind::Model,
        }
    }

    pub fn object(&self) -> &ObjectData {
        match self {
            Self::Point(g) => &g.object,
            Self::LineString(g) => &g.object,
            Self::LinearRing(g) => &g.object,
            Self::Polygon(g) => &g.object,
            Self::MultiGeometry(g) => &g.object,
            Self::Model(g) => &g.object,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub object: ObjectData,
    pub extrude: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Vec<Coordinate>,
}

impl Point {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinates: vec![coordinate],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString {
    pub object: ObjectData,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    pub object: ObjectData,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Vec<Coordinate>,
}

/// Written as `<outerBoundaryIs><LinearRing>` and one `<innerBoundaryIs>` per hole.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub object: ObjectData,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub outer_boundary: Option<LinearRing>,
    pub inner_boundaries: Vec<LinearRing>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiGeometry {
    pub object: ObjectData,
    pub geometries: Vec<Geometry>,
}

/// A 3D model placed at a location.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    pub object: ObjectData,
    pub altitude_mode: AltitudeMode,
    pub location: Option<Location>,
    pub orientation: Option<Orientation>,
    pub scale: Option<Scale>,
    pub link: Option<Link>,
    pub resource_map: Option<ResourceMap>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub object: ObjectData,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    pub object: ObjectData,
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scale {
    pub object: ObjectData,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            x: defaults::DEF_SCALE,
            y: defaults::DEF_SCALE,
            z: defaults::DEF_SCALE,
        }
    }
}

/// Texture path remapping for a [`Model`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceMap {
    pub object: ObjectData,
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alias {
    pub object: ObjectData,
    pub target_href: Option<String>,
    pub source_href: Option<String>,
}

macro_rules! geometry_from {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

geometry_from!(Point, LineString, LinearRing, Polygon, MultiGeometry, Model);
