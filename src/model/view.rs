//! Views and time primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ObjectData;
use super::enums::AltitudeMode;
use crate::base::KmlDateTime;
use crate::schema::ConcreteKind;

/// Any view: where the viewer looks from or at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbstractView {
    LookAt(LookAt),
    Camera(Camera),
}

impl AbstractView {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::LookAt(_) => ConcreteKind::LookAt,
            Self::Camera(_) => ConcreteKind::Camera,
        }
    }

    pub fn object(&self) -> &ObjectData {
        match self {
            Self::LookAt(v) => &v.object,
            Self::Camera(v) => &v.object,
        }
    }
}

/// A view of a point from a distance (`range`) along a heading and tilt.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookAt {
    pub object: ObjectData,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub tilt: f64,
    pub range: f64,
    pub altitude_mode: AltitudeMode,
}

/// A viewer position and orientation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    pub object: ObjectData,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
    pub altitude_mode: AltitudeMode,
}

/// Any time primitive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimePrimitive {
    TimeSpan(TimeSpan),
    TimeStamp(TimeStamp),
}

impl TimePrimitive {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::TimeSpan(_) => ConcreteKind::TimeSpan,
            Self::TimeStamp(_) => ConcreteKind::TimeStamp,
        }
    }

    pub fn object(&self) -> &ObjectData {
        match self {
            Self::TimeSpan(t) => &t.object,
            Self::TimeStamp(t) => &t.object,
        }
    }
}

/// An interval; either end may be open.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSpan {
    pub object: ObjectData,
    pub begin: Option<KmlDateTime>,
    pub end: Option<KmlDateTime>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeStamp {
    pub object: ObjectData,
    pub when: Option<KmlDateTime>,
}

impl From<LookAt> for AbstractView {
    fn from(value: LookAt) -> Self {
        Self::LookAt(value)
    }
}

impl From<Camera> for AbstractView {
    fn from(value: Camera) -> Self {
        Self::Camera(value)
    }
}

impl From<TimeSpan> for TimePrimitive {
    fn from(value: TimeSpan) -> Self {
        Self::TimeSpan(value)
    }
}

impl From<TimeStamp> for TimePrimitive {
    fn from(value: TimeStamp) -> Self {
        Self::TimeStamp(value)
    }
}
