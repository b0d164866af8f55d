//! Image overlays.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::enums::{AltitudeMode, GridOrigin, Shape};
use super::{Feature, FeatureData, LatLonBox, Link, ObjectData, Point, Vec2};
use crate::base::Color;
use crate::schema::{ConcreteKind, defaults};

/// Any overlay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Overlay {
    Ground(GroundOverlay),
    Screen(ScreenOverlay),
    Photo(PhotoOverlay),
}

impl Overlay {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Ground(_) => ConcreteKind::GroundOverlay,
            Self::Screen(_) => ConcreteKind::ScreenOverlay,
            Self::Photo(_) => ConcreteKind::PhotoOverlay,
        }
    }

    pub fn overlay(&self) -> &OverlayData {
        match self {
            Self::Ground(o) => &o.overlay,
            Self::Screen(o) => &o.overlay,
            Self::Photo(o) => &o.overlay,
        }
    }
}

/// Fields common to every overlay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlayData {
    pub feature: FeatureData,
    pub color: Color,
    pub draw_order: i32,
    pub icon: Option<Link>,
}

impl Default for OverlayData {
    fn default() -> Self {
        Self {
            feature: FeatureData::default(),
            color: defaults::DEF_COLOR,
            draw_order: defaults::DEF_DRAW_ORDER,
            icon: None,
        }
    }
}

/// An image draped over the terrain.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundOverlay {
    pub overlay: OverlayData,
    pub altitude: f64,
    pub altitude_mode: AltitudeMode,
    pub lat_lon_box: Option<LatLonBox>,
}

/// An image fixed to the screen.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenOverlay {
    pub overlay: OverlayData,
    pub overlay_xy: Option<Vec2>,
    pub screen_xy: Option<Vec2>,
    pub rotation_xy: Option<Vec2>,
    pub size: Option<Vec2>,
    pub rotation: f64,
}

/// A photo placed in the 3D scene.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhotoOverlay {
    pub overlay: OverlayData,
    pub rotation: f64,
    pub view_volume: Option<ViewVolume>,
    pub image_pyramid: Option<ImagePyramid>,
    pub point: Option<Point>,
    pub shape: Shape,
}

/// Field of view of a photo, in degrees from the view direction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewVolume {
    pub object: ObjectData,
    pub left_fov: f64,
    pub right_fov: f64,
    pub bottom_fov: f64,
    pub top_fov: f64,
    pub near: f64,
}

/// Tiling of a very large photo.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImagePyramid {
    pub object: ObjectData,
    pub tile_size: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub grid_origin: GridOrigin,
}

impl Default for ImagePyramid {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            tile_size: defaults::DEF_TILE_SIZE,
            max_width: defaults::DEF_MAX_WIDTH,
            max_height: defaults::DEF_MAX_HEIGHT,
            grid_origin: GridOrigin::default(),
        }
    }
}

impl From<GroundOverlay> for Overlay {
    fn from(value: GroundOverlay) -> Self {
        Self::Ground(value)
    }
}

impl From<ScreenOverlay> for Overlay {
    fn from(value: ScreenOverlay) -> Self {
        Self::Screen(value)
    }
}

impl From<PhotoOverlay> for Overlay {
    fn from(value: PhotoOverlay) -> Self {
        Self::Photo(value)
    }
}

impl From<GroundOverlay> for Feature {
    fn from(value: GroundOverlay) -> Self {
        Self::Overlay(Overlay::Ground(value))
    }
}

impl From<ScreenOverlay> for Feature {
    fn from(value: ScreenOverlay) -> Self {
        Self::Overlay(Overlay::Screen(value))
    }
}

impl From<PhotoOverlay> for Feature {
    fn from(value: PhotoOverlay) -> Self {
        Self::Overlay(Overlay::Photo(value))
    }
}
