//! Default value for every optional field.
//!
//! The reader seeds each field with its `DEF_*` value; the writer omits any
//! field equal to it. Keeping both sides on this one table is what makes
//! "omitted" and "explicit default" read back identically.

use crate::base::Color;
use crate::model::enums::{
    AltitudeMode, ColorMode, DisplayMode, GridOrigin, ItemIconState, ListItemType, RefreshMode,
    Shape, StyleState, Units, ViewRefreshMode,
};

// Feature
pub const DEF_VISIBILITY: bool = true;
pub const DEF_OPEN: bool = false;
pub const DEF_SNIPPET_MAX_LINES: i32 = 2;
pub const DEF_REFRESH_VISIBILITY: bool = false;
pub const DEF_FLY_TO_VIEW: bool = false;

// Geometry
pub const DEF_EXTRUDE: bool = false;
pub const DEF_TESSELLATE: bool = false;
pub const DEF_ALTITUDE_MODE: AltitudeMode = AltitudeMode::ClampToGround;
pub const DEF_ALTITUDE: f64 = 0.0;
pub const DEF_LONGITUDE: f64 = 0.0;
pub const DEF_LATITUDE: f64 = 0.0;
pub const DEF_HEADING: f64 = 0.0;
pub const DEF_TILT: f64 = 0.0;
pub const DEF_ROLL: f64 = 0.0;
pub const DEF_RANGE: f64 = 0.0;
pub const DEF_SCALE: f64 = 1.0;

// Overlay
pub const DEF_COLOR: Color = Color::WHITE;
pub const DEF_DRAW_ORDER: i32 = 0;
pub const DEF_ROTATION: f64 = 0.0;
pub const DEF_VEC2_X: f64 = 1.0;
pub const DEF_VEC2_Y: f64 = 1.0;
pub const DEF_UNITS: Units = Units::Fraction;
pub const DEF_FOV: f64 = 0.0;
pub const DEF_NEAR: f64 = 0.0;
pub const DEF_TILE_SIZE: i32 = 256;
pub const DEF_MAX_WIDTH: i32 = 0;
pub const DEF_MAX_HEIGHT: i32 = 0;
pub const DEF_GRID_ORIGIN: GridOrigin = GridOrigin::LowerLeft;
pub const DEF_SHAPE: Shape = Shape::Rectangle;

// Styles
pub const DEF_COLOR_MODE: ColorMode = ColorMode::Normal;
pub const DEF_BG_COLOR: Color = Color::WHITE;
pub const DEF_TEXT_COLOR: Color = Color::BLACK;
pub const DEF_WIDTH: f64 = 1.0;
pub const DEF_FILL: bool = true;
pub const DEF_OUTLINE: bool = true;
pub const DEF_DISPLAY_MODE: DisplayMode = DisplayMode::Default;
pub const DEF_LIST_ITEM_TYPE: ListItemType = ListItemType::Check;
pub const DEF_ITEM_ICON_STATE: ItemIconState = ItemIconState::Open;
pub const DEF_MAX_SNIPPET_LINES: i32 = 2;
pub const DEF_STYLE_STATE: StyleState = StyleState::Normal;

// Lat-lon boxes and regions
pub const DEF_NORTH: f64 = 180.0;
pub const DEF_SOUTH: f64 = -180.0;
pub const DEF_EAST: f64 = 180.0;
pub const DEF_WEST: f64 = -180.0;
pub const DEF_MIN_ALTITUDE: f64 = 0.0;
pub const DEF_MAX_ALTITUDE: f64 = 0.0;
pub const DEF_MIN_LOD_PIXELS: f64 = 0.0;
pub const DEF_MAX_LOD_PIXELS: f64 = -1.0;
pub const DEF_MIN_FADE_EXTENT: f64 = 0.0;
pub const DEF_MAX_FADE_EXTENT: f64 = 0.0;

// Links
pub const DEF_REFRESH_MODE: RefreshMode = RefreshMode::OnChange;
pub const DEF_REFRESH_INTERVAL: f64 = 4.0;
pub const DEF_VIEW_REFRESH_MODE: ViewRefreshMode = ViewRefreshMode::Never;
pub const DEF_VIEW_REFRESH_TIME: f64 = 4.0;
pub const DEF_VIEW_BOUND_SCALE: f64 = 1.0;
