//! The object graph.
//!
//! Plain data holders: every field is public, every optional field starts at
//! its [default](crate::schema::defaults). Each abstract category is a closed
//! enum so dispatch sites `match` exhaustively:
//!
//! ```text
//! Feature ── Placemark | NetworkLink | Container(Folder | Document)
//!          | Overlay(GroundOverlay | ScreenOverlay | PhotoOverlay)
//! Geometry ── Point | LineString | LinearRing | Polygon | MultiGeometry | Model
//! AbstractView ── LookAt | Camera
//! TimePrimitive ── TimeSpan | TimeStamp
//! StyleSelector ── Style | StyleMap
//! SubStyle ── Color(IconStyle | LabelStyle | LineStyle | PolyStyle) | BalloonStyle | ListStyle
//! AbstractLatLonBox ── LatLonBox | LatLonAltBox
//! ```

mod data;
pub mod enums;
mod factory;
mod feature;
mod geometry;
mod kml;
mod link;
mod object;
mod overlay;
mod region;
mod style;
mod view;

pub use data::{Data, ExtendedData, Schema, SchemaData, SimpleData, SimpleField};
pub use enums::{
    AltitudeMode, ColorMode, DisplayMode, GridOrigin, ItemIconState, KmlEnum, ListItemType,
    RefreshMode, Shape, StyleState, Units, ViewRefreshMode,
};
pub use factory::{DefaultFactory, ModelFactory, PermissiveFactory};
pub use feature::{Container, Document, Feature, FeatureData, Folder, NetworkLink, Placemark};
pub use geometry::{
    Alias, Geometry, LineString, LinearRing, Location, Model, MultiGeometry, Orientation, Point,
    Polygon, ResourceMap, Scale,
};
pub use kml::Kml;
pub use link::{AtomLink, Author, Link, Snippet, Vec2};
pub use object::{ForeignElement, ForeignNode, ObjectData};
pub use overlay::{
    GroundOverlay, ImagePyramid, Overlay, OverlayData, PhotoOverlay, ScreenOverlay, ViewVolume,
};
pub use region::{AbstractLatLonBox, LatLonAltBox, LatLonBounds, LatLonBox, Lod, Region};
pub use style::{
    BalloonStyle, ColorStyle, ColorStyleData, IconStyle, ItemIcon, LabelStyle, LineStyle,
    ListStyle, Pair, PolyStyle, Style, StyleMap, StyleSelector, SubStyle,
};
pub use view::{AbstractView, Camera, LookAt, TimePrimitive, TimeSpan, TimeStamp};
