//! Model factory.
//!
//! The reader never hands out an instance it has not passed through the
//! factory: once an element's end-tag is read, the collected value goes to the
//! matching `create_*` method, which may accept it (possibly adjusted) or
//! reject it with a [`DomainError`].

use super::{
    Alias, BalloonStyle, Camera, Data, Document, ExtendedData, Folder, GroundOverlay, IconStyle,
    ImagePyramid, ItemIcon, Kml, LabelStyle, LatLonAltBox, LatLonBox, LineString, LineStyle,
    LinearRing, Link, ListStyle, Location, Lod, LookAt, Model, MultiGeometry, NetworkLink,
    Orientation, Pair, PhotoOverlay, Placemark, Point, PolyStyle, Polygon, Region, ResourceMap,
    Scale, Schema, SchemaData, ScreenOverlay, Style, StyleMap, TimeSpan, TimeStamp, ViewVolume,
};
use crate::error::DomainError;

macro_rules! model_factory {
    ($($method:ident => $ty:ident,)+) => {
        /// One construction hook per concrete type. Every method defaults to
        /// accepting the value unchanged.
        pub trait ModelFactory: Send + Sync {
            $(
                #[doc = concat!("Finish a `", stringify!($ty), "`.")]
                fn $method(&self, value: $ty) -> Result<$ty, DomainError> {
                    Ok(value)
                }
            )+
        }
    };
}

model_factory! {
    create_kml => Kml,
    create_placemark => Placemark,
    create_network_link => NetworkLink,
    create_folder => Folder,
    create_document => Document,
    create_ground_overlay => GroundOverlay,
    create_screen_overlay => ScreenOverlay,
    create_photo_overlay => PhotoOverlay,
    create_view_volume => ViewVolume,
    create_image_pyramid => ImagePyramid,
    create_point => Point,
    create_line_string => LineString,
    create_linear_ring => LinearRing,
    create_polygon => Polygon,
    create_multi_geometry => MultiGeometry,
    create_model => Model,
    create_location => Location,
    create_orientation => Orientation,
    create_scale => Scale,
    create_resource_map => ResourceMap,
    create_alias => Alias,
    create_look_at => LookAt,
    create_camera => Camera,
    create_time_span => TimeSpan,
    create_time_stamp => TimeStamp,
    create_style => Style,
    create_style_map => StyleMap,
    create_pair => Pair,
    create_icon_style => IconStyle,
    create_label_style => LabelStyle,
    create_line_style => LineStyle,
    create_poly_style => PolyStyle,
    create_balloon_style => BalloonStyle,
    create_list_style => ListStyle,
    create_item_icon => ItemIcon,
    create_lat_lon_box => LatLonBox,
    create_lat_lon_alt_box => LatLonAltBox,
    create_lod => Lod,
    create_region => Region,
    create_link => Link,
    create_extended_data => ExtendedData,
    create_data => Data,
    create_schema_data => SchemaData,
    create_schema => Schema,
}

/// Accepts everything except combinations the schema disallows:
/// an altitude band whose minimum exceeds its maximum, and a level-of-detail
/// range whose upper bound is below its lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl ModelFactory for DefaultFactory {
    fn create_lat_lon_alt_box(&self, value: LatLonAltBox) -> Result<LatLonAltBox, DomainError> {
        if value.min_altitude > value.max_altitude {
            return Err(DomainError::new(format!(
                "minAltitude {} exceeds maxAltitude {}",
                value.min_altitude, value.max_altitude
            )));
        }
        Ok(value)
    }

    fn create_lod(&self, value: Lod) -> Result<Lod, DomainError> {
        if value.max_lod_pixels != -1.0 && value.max_lod_pixels < value.min_lod_pixels {
            return Err(DomainError::new(format!(
                "maxLodPixels {} is below minLodPixels {}",
                value.max_lod_pixels, value.min_lod_pixels
            )));
        }
        Ok(value)
    }
}

/// Accepts every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveFactory;

impl ModelFactory for PermissiveFactory {}
