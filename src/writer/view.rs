//! Views, time primitives, lat-lon boxes and regions.

use super::KmlWriter;
use crate::base::{AngleRange, KmlDateTime};
use crate::error::KmlError;
use crate::model::{
    AbstractLatLonBox, AbstractView, Camera, LatLonAltBox, LatLonBounds, LatLonBox, Lod, LookAt,
    Region, TimePrimitive, TimeSpan, TimeStamp,
};
use crate::schema::ConcreteKind;
use crate::schema::defaults::*;
use crate::tokens::TokenSink;

impl<S: TokenSink> KmlWriter<S> {
    pub(super) fn view(&mut self, view: &AbstractView) -> Result<(), KmlError> {
        match view {
            AbstractView::LookAt(look_at) => self.look_at(look_at),
            AbstractView::Camera(camera) => self.camera(camera),
        }
    }

    pub(super) fn time_primitive(&mut self, time_primitive: &TimePrimitive) -> Result<(), KmlError> {
        match time_primitive {
            TimePrimitive::TimeSpan(span) => self.time_span(span),
            TimePrimitive::TimeStamp(stamp) => self.time_stamp(stamp),
        }
    }

    pub(super) fn lat_lon_box(&mut self, lat_lon_box: &AbstractLatLonBox) -> Result<(), KmlError> {
        match lat_lon_box {
            AbstractLatLonBox::LatLonBox(plain) => self.plain_lat_lon_box(plain),
            AbstractLatLonBox::LatLonAltBox(alt_box) => self.lat_lon_alt_box(alt_box),
        }
    }

    fn look_at(&mut self, look_at: &LookAt) -> Result<(), KmlError> {
        self.element(ConcreteKind::LookAt, &look_at.object, |w| {
            w.angle_field("longitude", look_at.longitude, AngleRange::Signed180, DEF_LONGITUDE)?;
            w.angle_field("latitude", look_at.latitude, AngleRange::Signed90, DEF_LATITUDE)?;
            w.double_field("altitude", look_at.altitude, DEF_ALTITUDE)?;
            w.angle_field("heading", look_at.heading, AngleRange::Full360, DEF_HEADING)?;
            w.angle_field("tilt", look_at.tilt, AngleRange::Positive90, DEF_TILT)?;
            w.double_field("range", look_at.range, DEF_RANGE)?;
            w.enum_field("altitudeMode", look_at.altitude_mode, DEF_ALTITUDE_MODE)
        })
    }

    fn camera(&mut self, camera: &Camera) -> Result<(), KmlError> {
        self.element(ConcreteKind::Camera, &camera.object, |w| {
            w.angle_field("longitude", camera.longitude, AngleRange::Signed180, DEF_LONGITUDE)?;
            w.angle_field("latitude", camera.latitude, AngleRange::Signed90, DEF_LATITUDE)?;
            w.double_field("altitude", camera.altitude, DEF_ALTITUDE)?;
            w.angle_field("heading", camera.heading, AngleRange::Full360, DEF_HEADING)?;
            w.angle_field("tilt", camera.tilt, AngleRange::Positive180, DEF_TILT)?;
            w.angle_field("roll", camera.roll, AngleRange::Signed180, DEF_ROLL)?;
            w.enum_field("altitudeMode", camera.altitude_mode, DEF_ALTITUDE_MODE)
        })
    }

    fn time_span(&mut self, span: &TimeSpan) -> Result<(), KmlError> {
        self.element(ConcreteKind::TimeSpan, &span.object, |w| {
            w.datetime_field("begin", span.begin.as_ref())?;
            w.datetime_field("end", span.end.as_ref())
        })
    }

    fn time_stamp(&mut self, stamp: &TimeStamp) -> Result<(), KmlError> {
        self.element(ConcreteKind::TimeStamp, &stamp.object, |w| {
            w.datetime_field("when", stamp.when.as_ref())
        })
    }

    fn datetime_field(&mut self, tag: &str, value: Option<&KmlDateTime>) -> Result<(), KmlError> {
        match value {
            Some(value) => self.text_field(tag, &value.to_string()),
            None => Ok(()),
        }
    }

    fn bounds_fields(&mut self, bounds: &LatLonBounds) -> Result<(), KmlError> {
        self.angle_field("north", bounds.north, AngleRange::Signed180, DEF_NORTH)?;
        self.angle_field("south", bounds.south, AngleRange::Signed180, DEF_SOUTH)?;
        self.angle_field("east", bounds.east, AngleRange::Signed180, DEF_EAST)?;
        self.angle_field("west", bounds.west, AngleRange::Signed180, DEF_WEST)
    }

    pub(super) fn plain_lat_lon_box(&mut self, lat_lon_box: &LatLonBox) -> Result<(), KmlError> {
        self.element(ConcreteKind::LatLonBox, &lat_lon_box.object, |w| {
            w.bounds_fields(&lat_lon_box.bounds)?;
            w.angle_field("rotation", lat_lon_box.rotation, AngleRange::Signed180, DEF_ROTATION)
        })
    }

    fn lat_lon_alt_box(&mut self, alt_box: &LatLonAltBox) -> Result<(), KmlError> {
        self.element(ConcreteKind::LatLonAltBox, &alt_box.object, |w| {
            w.bounds_fields(&alt_box.bounds)?;
            w.double_field("minAltitude", alt_box.min_altitude, DEF_MIN_ALTITUDE)?;
            w.double_field("maxAltitude", alt_box.max_altitude, DEF_MAX_ALTITUDE)?;
            w.enum_field("altitudeMode", alt_box.altitude_mode, DEF_ALTITUDE_MODE)
        })
    }

    pub(super) fn region(&mut self, region: &Region) -> Result<(), KmlError> {
        self.element(ConcreteKind::Region, &region.object, |w| {
            if let Some(alt_box) = &region.lat_lon_alt_box {
                w.lat_lon_alt_box(alt_box)?;
            }
            if let Some(lod) = &region.lod {
                w.lod(lod)?;
            }
            Ok(())
        })
    }

    fn lod(&mut self, lod: &Lod) -> Result<(), KmlError> {
        self.element(ConcreteKind::Lod, &lod.object, |w| {
            w.double_field("minLodPixels", lod.min_lod_pixels, DEF_MIN_LOD_PIXELS)?;
            w.double_field("maxLodPixels", lod.max_lod_pixels, DEF_MAX_LOD_PIXELS)?;
            w.double_field("minFadeExtent", lod.min_fade_extent, DEF_MIN_FADE_EXTENT)?;
            w.double_field("maxFadeExtent", lod.max_fade_extent, DEF_MAX_FADE_EXTENT)
        })
    }
}
