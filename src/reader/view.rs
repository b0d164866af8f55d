//! Views, time primitives, lat-lon boxes and regions.

use tracing::warn;

use super::{KmlReader, object_data};
use crate::base::AngleRange;
use crate::error::KmlError;
use crate::model::{
    AbstractLatLonBox, AbstractView, Camera, LatLonAltBox, LatLonBounds, LatLonBox, Lod, LookAt,
    Region, TimePrimitive, TimeSpan, TimeStamp,
};
use crate::schema::{ConcreteKind, is_lat_lon_box};
use crate::tokens::{StartTag, TokenSource};

impl<S: TokenSource> KmlReader<S> {
    /// Any view, resolved from the tag name.
    pub(super) fn view(&mut self, start: &StartTag) -> Result<AbstractView, KmlError> {
        match self.core_name(start).and_then(ConcreteKind::from_tag) {
            Some(ConcreteKind::LookAt) => self.look_at(start).map(AbstractView::from),
            Some(ConcreteKind::Camera) => self.camera(start).map(AbstractView::from),
            _ => Err(self.structure(format!("<{}> is not a view", start.local_name))),
        }
    }

    /// Any time primitive, resolved from the tag name.
    pub(super) fn time_primitive(&mut self, start: &StartTag) -> Result<TimePrimitive, KmlError> {
        match self.core_name(start).and_then(ConcreteKind::from_tag) {
            Some(ConcreteKind::TimeSpan) => self.time_span(start).map(TimePrimitive::from),
            Some(ConcreteKind::TimeStamp) => self.time_stamp(start).map(TimePrimitive::from),
            _ => Err(self.structure(format!("<{}> is not a time primitive", start.local_name))),
        }
    }

    /// Either lat-lon box variant, resolved from the tag name.
    pub(super) fn lat_lon_box(&mut self, start: &StartTag) -> Result<AbstractLatLonBox, KmlError> {
        match self.core_name(start).and_then(ConcreteKind::from_tag) {
            Some(ConcreteKind::LatLonBox) => self.plain_lat_lon_box(start).map(AbstractLatLonBox::from),
            Some(ConcreteKind::LatLonAltBox) => {
                self.lat_lon_alt_box(start).map(AbstractLatLonBox::from)
            }
            _ => Err(self.structure(format!("<{}> is not a lat-lon box", start.local_name))),
        }
    }

    fn look_at(&mut self, start: &StartTag) -> Result<LookAt, KmlError> {
        self.nested(start, |r| {
            let mut look_at = LookAt {
                object: object_data(start),
                ..LookAt::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("longitude") => {
                        look_at.longitude = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    Some("latitude") => {
                        look_at.latitude = r.read_angle(&child, AngleRange::Signed90)?;
                    }
                    Some("altitude") => look_at.altitude = r.read_double(&child)?,
                    Some("heading") => look_at.heading = r.read_angle(&child, AngleRange::Full360)?,
                    Some("tilt") => look_at.tilt = r.read_angle(&child, AngleRange::Positive90)?,
                    Some("range") => look_at.range = r.read_double(&child)?,
                    Some("altitudeMode") => look_at.altitude_mode = r.read_enum(&child)?,
                    _ => r.unknown(ConcreteKind::LookAt, &child, &mut look_at.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_look_at(look_at))
        })
    }

    fn camera(&mut self, start: &StartTag) -> Result<Camera, KmlError> {
        self.nested(start, |r| {
            let mut camera = Camera {
                object: object_data(start),
                ..Camera::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("longitude") => {
                        camera.longitude = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    Some("latitude") => {
                        camera.latitude = r.read_angle(&child, AngleRange::Signed90)?;
                    }
                    Some("altitude") => camera.altitude = r.read_double(&child)?,
                    Some("heading") => camera.heading = r.read_angle(&child, AngleRange::Full360)?,
                    Some("tilt") => camera.tilt = r.read_angle(&child, AngleRange::Positive180)?,
                    Some("roll") => camera.roll = r.read_angle(&child, AngleRange::Signed180)?,
                    Some("altitudeMode") => camera.altitude_mode = r.read_enum(&child)?,
                    _ => r.unknown(ConcreteKind::Camera, &child, &mut camera.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_camera(camera))
        })
    }

    fn time_span(&mut self, start: &StartTag) -> Result<TimeSpan, KmlError> {
        self.nested(start, |r| {
            let mut span = TimeSpan {
                object: object_data(start),
                ..TimeSpan::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("begin") => span.begin = Some(r.read_datetime(&child)?),
                    Some("end") => span.end = Some(r.read_datetime(&child)?),
                    _ => r.unknown(ConcreteKind::TimeSpan, &child, &mut span.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_time_span(span))
        })
    }

    fn time_stamp(&mut self, start: &StartTag) -> Result<TimeStamp, KmlError> {
        self.nested(start, |r| {
            let mut stamp = TimeStamp {
                object: object_data(start),
                ..TimeStamp::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("when") => stamp.when = Some(r.read_datetime(&child)?),
                    _ => r.unknown(ConcreteKind::TimeStamp, &child, &mut stamp.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_time_stamp(stamp))
        })
    }

    /// `north`/`south`/`east`/`west`, shared by both box variants.
    fn bounds_field(&mut self, bounds: &mut LatLonBounds, child: &StartTag) -> Result<bool, KmlError> {
        let slot = match self.core_name(child) {
            Some("north") => &mut bounds.north,
            Some("south") => &mut bounds.south,
            Some("east") => &mut bounds.east,
            Some("west") => &mut bounds.west,
            _ => return Ok(false),
        };
        *slot = self.read_angle(child, AngleRange::Signed180)?;
        Ok(true)
    }

    fn plain_lat_lon_box(&mut self, start: &StartTag) -> Result<LatLonBox, KmlError> {
        self.nested(start, |r| {
            let mut lat_lon_box = LatLonBox {
                object: object_data(start),
                ..LatLonBox::default()
            };
            while let Some(child) = r.next_child()? {
                if r.bounds_field(&mut lat_lon_box.bounds, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("rotation") => {
                        lat_lon_box.rotation = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    _ => r.unknown(
                        ConcreteKind::LatLonBox,
                        &child,
                        &mut lat_lon_box.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_lat_lon_box(lat_lon_box))
        })
    }

    fn lat_lon_alt_box(&mut self, start: &StartTag) -> Result<LatLonAltBox, KmlError> {
        self.nested(start, |r| {
            let mut alt_box = LatLonAltBox {
                object: object_data(start),
                ..LatLonAltBox::default()
            };
            while let Some(child) = r.next_child()? {
                if r.bounds_field(&mut alt_box.bounds, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("minAltitude") => alt_box.min_altitude = r.read_double(&child)?,
                    Some("maxAltitude") => alt_box.max_altitude = r.read_double(&child)?,
                    Some("altitudeMode") => alt_box.altitude_mode = r.read_enum(&child)?,
                    _ => r.unknown(
                        ConcreteKind::LatLonAltBox,
                        &child,
                        &mut alt_box.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_lat_lon_alt_box(alt_box))
        })
    }

    pub(super) fn region(&mut self, start: &StartTag) -> Result<Region, KmlError> {
        self.nested(start, |r| {
            let mut region = Region {
                object: object_data(start),
                ..Region::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some(tag) if is_lat_lon_box(tag) => match r.lat_lon_box(&child)? {
                        AbstractLatLonBox::LatLonAltBox(alt_box) => {
                            region.lat_lon_alt_box = Some(alt_box);
                        }
                        other => warn!(
                            found = %other.kind(),
                            path = %r.path_string(),
                            "Region takes a LatLonAltBox; dropped"
                        ),
                    },
                    Some("Lod") => region.lod = Some(r.lod(&child)?),
                    _ => r.unknown(ConcreteKind::Region, &child, &mut region.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_region(region))
        })
    }

    fn lod(&mut self, start: &StartTag) -> Result<Lod, KmlError> {
        self.nested(start, |r| {
            let mut lod = Lod {
                object: object_data(start),
                ..Lod::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("minLodPixels") => lod.min_lod_pixels = r.read_double(&child)?,
                    Some("maxLodPixels") => lod.max_lod_pixels = r.read_double(&child)?,
                    Some("minFadeExtent") => lod.min_fade_extent = r.read_double(&child)?,
                    Some("maxFadeExtent") => lod.max_fade_extent = r.read_double(&child)?,
                    _ => r.unknown(ConcreteKind::Lod, &child, &mut lod.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_lod(lod))
        })
    }
}
