//! Geometries and 3D model parts.

use super::KmlWriter;
use crate::base::AngleRange;
use crate::error::KmlError;
use crate::model::{
    Alias, Geometry, LineString, LinearRing, Location, Model, MultiGeometry, Orientation, Point,
    Polygon, ResourceMap, Scale,
};
use crate::schema::ConcreteKind;
use crate::schema::defaults::{
    DEF_ALTITUDE, DEF_ALTITUDE_MODE, DEF_EXTRUDE, DEF_HEADING, DEF_LATITUDE, DEF_LONGITUDE,
    DEF_ROLL, DEF_SCALE, DEF_TESSELLATE, DEF_TILT,
};
use crate::tokens::TokenSink;

impl<S: TokenSink> KmlWriter<S> {
    pub(super) fn geometry(&mut self, geometry: &Geometry) -> Result<(), KmlError> {
        match geometry {
            Geometry::Point(point) => self.point(point),
            Geometry::LineString(line) => self.line_string(line),
            Geometry::LinearRing(ring) => self.linear_ring(ring),
            Geometry::Polygon(polygon) => self.polygon(polygon),
            Geometry::MultiGeometry(multi) => self.multi_geometry(multi),
            Geometry::Model(model) => self.model(model),
        }
    }

    pub(super) fn point(&mut self, point: &Point) -> Result<(), KmlError> {
        self.element(ConcreteKind::Point, &point.object, |w| {
            w.bool_field("extrude", point.extrude, DEF_EXTRUDE)?;
            w.enum_field("altitudeMode", point.altitude_mode, DEF_ALTITUDE_MODE)?;
            w.coordinates_field(&point.coordinates)
        })
    }

    fn line_string(&mut self, line: &LineString) -> Result<(), KmlError> {
        self.element(ConcreteKind::LineString, &line.object, |w| {
            w.bool_field("extrude", line.extrude, DEF_EXTRUDE)?;
            w.bool_field("tessellate", line.tessellate, DEF_TESSELLATE)?;
            w.enum_field("altitudeMode", line.altitude_mode, DEF_ALTITUDE_MODE)?;
            w.coordinates_field(&line.coordinates)
        })
    }

    fn linear_ring(&mut self, ring: &LinearRing) -> Result<(), KmlError> {
        self.element(ConcreteKind::LinearRing, &ring.object, |w| {
            w.bool_field("extrude", ring.extrude, DEF_EXTRUDE)?;
            w.bool_field("tessellate", ring.tessellate, DEF_TESSELLATE)?;
            w.enum_field("altitudeMode", ring.altitude_mode, DEF_ALTITUDE_MODE)?;
            w.coordinates_field(&ring.coordinates)
        })
    }

    fn polygon(&mut self, polygon: &Polygon) -> Result<(), KmlError> {
        self.element(ConcreteKind::Polygon, &polygon.object, |w| {
            w.bool_field("extrude", polygon.extrude, DEF_EXTRUDE)?;
            w.bool_field("tessellate", polygon.tessellate, DEF_TESSELLATE)?;
            w.enum_field("altitudeMode", polygon.altitude_mode, DEF_ALTITUDE_MODE)?;
            if let Some(outer) = &polygon.outer_boundary {
                w.wrapper("outerBoundaryIs", |w| w.linear_ring(outer))?;
            }
            for inner in &polygon.inner_boundaries {
                w.wrapper("innerBoundaryIs", |w| w.linear_ring(inner))?;
            }
            Ok(())
        })
    }

    fn multi_geometry(&mut self, multi: &MultiGeometry) -> Result<(), KmlError> {
        self.element(ConcreteKind::MultiGeometry, &multi.object, |w| {
            for geometry in &multi.geometries {
                w.geometry(geometry)?;
            }
            Ok(())
        })
    }

    fn model(&mut self, model: &Model) -> Result<(), KmlError> {
        self.element(ConcreteKind::Model, &model.object, |w| {
            w.enum_field("altitudeMode", model.altitude_mode, DEF_ALTITUDE_MODE)?;
            if let Some(location) = &model.location {
                w.location(location)?;
            }
            if let Some(orientation) = &model.orientation {
                w.orientation(orientation)?;
            }
            if let Some(scale) = &model.scale {
                w.scale(scale)?;
            }
            if let Some(link) = &model.link {
                w.link(ConcreteKind::Link, link)?;
            }
            if let Some(map) = &model.resource_map {
                w.resource_map(map)?;
            }
            Ok(())
        })
    }

    fn location(&mut self, location: &Location) -> Result<(), KmlError> {
        self.element(ConcreteKind::Location, &location.object, |w| {
            w.angle_field("longitude", location.longitude, AngleRange::Signed180, DEF_LONGITUDE)?;
            w.angle_field("latitude", location.latitude, AngleRange::Signed90, DEF_LATITUDE)?;
            w.double_field("altitude", location.altitude, DEF_ALTITUDE)
        })
    }

    fn orientation(&mut self, orientation: &Orientation) -> Result<(), KmlError> {
        self.element(ConcreteKind::Orientation, &orientation.object, |w| {
            w.angle_field("heading", orientation.heading, AngleRange::Full360, DEF_HEADING)?;
            w.angle_field("tilt", orientation.tilt, AngleRange::Positive180, DEF_TILT)?;
            w.angle_field("roll", orientation.roll, AngleRange::Signed180, DEF_ROLL)
        })
    }

    fn scale(&mut self, scale: &Scale) -> Result<(), KmlError> {
        self.element(ConcreteKind::Scale, &scale.object, |w| {
            w.double_field("x", scale.x, DEF_SCALE)?;
            w.double_field("y", scale.y, DEF_SCALE)?;
            w.double_field("z", scale.z, DEF_SCALE)
        })
    }

    fn resource_map(&mut self, map: &ResourceMap) -> Result<(), KmlError> {
        self.element(ConcreteKind::ResourceMap, &map.object, |w| {
            for alias in &map.aliases {
                w.alias(alias)?;
            }
            Ok(())
        })
    }

    fn alias(&mut self, alias: &Alias) -> Result<(), KmlError> {
        self.element(ConcreteKind::Alias, &alias.object, |w| {
            w.optional_text("targetHref", alias.target_href.as_deref())?;
            w.optional_text("sourceHref", alias.source_href.as_deref())
        })
    }
}
