//! Geometries and the parts of a 3D model.

use super::{KmlReader, object_data};
use crate::base::AngleRange;
use crate::error::KmlError;
use crate::model::{
    Alias, Geometry, LineString, LinearRing, Location, Model, MultiGeometry, Orientation, Point,
    Polygon, ResourceMap, Scale,
};
use crate::schema::{ConcreteKind, is_geometry};
use crate::tokens::{StartTag, TokenSource};

impl<S: TokenSource> KmlReader<S> {
    /// Any geometry, resolved from the tag name.
    pub(super) fn geometry(&mut self, start: &StartTag) -> Result<Geometry, KmlError> {
        let kind = self.core_name(start).and_then(ConcreteKind::from_tag);
        match kind {
            Some(ConcreteKind::Point) => self.point(start).map(Geometry::from),
            Some(ConcreteKind::LineString) => self.line_string(start).map(Geometry::from),
            Some(ConcreteKind::LinearRing) => self.linear_ring(start).map(Geometry::from),
            Some(ConcreteKind::Polygon) => self.polygon(start).map(Geometry::from),
            Some(ConcreteKind::MultiGeometry) => self.multi_geometry(start).map(Geometry::from),
            Some(ConcreteKind::Model) => self.model(start).map(Geometry::from),
            _ => Err(self.structure(format!("<{}> is not a geometry", start.local_name))),
        }
    }

    pub(super) fn point(&mut self, start: &StartTag) -> Result<Point, KmlError> {
        self.nested(start, |r| {
            let mut point = Point {
                object: object_data(start),
                ..Point::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("extrude") => point.extrude = r.read_bool(&child)?,
                    Some("altitudeMode") => point.altitude_mode = r.read_enum(&child)?,
                    Some("coordinates") => point.coordinates = r.read_coordinates(&child)?,
                    _ => r.unknown(ConcreteKind::Point, &child, &mut point.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_point(point))
        })
    }

    fn line_string(&mut self, start: &StartTag) -> Result<LineString, KmlError> {
        self.nested(start, |r| {
            let mut line = LineString {
                object: object_data(start),
                ..LineString::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("extrude") => line.extrude = r.read_bool(&child)?,
                    Some("tessellate") => line.tessellate = r.read_bool(&child)?,
                    Some("altitudeMode") => line.altitude_mode = r.read_enum(&child)?,
                    Some("coordinates") => line.coordinates = r.read_coordinates(&child)?,
                    _ => r.unknown(ConcreteKind::LineString, &child, &mut line.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_line_string(line))
        })
    }

    fn linear_ring(&mut self, start: &StartTag) -> Result<LinearRing, KmlError> {
        self.nested(start, |r| {
            let mut ring = LinearRing {
                object: object_data(start),
                ..LinearRing::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("extrude") => ring.extrude = r.read_bool(&child)?,
                    Some("tessellate") => ring.tessellate = r.read_bool(&child)?,
                    Some("altitudeMode") => ring.altitude_mode = r.read_enum(&child)?,
                    Some("coordinates") => ring.coordinates = r.read_coordinates(&child)?,
                    _ => r.unknown(ConcreteKind::LinearRing, &child, &mut ring.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_linear_ring(ring))
        })
    }

    fn polygon(&mut self, start: &StartTag) -> Result<Polygon, KmlError> {
        self.nested(start, |r| {
            let mut polygon = Polygon {
                object: object_data(start),
                ..Polygon::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("extrude") => polygon.extrude = r.read_bool(&child)?,
                    Some("tessellate") => polygon.tessellate = r.read_bool(&child)?,
                    Some("altitudeMode") => polygon.altitude_mode = r.read_enum(&child)?,
                    Some("outerBoundaryIs") => {
                        if let Some(ring) = r.boundary(&child)? {
                            polygon.outer_boundary = Some(ring);
                        }
                    }
                    Some("innerBoundaryIs") => {
                        if let Some(ring) = r.boundary(&child)? {
                            polygon.inner_boundaries.push(ring);
                        }
                    }
                    _ => r.unknown(ConcreteKind::Polygon, &child, &mut polygon.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_polygon(polygon))
        })
    }

    /// `<outerBoundaryIs>`/`<innerBoundaryIs>`: a wrapper around one ring.
    fn boundary(&mut self, start: &StartTag) -> Result<Option<LinearRing>, KmlError> {
        self.nested(start, |r| {
            let mut ring = None;
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("LinearRing") => ring = Some(r.linear_ring(&child)?),
                    _ => r.skip_rest(&child)?,
                }
            }
            Ok(ring)
        })
    }

    fn multi_geometry(&mut self, start: &StartTag) -> Result<MultiGeometry, KmlError> {
        self.nested(start, |r| {
            let mut multi = MultiGeometry {
                object: object_data(start),
                geometries: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some(tag) if is_geometry(tag) => {
                        let geometry = r.geometry(&child)?;
                        multi.geometries.push(geometry);
                    }
                    _ => r.unknown(
                        ConcreteKind::MultiGeometry,
                        &child,
                        &mut multi.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_multi_geometry(multi))
        })
    }

    fn model(&mut self, start: &StartTag) -> Result<Model, KmlError> {
        self.nested(start, |r| {
            let mut model = Model {
                object: object_data(start),
                ..Model::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("altitudeMode") => model.altitude_mode = r.read_enum(&child)?,
                    Some("Location") => model.location = Some(r.location(&child)?),
                    Some("Orientation") => model.orientation = Some(r.orientation(&child)?),
                    Some("Scale") => model.scale = Some(r.scale(&child)?),
                    Some("Link" | "Url") => model.link = Some(r.link(&child)?),
                    Some("ResourceMap") => model.resource_map = Some(r.resource_map(&child)?),
                    _ => r.unknown(ConcreteKind::Model, &child, &mut model.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_model(model))
        })
    }

    fn location(&mut self, start: &StartTag) -> Result<Location, KmlError> {
        self.nested(start, |r| {
            let mut location = Location {
                object: object_data(start),
                ..Location::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("longitude") => {
                        location.longitude = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    Some("latitude") => {
                        location.latitude = r.read_angle(&child, AngleRange::Signed90)?;
                    }
                    Some("altitude") => location.altitude = r.read_double(&child)?,
                    _ => r.unknown(ConcreteKind::Location, &child, &mut location.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_location(location))
        })
    }

    fn orientation(&mut self, start: &StartTag) -> Result<Orientation, KmlError> {
        self.nested(start, |r| {
            let mut orientation = Orientation {
                object: object_data(start),
                ..Orientation::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("heading") => {
                        orientation.heading = r.read_angle(&child, AngleRange::Full360)?;
                    }
                    Some("tilt") => {
                        orientation.tilt = r.read_angle(&child, AngleRange::Positive180)?;
                    }
                    Some("roll") => orientation.roll = r.read_angle(&child, AngleRange::Signed180)?,
                    _ => r.unknown(
                        ConcreteKind::Orientation,
                        &child,
                        &mut orientation.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_orientation(orientation))
        })
    }

    fn scale(&mut self, start: &StartTag) -> Result<Scale, KmlError> {
        self.nested(start, |r| {
            let mut scale = Scale {
                object: object_data(start),
                ..Scale::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("x") => scale.x = r.read_double(&child)?,
                    Some("y") => scale.y = r.read_double(&child)?,
                    Some("z") => scale.z = r.read_double(&child)?,
                    _ => r.unknown(ConcreteKind::Scale, &child, &mut scale.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_scale(scale))
        })
    }

    fn resource_map(&mut self, start: &StartTag) -> Result<ResourceMap, KmlError> {
        self.nested(start, |r| {
            let mut map = ResourceMap {
                object: object_data(start),
                aliases: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("Alias") => {
                        let alias = r.alias(&child)?;
                        map.aliases.push(alias);
                    }
                    _ => r.unknown(ConcreteKind::ResourceMap, &child, &mut map.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_resource_map(map))
        })
    }

    fn alias(&mut self, start: &StartTag) -> Result<Alias, KmlError> {
        self.nested(start, |r| {
            let mut alias = Alias {
                object: object_data(start),
                ..Alias::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("targetHref") => alias.target_href = Some(r.read_token(&child)?),
                    Some("sourceHref") => alias.source_href = Some(r.read_token(&child)?),
                    _ => r.unknown(ConcreteKind::Alias, &child, &mut alias.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_alias(alias))
        })
    }
}
