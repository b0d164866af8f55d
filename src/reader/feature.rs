//! Features, containers, overlays and the metadata every feature carries.

use tracing::warn;

use super::{KmlReader, object_data};
use crate::base::AngleRange;
use crate::error::KmlError;
use crate::model::{
    AbstractLatLonBox, AtomLink, Author, Data, Document, ExtendedData, Feature, FeatureData,
    Folder, GroundOverlay, ImagePyramid, NetworkLink, OverlayData, PhotoOverlay, Placemark,
    Schema, SchemaData, ScreenOverlay, SimpleData, SimpleField, Snippet, ViewVolume,
};
use crate::schema::{
    ConcreteKind, is_feature, is_geometry, is_lat_lon_box, is_style_selector, is_time_primitive,
    is_view,
};
use crate::tokens::{StartTag, TokenSource};

impl<S: TokenSource> KmlReader<S> {
    /// Any feature, resolved from the tag name.
    pub(super) fn feature(&mut self, start: &StartTag) -> Result<Feature, KmlError> {
        let kind = self.core_name(start).and_then(ConcreteKind::from_tag);
        match kind {
            Some(ConcreteKind::Placemark) => self.placemark(start).map(Feature::from),
            Some(ConcreteKind::NetworkLink) => self.network_link(start).map(Feature::from),
            Some(ConcreteKind::Folder) => self.folder(start).map(Feature::from),
            Some(ConcreteKind::Document) => self.document(start).map(Feature::from),
            Some(ConcreteKind::GroundOverlay) => self.ground_overlay(start).map(Feature::from),
            Some(ConcreteKind::ScreenOverlay) => self.screen_overlay(start).map(Feature::from),
            Some(ConcreteKind::PhotoOverlay) => self.photo_overlay(start).map(Feature::from),
            _ => Err(self.structure(format!("<{}> is not a feature", start.local_name))),
        }
    }

    /// Assign `child` to the field of `data` it names. Returns false when it
    /// names no field shared by all features.
    fn feature_field(
        &mut self,
        data: &mut FeatureData,
        child: &StartTag,
    ) -> Result<bool, KmlError> {
        if let Some(name) = self.atom_name(child) {
            match name {
                "author" => data.author = Some(self.author(child)?),
                "link" => data.link = Some(self.atom_link(child)?),
                _ => return Ok(false),
            }
            return Ok(true);
        }
        let Some(name) = self.core_name(child) else {
            return Ok(false);
        };
        match name {
            "name" => data.name = Some(self.read_text(child)?),
            "visibility" => data.visibility = self.read_bool(child)?,
            "open" => data.open = self.read_bool(child)?,
            "address" => data.address = Some(self.read_text(child)?),
            "phoneNumber" => data.phone_number = Some(self.read_text(child)?),
            "Snippet" => data.snippet = Some(self.snippet(child)?),
            "snippet" => data.snippet = Some(Snippet::new(self.read_text(child)?)),
            "description" => data.description = Some(self.read_text(child)?),
            "styleUrl" => data.style_url = Some(self.read_token(child)?),
            "Region" => data.region = Some(self.region(child)?),
            "ExtendedData" => data.extended_data = Some(self.extended_data(child)?),
            tag if is_view(tag) => data.view = Some(self.view(child)?),
            tag if is_time_primitive(tag) => data.time_primitive = Some(self.time_primitive(child)?),
            tag if is_style_selector(tag) => {
                let selector = self.style_selector(child)?;
                data.style_selectors.push(selector);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn feature_data(start: &StartTag) -> FeatureData {
        FeatureData {
            object: object_data(start),
            ..FeatureData::default()
        }
    }

    fn placemark(&mut self, start: &StartTag) -> Result<Placemark, KmlError> {
        self.nested(start, |r| {
            let mut placemark = Placemark {
                feature: Self::feature_data(start),
                geometry: None,
            };
            while let Some(child) = r.next_child()? {
                if r.feature_field(&mut placemark.feature, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some(tag) if is_geometry(tag) => placemark.geometry = Some(r.geometry(&child)?),
                    _ => r.unknown(
                        ConcreteKind::Placemark,
                        &child,
                        &mut placemark.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_placemark(placemark))
        })
    }

    fn network_link(&mut self, start: &StartTag) -> Result<NetworkLink, KmlError> {
        self.nested(start, |r| {
            let mut link = NetworkLink {
                feature: Self::feature_data(start),
                ..NetworkLink::default()
            };
            while let Some(child) = r.next_child()? {
                if r.feature_field(&mut link.feature, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("refreshVisibility") => link.refresh_visibility = r.read_bool(&child)?,
                    Some("flyToView") => link.fly_to_view = r.read_bool(&child)?,
                    Some("Link" | "Url") => link.link = Some(r.link(&child)?),
                    _ => r.unknown(
                        ConcreteKind::NetworkLink,
                        &child,
                        &mut link.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_network_link(link))
        })
    }

    fn folder(&mut self, start: &StartTag) -> Result<Folder, KmlError> {
        self.nested(start, |r| {
            let mut folder = Folder {
                feature: Self::feature_data(start),
                features: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                if r.feature_field(&mut folder.feature, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some(tag) if is_feature(tag) => {
                        let feature = r.feature(&child)?;
                        folder.features.push(feature);
                    }
                    _ => r.unknown(
                        ConcreteKind::Folder,
                        &child,
                        &mut folder.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_folder(folder))
        })
    }

    fn document(&mut self, start: &StartTag) -> Result<Document, KmlError> {
        self.nested(start, |r| {
            let mut document = Document {
                feature: Self::feature_data(start),
                schemas: Vec::new(),
                features: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                if r.feature_field(&mut document.feature, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("Schema") => {
                        let schema = r.schema(&child)?;
                        document.schemas.push(schema);
                    }
                    Some(tag) if is_feature(tag) => {
                        let feature = r.feature(&child)?;
                        document.features.push(feature);
                    }
                    _ => r.unknown(
                        ConcreteKind::Document,
                        &child,
                        &mut document.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_document(document))
        })
    }

    fn schema(&mut self, start: &StartTag) -> Result<Schema, KmlError> {
        self.nested(start, |r| {
            let mut schema = Schema {
                object: object_data(start),
                name: start.attribute("name").map(str::to_string),
                simple_fields: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("SimpleField") => {
                        let field = r.simple_field(&child)?;
                        schema.simple_fields.push(field);
                    }
                    _ => r.unknown(ConcreteKind::Schema, &child, &mut schema.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_schema(schema))
        })
    }

    fn simple_field(&mut self, start: &StartTag) -> Result<SimpleField, KmlError> {
        self.nested(start, |r| {
            let mut field = SimpleField {
                field_type: start.attribute("type").map(str::to_string),
                name: start.attribute("name").map(str::to_string),
                display_name: None,
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("displayName") => field.display_name = Some(r.read_text(&child)?),
                    _ => r.skip_rest(&child)?,
                }
            }
            Ok(field)
        })
    }

    // ---------------------------------------------------------------------
    // Overlays
    // ---------------------------------------------------------------------

    /// Fields shared by all overlays, after the feature fields.
    fn overlay_field(&mut self, data: &mut OverlayData, child: &StartTag) -> Result<bool, KmlError> {
        if self.feature_field(&mut data.feature, child)? {
            return Ok(true);
        }
        match self.core_name(child) {
            Some("color") => data.color = self.read_color(child)?,
            Some("drawOrder") => data.draw_order = self.read_int(child)?,
            Some("Icon") => data.icon = Some(self.link(child)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn overlay_data(start: &StartTag) -> OverlayData {
        OverlayData {
            feature: Self::feature_data(start),
            ..OverlayData::default()
        }
    }

    fn ground_overlay(&mut self, start: &StartTag) -> Result<GroundOverlay, KmlError> {
        self.nested(start, |r| {
            let mut overlay = GroundOverlay {
                overlay: Self::overlay_data(start),
                ..GroundOverlay::default()
            };
            while let Some(child) = r.next_child()? {
                if r.overlay_field(&mut overlay.overlay, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("altitude") => overlay.altitude = r.read_double(&child)?,
                    Some("altitudeMode") => overlay.altitude_mode = r.read_enum(&child)?,
                    Some(tag) if is_lat_lon_box(tag) => match r.lat_lon_box(&child)? {
                        AbstractLatLonBox::LatLonBox(lat_lon_box) => {
                            overlay.lat_lon_box = Some(lat_lon_box);
                        }
                        other => warn!(
                            found = %other.kind(),
                            path = %r.path_string(),
                            "GroundOverlay takes a LatLonBox; dropped"
                        ),
                    },
                    _ => r.unknown(
                        ConcreteKind::GroundOverlay,
                        &child,
                        &mut overlay.overlay.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_ground_overlay(overlay))
        })
    }

    fn screen_overlay(&mut self, start: &StartTag) -> Result<ScreenOverlay, KmlError> {
        self.nested(start, |r| {
            let mut overlay = ScreenOverlay {
                overlay: Self::overlay_data(start),
                ..ScreenOverlay::default()
            };
            while let Some(child) = r.next_child()? {
                if r.overlay_field(&mut overlay.overlay, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("overlayXY") => overlay.overlay_xy = Some(r.vec2(&child)?),
                    Some("screenXY") => overlay.screen_xy = Some(r.vec2(&child)?),
                    Some("rotationXY") => overlay.rotation_xy = Some(r.vec2(&child)?),
                    Some("size") => overlay.size = Some(r.vec2(&child)?),
                    Some("rotation") => {
                        overlay.rotation = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    _ => r.unknown(
                        ConcreteKind::ScreenOverlay,
                        &child,
                        &mut overlay.overlay.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_screen_overlay(overlay))
        })
    }

    fn photo_overlay(&mut self, start: &StartTag) -> Result<PhotoOverlay, KmlError> {
        self.nested(start, |r| {
            let mut overlay = PhotoOverlay {
                overlay: Self::overlay_data(start),
                ..PhotoOverlay::default()
            };
            while let Some(child) = r.next_child()? {
                if r.overlay_field(&mut overlay.overlay, &child)? {
                    continue;
                }
                match r.core_name(&child) {
                    Some("rotation") => {
                        overlay.rotation = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    Some("ViewVolume") => overlay.view_volume = Some(r.view_volume(&child)?),
                    Some("ImagePyramid") => overlay.image_pyramid = Some(r.image_pyramid(&child)?),
                    Some("Point") => overlay.point = Some(r.point(&child)?),
                    Some("shape") => overlay.shape = r.read_enum(&child)?,
                    _ => r.unknown(
                        ConcreteKind::PhotoOverlay,
                        &child,
                        &mut overlay.overlay.feature.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_photo_overlay(overlay))
        })
    }

    fn view_volume(&mut self, start: &StartTag) -> Result<ViewVolume, KmlError> {
        self.nested(start, |r| {
            let mut volume = ViewVolume {
                object: object_data(start),
                ..ViewVolume::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("leftFov") => volume.left_fov = r.read_angle(&child, AngleRange::Signed180)?,
                    Some("rightFov") => {
                        volume.right_fov = r.read_angle(&child, AngleRange::Signed180)?;
                    }
                    Some("bottomFov") => {
                        volume.bottom_fov = r.read_angle(&child, AngleRange::Signed90)?;
                    }
                    Some("topFov") => volume.top_fov = r.read_angle(&child, AngleRange::Signed90)?,
                    Some("near") => volume.near = r.read_double(&child)?,
                    _ => r.unknown(ConcreteKind::ViewVolume, &child, &mut volume.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_view_volume(volume))
        })
    }

    fn image_pyramid(&mut self, start: &StartTag) -> Result<ImagePyramid, KmlError> {
        self.nested(start, |r| {
            let mut pyramid = ImagePyramid {
                object: object_data(start),
                ..ImagePyramid::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("tileSize") => pyramid.tile_size = r.read_int(&child)?,
                    Some("maxWidth") => pyramid.max_width = r.read_int(&child)?,
                    Some("maxHeight") => pyramid.max_height = r.read_int(&child)?,
                    Some("gridOrigin") => pyramid.grid_origin = r.read_enum(&child)?,
                    _ => r.unknown(
                        ConcreteKind::ImagePyramid,
                        &child,
                        &mut pyramid.object.extensions,
                    )?,
                }
            }
            r.finish(start, r.factory.create_image_pyramid(pyramid))
        })
    }

    // ---------------------------------------------------------------------
    // Metadata
    // ---------------------------------------------------------------------

    fn snippet(&mut self, start: &StartTag) -> Result<Snippet, KmlError> {
        let max_lines = self.attribute(start, "maxLines", crate::base::scalar::parse_int)?;
        let text = self.read_text(start)?;
        Ok(Snippet {
            text,
            max_lines: max_lines.unwrap_or(Snippet::default().max_lines),
        })
    }

    fn author(&mut self, start: &StartTag) -> Result<Author, KmlError> {
        self.nested(start, |r| {
            let mut author = Author::default();
            while let Some(child) = r.next_child()? {
                match r.atom_name(&child) {
                    Some("name") => author.names.push(r.read_text(&child)?),
                    Some("uri") => author.uris.push(r.read_token(&child)?),
                    Some("email") => author.emails.push(r.read_token(&child)?),
                    _ => r.skip_rest(&child)?,
                }
            }
            Ok(author)
        })
    }

    fn atom_link(&mut self, start: &StartTag) -> Result<AtomLink, KmlError> {
        let attribute = |name: &str| start.attribute(name).map(str::to_string);
        let link = AtomLink {
            href: attribute("href"),
            rel: attribute("rel"),
            media_type: attribute("type"),
            hreflang: attribute("hreflang"),
            title: attribute("title"),
            length: attribute("length"),
        };
        self.skip_rest(start)?;
        Ok(link)
    }

    fn extended_data(&mut self, start: &StartTag) -> Result<ExtendedData, KmlError> {
        self.nested(start, |r| {
            let mut extended = ExtendedData::default();
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("Data") => {
                        let data = r.data(&child)?;
                        extended.data.push(data);
                    }
                    Some("SchemaData") => {
                        let data = r.schema_data(&child)?;
                        extended.schema_data.push(data);
                    }
                    _ => r.unknown(ConcreteKind::ExtendedData, &child, &mut extended.extensions)?,
                }
            }
            r.finish(start, r.factory.create_extended_data(extended))
        })
    }

    fn data(&mut self, start: &StartTag) -> Result<Data, KmlError> {
        self.nested(start, |r| {
            let mut data = Data {
                object: object_data(start),
                name: start.attribute("name").map(str::to_string),
                ..Data::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("displayName") => data.display_name = Some(r.read_text(&child)?),
                    Some("value") => data.value = Some(r.read_text(&child)?),
                    _ => r.unknown(ConcreteKind::Data, &child, &mut data.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_data(data))
        })
    }

    fn schema_data(&mut self, start: &StartTag) -> Result<SchemaData, KmlError> {
        self.nested(start, |r| {
            let mut data = SchemaData {
                object: object_data(start),
                schema_url: start.attribute("schemaUrl").map(str::to_string),
                simple_data: Vec::new(),
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some("SimpleData") => {
                        let name = child.attribute("name").unwrap_or_default().to_string();
                        let value = r.read_text(&child)?;
                        data.simple_data.push(SimpleData { name, value });
                    }
                    _ => r.unknown(ConcreteKind::SchemaData, &child, &mut data.object.extensions)?,
                }
            }
            r.finish(start, r.factory.create_schema_data(data))
        })
    }
}
