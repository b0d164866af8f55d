//! Features, containers, overlays and feature metadata.

use super::KmlWriter;
use crate::base::AngleRange;
use crate::error::KmlError;
use crate::model::{
    AtomLink, Author, Container, Data, Document, ExtendedData, Feature, FeatureData, Folder,
    GroundOverlay, ImagePyramid, NetworkLink, Overlay, OverlayData, PhotoOverlay, Placemark,
    Schema, SchemaData, ScreenOverlay, SimpleField, Snippet, ViewVolume,
};
use crate::schema::ConcreteKind;
use crate::schema::defaults::*;
use crate::schema::namespace::{ATOM, ATOM_PREFIX};
use crate::tokens::{TokenSink, qualified_name};

impl<S: TokenSink> KmlWriter<S> {
    pub(super) fn feature(&mut self, feature: &Feature) -> Result<(), KmlError> {
        match feature {
            Feature::Placemark(placemark) => self.placemark(placemark),
            Feature::NetworkLink(link) => self.network_link(link),
            Feature::Container(Container::Folder(folder)) => self.folder(folder),
            Feature::Container(Container::Document(document)) => self.document(document),
            Feature::Overlay(Overlay::Ground(overlay)) => self.ground_overlay(overlay),
            Feature::Overlay(Overlay::Screen(overlay)) => self.screen_overlay(overlay),
            Feature::Overlay(Overlay::Photo(overlay)) => self.photo_overlay(overlay),
        }
    }

    /// Fields shared by all features, in schema order.
    fn feature_fields(&mut self, data: &FeatureData) -> Result<(), KmlError> {
        self.optional_text("name", data.name.as_deref())?;
        self.bool_field("visibility", data.visibility, DEF_VISIBILITY)?;
        self.bool_field("open", data.open, DEF_OPEN)?;
        if let Some(author) = &data.author {
            self.author(author)?;
        }
        if let Some(link) = &data.link {
            self.atom_link(link)?;
        }
        self.optional_text("address", data.address.as_deref())?;
        self.optional_text("phoneNumber", data.phone_number.as_deref())?;
        if let Some(snippet) = &data.snippet {
            self.snippet(snippet)?;
        }
        self.optional_text("description", data.description.as_deref())?;
        if let Some(view) = &data.view {
            self.view(view)?;
        }
        if let Some(time_primitive) = &data.time_primitive {
            self.time_primitive(time_primitive)?;
        }
        self.optional_text("styleUrl", data.style_url.as_deref())?;
        for selector in &data.style_selectors {
            self.style_selector(selector)?;
        }
        if let Some(region) = &data.region {
            self.region(region)?;
        }
        if let Some(extended_data) = &data.extended_data {
            self.extended_data(extended_data)?;
        }
        Ok(())
    }

    fn placemark(&mut self, placemark: &Placemark) -> Result<(), KmlError> {
        self.element(ConcreteKind::Placemark, &placemark.feature.object, |w| {
            w.feature_fields(&placemark.feature)?;
            if let Some(geometry) = &placemark.geometry {
                w.geometry(geometry)?;
            }
            Ok(())
        })
    }

    fn network_link(&mut self, link: &NetworkLink) -> Result<(), KmlError> {
        self.element(ConcreteKind::NetworkLink, &link.feature.object, |w| {
            w.feature_fields(&link.feature)?;
            w.bool_field("refreshVisibility", link.refresh_visibility, DEF_REFRESH_VISIBILITY)?;
            w.bool_field("flyToView", link.fly_to_view, DEF_FLY_TO_VIEW)?;
            if let Some(target) = &link.link {
                w.link(ConcreteKind::Link, target)?;
            }
            Ok(())
        })
    }

    fn folder(&mut self, folder: &Folder) -> Result<(), KmlError> {
        self.element(ConcreteKind::Folder, &folder.feature.object, |w| {
            w.feature_fields(&folder.feature)?;
            for feature in &folder.features {
                w.feature(feature)?;
            }
            Ok(())
        })
    }

    fn document(&mut self, document: &Document) -> Result<(), KmlError> {
        self.element(ConcreteKind::Document, &document.feature.object, |w| {
            w.feature_fields(&document.feature)?;
            for schema in &document.schemas {
                w.schema(schema)?;
            }
            for feature in &document.features {
                w.feature(feature)?;
            }
            Ok(())
        })
    }

    fn schema(&mut self, schema: &Schema) -> Result<(), KmlError> {
        let name = schema.name.as_deref().map(|name| ("name", name));
        self.element_with(ConcreteKind::Schema, &schema.object, name.as_slice(), |w| {
            for field in &schema.simple_fields {
                w.simple_field(field)?;
            }
            Ok(())
        })
    }

    fn simple_field(&mut self, field: &SimpleField) -> Result<(), KmlError> {
        let mut attributes = Vec::new();
        if let Some(field_type) = field.field_type.as_deref() {
            attributes.push(("type", field_type));
        }
        if let Some(name) = field.name.as_deref() {
            attributes.push(("name", name));
        }
        self.open("SimpleField", None, &attributes)?;
        self.optional_text("displayName", field.display_name.as_deref())?;
        self.close("SimpleField")
    }

    // ---------------------------------------------------------------------
    // Overlays
    // ---------------------------------------------------------------------

    fn overlay_fields(&mut self, data: &OverlayData) -> Result<(), KmlError> {
        self.feature_fields(&data.feature)?;
        self.color_field("color", data.color, DEF_COLOR)?;
        self.int_field("drawOrder", data.draw_order, DEF_DRAW_ORDER)?;
        if let Some(icon) = &data.icon {
            self.link(ConcreteKind::Icon, icon)?;
        }
        Ok(())
    }

    fn ground_overlay(&mut self, overlay: &GroundOverlay) -> Result<(), KmlError> {
        self.element(ConcreteKind::GroundOverlay, &overlay.overlay.feature.object, |w| {
            w.overlay_fields(&overlay.overlay)?;
            w.double_field("altitude", overlay.altitude, DEF_ALTITUDE)?;
            w.enum_field("altitudeMode", overlay.altitude_mode, DEF_ALTITUDE_MODE)?;
            if let Some(lat_lon_box) = &overlay.lat_lon_box {
                w.plain_lat_lon_box(lat_lon_box)?;
            }
            Ok(())
        })
    }

    fn screen_overlay(&mut self, overlay: &ScreenOverlay) -> Result<(), KmlError> {
        self.element(ConcreteKind::ScreenOverlay, &overlay.overlay.feature.object, |w| {
            w.overlay_fields(&overlay.overlay)?;
            let vectors = [
                ("overlayXY", &overlay.overlay_xy),
                ("screenXY", &overlay.screen_xy),
                ("rotationXY", &overlay.rotation_xy),
                ("size", &overlay.size),
            ];
            for (tag, vec2) in vectors {
                if let Some(vec2) = vec2 {
                    w.vec2(tag, vec2)?;
                }
            }
            w.angle_field("rotation", overlay.rotation, AngleRange::Signed180, DEF_ROTATION)
        })
    }

    fn photo_overlay(&mut self, overlay: &PhotoOverlay) -> Result<(), KmlError> {
        self.element(ConcreteKind::PhotoOverlay, &overlay.overlay.feature.object, |w| {
            w.overlay_fields(&overlay.overlay)?;
            w.angle_field("rotation", overlay.rotation, AngleRange::Signed180, DEF_ROTATION)?;
            if let Some(volume) = &overlay.view_volume {
                w.view_volume(volume)?;
            }
            if let Some(pyramid) = &overlay.image_pyramid {
                w.image_pyramid(pyramid)?;
            }
            if let Some(point) = &overlay.point {
                w.point(point)?;
            }
            w.enum_field("shape", overlay.shape, DEF_SHAPE)
        })
    }

    fn view_volume(&mut self, volume: &ViewVolume) -> Result<(), KmlError> {
        self.element(ConcreteKind::ViewVolume, &volume.object, |w| {
            w.angle_field("leftFov", volume.left_fov, AngleRange::Signed180, DEF_FOV)?;
            w.angle_field("rightFov", volume.right_fov, AngleRange::Signed180, DEF_FOV)?;
            w.angle_field("bottomFov", volume.bottom_fov, AngleRange::Signed90, DEF_FOV)?;
            w.angle_field("topFov", volume.top_fov, AngleRange::Signed90, DEF_FOV)?;
            w.double_field("near", volume.near, DEF_NEAR)
        })
    }

    fn image_pyramid(&mut self, pyramid: &ImagePyramid) -> Result<(), KmlError> {
        self.element(ConcreteKind::ImagePyramid, &pyramid.object, |w| {
            w.int_field("tileSize", pyramid.tile_size, DEF_TILE_SIZE)?;
            w.int_field("maxWidth", pyramid.max_width, DEF_MAX_WIDTH)?;
            w.int_field("maxHeight", pyramid.max_height, DEF_MAX_HEIGHT)?;
            w.enum_field("gridOrigin", pyramid.grid_origin, DEF_GRID_ORIGIN)
        })
    }

    // ---------------------------------------------------------------------
    // Metadata
    // ---------------------------------------------------------------------

    fn snippet(&mut self, snippet: &Snippet) -> Result<(), KmlError> {
        let max_lines = snippet.max_lines.to_string();
        let mut attributes = Vec::new();
        if snippet.max_lines != DEF_SNIPPET_MAX_LINES {
            attributes.push(("maxLines", max_lines.as_str()));
        }
        self.sink.start_tag("Snippet", &attributes)?;
        if !snippet.text.is_empty() {
            self.sink.text(&snippet.text)?;
        }
        self.sink.end_tag("Snippet")
    }

    fn author(&mut self, author: &Author) -> Result<(), KmlError> {
        let tag = qualified_name(Some(ATOM_PREFIX), "author");
        let binding = self.local_binding(ATOM_PREFIX);
        let declaration: Vec<(&str, &str)> =
            binding.iter().map(|key| (key.as_str(), ATOM)).collect();
        self.open(&tag, None, &declaration)?;
        let fields = [("name", &author.names), ("uri", &author.uris), ("email", &author.emails)];
        for (local, values) in fields {
            let field = qualified_name(Some(ATOM_PREFIX), local);
            for value in values {
                self.text_field(&field, value)?;
            }
        }
        self.close(&tag)
    }

    fn atom_link(&mut self, link: &AtomLink) -> Result<(), KmlError> {
        let tag = qualified_name(Some(ATOM_PREFIX), "link");
        let binding = self.local_binding(ATOM_PREFIX);
        let mut attributes: Vec<(&str, &str)> =
            binding.iter().map(|key| (key.as_str(), ATOM)).collect();
        attributes.extend(
            [
                ("href", &link.href),
                ("rel", &link.rel),
                ("type", &link.media_type),
                ("hreflang", &link.hreflang),
                ("title", &link.title),
                ("length", &link.length),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (key, value))),
        );
        self.sink.start_tag(&tag, &attributes)?;
        self.sink.end_tag(&tag)
    }

    fn extended_data(&mut self, extended: &ExtendedData) -> Result<(), KmlError> {
        let tag = ConcreteKind::ExtendedData.tag_name();
        self.open(tag, None, &[])?;
        for data in &extended.data {
            self.data(data)?;
        }
        for data in &extended.schema_data {
            self.schema_data(data)?;
        }
        self.write_extensions(ConcreteKind::ExtendedData, &extended.extensions)?;
        self.close(tag)
    }

    fn data(&mut self, data: &Data) -> Result<(), KmlError> {
        let name = data.name.as_deref().map(|name| ("name", name));
        self.element_with(ConcreteKind::Data, &data.object, name.as_slice(), |w| {
            w.optional_text("displayName", data.display_name.as_deref())?;
            w.optional_text("value", data.value.as_deref())
        })
    }

    fn schema_data(&mut self, data: &SchemaData) -> Result<(), KmlError> {
        let url = data.schema_url.as_deref().map(|url| ("schemaUrl", url));
        self.element_with(ConcreteKind::SchemaData, &data.object, url.as_slice(), |w| {
            for simple in &data.simple_data {
                w.sink.start_tag("SimpleData", &[("name", simple.name.as_str())])?;
                if !simple.value.is_empty() {
                    w.sink.text(&simple.value)?;
                }
                w.sink.end_tag("SimpleData")?;
            }
            Ok(())
        })
    }
}
