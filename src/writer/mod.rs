//! Tree writer.
//!
//! [`KmlWriter`] walks the object graph and emits tokens into a
//! [`TokenSink`]. Every concrete type has one `write_<type>` routine with a
//! fixed field order; abstract-typed fields dispatch on the runtime variant.
//! Fields equal to their default are left out, angles are normalized before
//! that comparison, and captured foreign elements are written last inside
//! their owner.

mod feature;
mod geometry;
mod style;
mod view;

use tracing::warn;

use crate::base::scalar::{format_bool, format_coordinates, format_double};
use crate::base::{AngleRange, Color, Coordinate, normalize};
use crate::codec::WriteOptions;
use crate::error::KmlError;
use crate::extension::{ExtensionRegistry, ExtensionSite};
use crate::model::{ForeignElement, Kml, KmlEnum, ObjectData};
use crate::schema::ConcreteKind;
use crate::schema::namespace::{ATOM, ATOM_PREFIX, KML};
use crate::tokens::TokenSink;

/// Writes documents or standalone elements into a token sink.
pub struct KmlWriter<S> {
    sink: S,
    extensions: ExtensionRegistry,
    options: WriteOptions,
    /// Open elements written through [`open`](Self::open); zero means the
    /// next one is outermost.
    depth: usize,
}

impl<S: TokenSink> KmlWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            extensions: ExtensionRegistry::default(),
            options: WriteOptions::default(),
            depth: 0,
        }
    }

    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn write_document(&mut self, kml: &Kml) -> Result<(), KmlError> {
        let hint = kml.hint.as_deref().map(|hint| ("hint", hint));
        self.open(ConcreteKind::Kml.tag_name(), None, hint.as_slice())?;
        if let Some(feature) = &kml.feature {
            self.feature(feature)?;
        }
        self.write_extensions(ConcreteKind::Kml, &kml.extensions)?;
        self.close(ConcreteKind::Kml.tag_name())
    }

    pub fn write_feature(&mut self, feature: &crate::model::Feature) -> Result<(), KmlError> {
        self.feature(feature)
    }

    pub fn write_geometry(&mut self, geometry: &crate::model::Geometry) -> Result<(), KmlError> {
        self.geometry(geometry)
    }

    pub fn write_view(&mut self, view: &crate::model::AbstractView) -> Result<(), KmlError> {
        self.view(view)
    }

    pub fn write_time_primitive(
        &mut self,
        time_primitive: &crate::model::TimePrimitive,
    ) -> Result<(), KmlError> {
        self.time_primitive(time_primitive)
    }

    pub fn write_style_selector(
        &mut self,
        selector: &crate::model::StyleSelector,
    ) -> Result<(), KmlError> {
        self.style_selector(selector)
    }

    pub fn write_sub_style(&mut self, sub_style: &crate::model::SubStyle) -> Result<(), KmlError> {
        self.sub_style(sub_style)
    }

    pub fn write_lat_lon_box(
        &mut self,
        lat_lon_box: &crate::model::AbstractLatLonBox,
    ) -> Result<(), KmlError> {
        self.lat_lon_box(lat_lon_box)
    }

    // ---------------------------------------------------------------------
    // Elements
    // ---------------------------------------------------------------------

    /// Start an element. The outermost one also declares the namespaces.
    fn open(
        &mut self,
        tag: &str,
        object: Option<&ObjectData>,
        extra: &[(&str, &str)],
    ) -> Result<(), KmlError> {
        let mut owned: Vec<(String, String)> = Vec::new();
        if self.depth == 0 && self.options.declare_namespaces {
            owned.push(("xmlns".to_string(), KML.to_string()));
            owned.push((format!("xmlns:{ATOM_PREFIX}"), ATOM.to_string()));
            for (prefix, namespace) in self.extensions.declarations() {
                owned.push((format!("xmlns:{prefix}"), namespace.to_string()));
            }
        }
        let mut attributes: Vec<(&str, &str)> = owned
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if let Some(object) = object {
            if let Some(id) = object.id.as_deref() {
                attributes.push(("id", id));
            }
            if let Some(target_id) = object.target_id.as_deref() {
                attributes.push(("targetId", target_id));
            }
        }
        attributes.extend_from_slice(extra);
        self.depth += 1;
        self.sink.start_tag(tag, &attributes)
    }

    fn close(&mut self, tag: &str) -> Result<(), KmlError> {
        self.depth = self.depth.saturating_sub(1);
        self.sink.end_tag(tag)
    }

    /// Write an object element of `kind`: attributes, `body`, then captured
    /// extensions.
    fn element(
        &mut self,
        kind: ConcreteKind,
        object: &ObjectData,
        body: impl FnOnce(&mut Self) -> Result<(), KmlError>,
    ) -> Result<(), KmlError> {
        self.element_with(kind, object, &[], body)
    }

    fn element_with(
        &mut self,
        kind: ConcreteKind,
        object: &ObjectData,
        extra: &[(&str, &str)],
        body: impl FnOnce(&mut Self) -> Result<(), KmlError>,
    ) -> Result<(), KmlError> {
        let tag = kind.tag_name();
        self.open(tag, Some(object), extra)?;
        body(self)?;
        self.write_extensions(kind, &object.extensions)?;
        self.close(tag)
    }

    /// A non-object element such as `outerBoundaryIs`.
    fn wrapper(
        &mut self,
        tag: &str,
        body: impl FnOnce(&mut Self) -> Result<(), KmlError>,
    ) -> Result<(), KmlError> {
        self.open(tag, None, &[])?;
        body(self)?;
        self.close(tag)
    }

    fn write_extensions(
        &mut self,
        owner: ConcreteKind,
        extensions: &[ForeignElement],
    ) -> Result<(), KmlError> {
        for element in extensions {
            let site = ExtensionSite {
                owner,
                namespace: element.namespace.as_deref().unwrap_or_default(),
                local_name: &element.local_name,
            };
            match self.extensions.find(&site, Some(element)) {
                Some(handler) if self.options.declare_namespaces => {
                    handler.write(&mut self.sink, element)?
                }
                Some(handler) => {
                    let mut sink = DeclaringSink {
                        inner: &mut self.sink,
                        binding: (format!("xmlns:{}", handler.prefix()), handler.namespace()),
                        depth: 0,
                    };
                    handler.write(&mut sink, element)?
                }
                None => warn!(
                    owner = %owner,
                    element = %element.local_name,
                    namespace = site.namespace,
                    "no extension handler can write element; dropped"
                ),
            }
        }
        Ok(())
    }

    /// `xmlns:<prefix>` to put on a prefixed element when the outermost
    /// element does not declare the namespaces.
    fn local_binding(&self, prefix: &str) -> Option<String> {
        (!self.options.declare_namespaces).then(|| format!("xmlns:{prefix}"))
    }

    // ---------------------------------------------------------------------
    // Simple fields
    // ---------------------------------------------------------------------

    fn text_field(&mut self, tag: &str, text: &str) -> Result<(), KmlError> {
        self.sink.start_tag(tag, &[])?;
        if !text.is_empty() {
            self.sink.text(text)?;
        }
        self.sink.end_tag(tag)
    }

    fn optional_text(&mut self, tag: &str, text: Option<&str>) -> Result<(), KmlError> {
        match text {
            Some(text) => self.text_field(tag, text),
            None => Ok(()),
        }
    }

    fn double_field(&mut self, tag: &str, value: f64, default: f64) -> Result<(), KmlError> {
        if value == default {
            return Ok(());
        }
        self.text_field(tag, &format_double(value))
    }

    fn angle_field(
        &mut self,
        tag: &str,
        value: f64,
        range: AngleRange,
        default: f64,
    ) -> Result<(), KmlError> {
        self.double_field(tag, normalize(value, range), default)
    }

    fn int_field(&mut self, tag: &str, value: i32, default: i32) -> Result<(), KmlError> {
        if value == default {
            return Ok(());
        }
        self.text_field(tag, &value.to_string())
    }

    fn bool_field(&mut self, tag: &str, value: bool, default: bool) -> Result<(), KmlError> {
        if value == default {
            return Ok(());
        }
        self.text_field(tag, format_bool(value))
    }

    fn enum_field<E: KmlEnum>(&mut self, tag: &str, value: E, default: E) -> Result<(), KmlError> {
        if value == default {
            return Ok(());
        }
        self.text_field(tag, value.as_kml())
    }

    fn color_field(&mut self, tag: &str, value: Color, default: Color) -> Result<(), KmlError> {
        if value == default {
            return Ok(());
        }
        self.text_field(tag, &value.to_string())
    }

    fn coordinates_field(&mut self, coordinates: &[Coordinate]) -> Result<(), KmlError> {
        if coordinates.is_empty() {
            return Ok(());
        }
        self.text_field("coordinates", &format_coordinates(coordinates))
    }
}

/// Passes tokens through, adding one namespace binding to every outermost
/// start-tag.
struct DeclaringSink<'a, S> {
    inner: &'a mut S,
    binding: (String, &'a str),
    depth: usize,
}

impl<S: TokenSink> TokenSink for DeclaringSink<'_, S> {
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError> {
        self.depth += 1;
        if self.depth > 1 {
            return self.inner.start_tag(name, attributes);
        }
        let mut declared = Vec::with_capacity(attributes.len() + 1);
        declared.push((self.binding.0.as_str(), self.binding.1));
        declared.extend_from_slice(attributes);
        self.inner.start_tag(name, &declared)
    }

    fn text(&mut self, text: &str) -> Result<(), KmlError> {
        self.inner.text(text)
    }

    fn end_tag(&mut self, name: &str) -> Result<(), KmlError> {
        self.depth = self.depth.saturating_sub(1);
        self.inner.end_tag(name)
    }
}
