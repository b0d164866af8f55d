//! Tree reader.
//!
//! [`KmlReader`] pulls tokens from a [`TokenSource`] and rebuilds the object
//! graph by recursive descent: one `read_<type>` routine per concrete type.
//! Each routine starts from the type's defaults, assigns the fields it
//! recognizes until its own end-tag, and hands the result to the
//! [`ModelFactory`]. Polymorphic children go through the classifier; foreign
//! children go to the [extension hook](crate::extension); unknown core children
//! are skipped with their whole subtree.
//!
//! ```text
//! read_document
//!   └─ kml ─▶ feature ─▶ placemark ─▶ geometry ─▶ point
//!                     ├▶ folder/document ─▶ feature ...
//!                     └▶ ground/screen/photo overlay
//! ```

mod feature;
mod geometry;
mod style;
mod view;

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::base::scalar::{parse_bool, parse_coordinates, parse_double, parse_int};
use crate::base::{AngleRange, Color, Coordinate, KmlDateTime, normalize};
use crate::codec::ReadOptions;
use crate::error::{DomainError, KmlError, ScalarError};
use crate::extension::{ExtensionRegistry, ExtensionSite};
use crate::model::{
    AbstractLatLonBox, AbstractView, DefaultFactory, Feature, ForeignElement, Geometry, Kml,
    KmlEnum, ModelFactory, ObjectData, StyleSelector, SubStyle, TimePrimitive,
};
use crate::schema::namespace::{self, ATOM};
use crate::schema::{Category, ConcreteKind};
use crate::tokens::{EndTag, StartTag, Token, TokenSource, skip_subtree};

/// Reads one document (or one standalone element) from a token source.
pub struct KmlReader<S> {
    source: S,
    factory: Arc<dyn ModelFactory>,
    extensions: ExtensionRegistry,
    options: ReadOptions,
    /// Elements currently being built, outermost first, as the end-tags that
    /// will close them.
    path: Vec<EndTag>,
}

impl<S: TokenSource> KmlReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            factory: Arc::new(DefaultFactory),
            extensions: ExtensionRegistry::default(),
            options: ReadOptions::default(),
            path: Vec::new(),
        }
    }

    pub fn with_factory(mut self, factory: Arc<dyn ModelFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Read a whole document. The root is normally `<kml>`; a bare feature
    /// root is accepted and wrapped.
    pub fn read_document(&mut self) -> Result<Kml, KmlError> {
        let root = self.root()?;
        let kml = match self.core_name(&root) {
            Some("kml") => self.kml(&root)?,
            Some(name) if Category::Feature.contains(name) => {
                debug!(root = name, "document without <kml> wrapper");
                Kml {
                    feature: Some(self.feature(&root)?),
                    ..Kml::default()
                }
            }
            _ => return Err(self.unexpected_root(&root, "kml")),
        };
        self.expect_eof()?;
        debug!(
            root = ?kml.feature.as_ref().map(|f| f.kind()),
            "document read"
        );
        Ok(kml)
    }

    /// Read the next element as any feature.
    pub fn read_feature(&mut self) -> Result<Feature, KmlError> {
        let root = self.root_in(Category::Feature)?;
        self.feature(&root)
    }

    pub fn read_geometry(&mut self) -> Result<Geometry, KmlError> {
        let root = self.root_in(Category::Geometry)?;
        self.geometry(&root)
    }

    pub fn read_view(&mut self) -> Result<AbstractView, KmlError> {
        let root = self.root_in(Category::View)?;
        self.view(&root)
    }

    pub fn read_time_primitive(&mut self) -> Result<TimePrimitive, KmlError> {
        let root = self.root_in(Category::TimePrimitive)?;
        self.time_primitive(&root)
    }

    pub fn read_style_selector(&mut self) -> Result<StyleSelector, KmlError> {
        let root = self.root_in(Category::StyleSelector)?;
        self.style_selector(&root)
    }

    pub fn read_sub_style(&mut self) -> Result<SubStyle, KmlError> {
        let root = self.root_in(Category::SubStyle)?;
        self.sub_style(&root)
    }

    pub fn read_lat_lon_box(&mut self) -> Result<AbstractLatLonBox, KmlError> {
        let root = self.root_in(Category::LatLonBox)?;
        self.lat_lon_box(&root)
    }

    fn kml(&mut self, start: &StartTag) -> Result<Kml, KmlError> {
        self.nested(start, |r| {
            let mut kml = Kml {
                hint: start.attribute("hint").map(str::to_string),
                ..Kml::default()
            };
            while let Some(child) = r.next_child()? {
                match r.core_name(&child) {
                    Some(name) if Category::Feature.contains(name) => {
                        let feature = r.feature(&child)?;
                        if kml.feature.is_none() {
                            kml.feature = Some(feature);
                        } else {
                            warn!(
                                tag = name,
                                "second root feature dropped; <kml> holds at most one"
                            );
                        }
                    }
                    _ => r.unknown(ConcreteKind::Kml, &child, &mut kml.extensions)?,
                }
            }
            r.finish(start, r.factory.create_kml(kml))
        })
    }

    // ---------------------------------------------------------------------
    // Token plumbing
    // ---------------------------------------------------------------------

    /// First start-tag of the input, skipping leading text.
    fn root(&mut self) -> Result<StartTag, KmlError> {
        loop {
            match self.next_token()? {
                Token::Start(tag) => return Ok(tag),
                Token::Text(_) => {}
                Token::End(tag) => {
                    return Err(self.structure(format!("unexpected </{}>", tag.local_name)));
                }
                Token::Eof => return Err(self.structure("empty document")),
            }
        }
    }

    fn root_in(&mut self, category: Category) -> Result<StartTag, KmlError> {
        let root = self.root()?;
        match self.core_name(&root) {
            Some(name) if category.contains(name) => Ok(root),
            _ => Err(self.unexpected_root(&root, category.abstract_name())),
        }
    }

    fn expect_eof(&mut self) -> Result<(), KmlError> {
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(()),
                Token::Text(_) => {}
                Token::Start(tag) => {
                    return Err(self.structure(format!(
                        "content after the root element: <{}>",
                        tag.local_name
                    )));
                }
                Token::End(tag) => {
                    return Err(self.structure(format!("unexpected </{}>", tag.local_name)));
                }
            }
        }
    }

    /// Next token from the source, with structural errors placed under the
    /// current path.
    fn next_token(&mut self) -> Result<Token, KmlError> {
        self.source.next_token().map_err(|e| self.within(e))
    }

    /// Next child element of the element being read, or `None` once its
    /// end-tag is consumed. Text between child elements is ignored.
    fn next_child(&mut self) -> Result<Option<StartTag>, KmlError> {
        loop {
            match self.next_token()? {
                Token::Start(tag) => return Ok(Some(tag)),
                Token::End(end) => {
                    return match self.path.last() {
                        Some(open) if *open != end => Err(self.mismatched(open, &end)),
                        _ => Ok(None),
                    };
                }
                Token::Text(_) => {}
                Token::Eof => return Err(self.structure("unexpected end of document")),
            }
        }
    }

    /// Run `read` with `start` pushed on the nesting path.
    fn nested<T>(
        &mut self,
        start: &StartTag,
        read: impl FnOnce(&mut Self) -> Result<T, KmlError>,
    ) -> Result<T, KmlError> {
        trace!(tag = %start.local_name, depth = self.path.len(), "reading element");
        self.path.push(EndTag::of(start));
        let result = read(self);
        self.path.pop();
        result
    }

    fn is_core(&self, namespace: Option<&str>) -> bool {
        namespace::is_core(
            namespace,
            self.options.accept_legacy_namespaces,
            self.options.accept_unqualified,
        )
    }

    /// Local name of `tag` if it belongs to the core schema.
    fn core_name<'t>(&self, tag: &'t StartTag) -> Option<&'t str> {
        self.is_core(tag.namespace.as_deref())
            .then_some(tag.local_name.as_str())
    }

    /// Local name of `tag` if it belongs to the Atom namespace.
    fn atom_name<'t>(&self, tag: &'t StartTag) -> Option<&'t str> {
        (tag.namespace.as_deref() == Some(ATOM)).then_some(tag.local_name.as_str())
    }

    /// Handle a child no field of `owner` claimed. Foreign elements go to the
    /// first willing extension handler; everything else is skipped.
    fn unknown(
        &mut self,
        owner: ConcreteKind,
        child: &StartTag,
        extensions: &mut Vec<ForeignElement>,
    ) -> Result<(), KmlError> {
        let namespace = child.namespace.as_deref();
        if let Some(ns) = namespace {
            if ns != ATOM && !self.is_core(namespace) {
                let site = ExtensionSite {
                    owner,
                    namespace: ns,
                    local_name: &child.local_name,
                };
                if let Some(handler) = self.extensions.find(&site, None) {
                    let element = handler
                        .read(&mut self.source, child)
                        .map_err(|e| self.within(e))?;
                    extensions.push(element);
                    return Ok(());
                }
            }
        }
        trace!(
            tag = %child.local_name,
            namespace = namespace.unwrap_or(""),
            path = %self.path_string(),
            "skipping unrecognized element"
        );
        self.skip_rest(child)
    }

    /// Consume the rest of an element whose content is not used.
    fn skip_rest(&mut self, start: &StartTag) -> Result<(), KmlError> {
        skip_subtree(&mut self.source, start).map_err(|e| self.within(e))
    }

    // ---------------------------------------------------------------------
    // Scalar fields
    // ---------------------------------------------------------------------

    /// Character content of a simple field, through its end-tag. Nested
    /// elements inside a simple field are skipped.
    fn read_text(&mut self, field: &StartTag) -> Result<String, KmlError> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End(end) if end.closes(field) => return Ok(text),
                Token::End(end) => {
                    return Err(KmlError::structure(
                        format!("expected </{}>, found </{}>", field.local_name, end.local_name),
                        self.field_path(field),
                    ));
                }
                Token::Start(nested) => {
                    trace!(field = %field.local_name, tag = %nested.local_name, "markup inside text field skipped");
                    self.skip_rest(&nested)?;
                }
                Token::Eof => {
                    return Err(self.structure(format!(
                        "unexpected end of document inside <{}>",
                        field.local_name
                    )));
                }
            }
        }
    }

    /// Text content with surrounding whitespace removed, for identifiers and
    /// URLs.
    fn read_token(&mut self, field: &StartTag) -> Result<String, KmlError> {
        Ok(self.read_text(field)?.trim().to_string())
    }

    fn read_double(&mut self, field: &StartTag) -> Result<f64, KmlError> {
        let text = self.read_text(field)?;
        parse_double(&text).map_err(|e| self.scalar(field, e))
    }

    fn read_angle(&mut self, field: &StartTag, range: AngleRange) -> Result<f64, KmlError> {
        Ok(normalize(self.read_double(field)?, range))
    }

    fn read_int(&mut self, field: &StartTag) -> Result<i32, KmlError> {
        let text = self.read_text(field)?;
        parse_int(&text).map_err(|e| self.scalar(field, e))
    }

    fn read_bool(&mut self, field: &StartTag) -> Result<bool, KmlError> {
        let text = self.read_text(field)?;
        parse_bool(&text).map_err(|e| self.scalar(field, e))
    }

    fn read_color(&mut self, field: &StartTag) -> Result<Color, KmlError> {
        let text = self.read_text(field)?;
        Color::parse(&text).map_err(|e| self.scalar(field, e))
    }

    fn read_enum<E: KmlEnum>(&mut self, field: &StartTag) -> Result<E, KmlError> {
        let text = self.read_text(field)?;
        E::from_kml(&text).ok_or_else(|| self.scalar(field, ScalarError::new(E::NAME, text)))
    }

    fn read_coordinates(&mut self, field: &StartTag) -> Result<Vec<Coordinate>, KmlError> {
        let text = self.read_text(field)?;
        parse_coordinates(&text).map_err(|e| self.scalar(field, e))
    }

    fn read_datetime(&mut self, field: &StartTag) -> Result<KmlDateTime, KmlError> {
        let text = self.read_text(field)?;
        KmlDateTime::parse(&text).map_err(|e| self.scalar(field, e))
    }

    /// Parse an optional attribute of `tag`.
    fn attribute<T>(
        &self,
        tag: &StartTag,
        name: &str,
        parse: impl FnOnce(&str) -> Result<T, ScalarError>,
    ) -> Result<Option<T>, KmlError> {
        match tag.attribute(name) {
            Some(text) => parse(text).map(Some).map_err(|e| KmlError::Scalar {
                tag: format!("{}@{name}", tag.local_name),
                namespace: tag.namespace.clone(),
                value: e.value,
                expected: e.expected,
                path: self.path_string(),
            }),
            None => Ok(None),
        }
    }

    // ---------------------------------------------------------------------
    // Errors
    // ---------------------------------------------------------------------

    fn path_string(&self) -> String {
        let names: Vec<&str> = self.path.iter().map(|tag| tag.local_name.as_str()).collect();
        names.join("/")
    }

    /// Current path extended by a simple field.
    fn field_path(&self, field: &StartTag) -> String {
        let mut path = self.path_string();
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&field.local_name);
        path
    }

    fn structure(&self, message: impl Into<String>) -> KmlError {
        KmlError::structure(message, self.path_string())
    }

    fn mismatched(&self, open: &EndTag, found: &EndTag) -> KmlError {
        self.structure(format!(
            "expected </{}>, found </{}>",
            open.local_name, found.local_name
        ))
    }

    /// Re-root a structural error raised below the reader (token source,
    /// subtree skipping, extension handlers) at the current path.
    fn within(&self, error: KmlError) -> KmlError {
        match error {
            KmlError::Structure { message, path } => {
                let mut full = self.path_string();
                if !full.is_empty() && !path.is_empty() {
                    full.push('/');
                }
                full.push_str(&path);
                KmlError::Structure {
                    message,
                    path: full,
                }
            }
            other => other,
        }
    }

    fn unexpected_root(&self, root: &StartTag, expected: &str) -> KmlError {
        KmlError::structure(
            format!("expected <{expected}>, found <{}>", root.local_name),
            root.local_name.as_str(),
        )
    }

    fn scalar(&self, field: &StartTag, error: ScalarError) -> KmlError {
        KmlError::Scalar {
            tag: field.local_name.to_string(),
            namespace: field.namespace.clone(),
            value: error.value,
            expected: error.expected,
            path: self.field_path(field),
        }
    }

    /// Attach tag and path to a factory verdict.
    fn finish<T>(&self, start: &StartTag, verdict: Result<T, DomainError>) -> Result<T, KmlError> {
        verdict.map_err(|e| KmlError::Domain {
            tag: start.local_name.to_string(),
            message: e.0,
            path: self.path_string(),
        })
    }
}

/// `id` and `targetId` attributes of an object element.
fn object_data(start: &StartTag) -> ObjectData {
    ObjectData {
        id: start.attribute("id").map(str::to_string),
        target_id: start.attribute("targetId").map(str::to_string),
        extensions: Vec::new(),
    }
}
