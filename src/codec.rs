//! Byte-level entry point and options.
//!
//! [`KmlCodec`] bundles the reader and writer configuration: which namespaces
//! count as core on input, how output is laid out, which extension handlers
//! run and which factory builds the objects.
//!
//! ```ignore
//! use keyhole::{KmlCodec, ExtensionRegistry};
//!
//! let codec = KmlCodec::new().with_extensions(ExtensionRegistry::with_google_extensions());
//! let kml = codec.read(&std::fs::read("tour.kml")?)?;
//! std::fs::write("copy.kml", codec.write(&kml)?)?;
//! ```

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::KmlError;
use crate::extension::ExtensionRegistry;
use crate::model::{DefaultFactory, Kml, ModelFactory};
use crate::reader::KmlReader;
use crate::tokens::{XmlTokenSink, XmlTokenSource};
use crate::writer::KmlWriter;

/// Input options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    /// Read the pre-OGC `http://earth.google.com/kml/*` namespaces as core.
    pub accept_legacy_namespaces: bool,
    /// Read elements without a namespace as core.
    pub accept_unqualified: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            accept_legacy_namespaces: true,
            accept_unqualified: true,
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` writes a single line.
    pub indent: Option<usize>,
    /// Start the output with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
    /// Declare the core, Atom and extension namespaces on the outermost
    /// element. When false, core elements are unqualified and prefixed
    /// elements carry their own binding.
    pub declare_namespaces: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            declare_namespaces: true,
        }
    }
}

impl WriteOptions {
    /// Single line, no declaration, no namespace attributes on the root.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            declare_namespaces: false,
        }
    }
}

/// Reads and writes whole KML documents.
#[derive(Clone)]
pub struct KmlCodec {
    pub read_options: ReadOptions,
    pub write_options: WriteOptions,
    pub extensions: ExtensionRegistry,
    pub factory: Arc<dyn ModelFactory>,
}

impl Default for KmlCodec {
    fn default() -> Self {
        Self {
            read_options: ReadOptions::default(),
            write_options: WriteOptions::default(),
            extensions: ExtensionRegistry::default(),
            factory: Arc::new(DefaultFactory),
        }
    }
}

impl std::fmt::Debug for KmlCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KmlCodec")
            .field("read_options", &self.read_options)
            .field("write_options", &self.write_options)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl KmlCodec {
    pub const NAME: &'static str = "KML";
    pub const EXTENSIONS: &'static [&'static str] = &["kml"];
    pub const MIME_TYPE: &'static str = "application/vnd.google-earth.kml+xml";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_factory(mut self, factory: impl ModelFactory + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    pub fn with_read_options(mut self, options: ReadOptions) -> Self {
        self.read_options = options;
        self
    }

    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.write_options = options;
        self
    }

    /// A reader over `input` configured like this codec.
    pub fn reader<'a>(&self, input: &'a [u8]) -> KmlReader<XmlTokenSource<&'a [u8]>> {
        KmlReader::new(XmlTokenSource::new(input))
            .with_factory(Arc::clone(&self.factory))
            .with_extensions(self.extensions.clone())
            .with_options(self.read_options)
    }

    /// A writer over `output` configured like this codec. The XML declaration
    /// is not written; [`write`](Self::write) takes care of it.
    pub fn writer<W: std::io::Write>(&self, output: W) -> KmlWriter<XmlTokenSink<W>> {
        KmlWriter::new(XmlTokenSink::new(output, self.write_options.indent))
            .with_extensions(self.extensions.clone())
            .with_options(self.write_options)
    }

    pub fn read(&self, input: &[u8]) -> Result<Kml, KmlError> {
        debug!(bytes = input.len(), "reading KML document");
        self.reader(input).read_document()
    }

    pub fn read_str(&self, input: &str) -> Result<Kml, KmlError> {
        self.read(input.as_bytes())
    }

    pub fn write(&self, kml: &Kml) -> Result<Vec<u8>, KmlError> {
        let mut sink = XmlTokenSink::new(Vec::new(), self.write_options.indent);
        if self.write_options.xml_declaration {
            sink.write_declaration()?;
        }
        let mut writer = KmlWriter::new(sink)
            .with_extensions(self.extensions.clone())
            .with_options(self.write_options);
        writer.write_document(kml)?;
        let mut output = writer.into_sink().into_inner()?;
        if self.write_options.indent.is_some() {
            output.push(b'\n');
        }
        debug!(bytes = output.len(), "KML document written");
        Ok(output)
    }

    pub fn write_string(&self, kml: &Kml) -> Result<String, KmlError> {
        let bytes = self.write(kml)?;
        String::from_utf8(bytes).map_err(|e| KmlError::xml(format!("Invalid UTF-8 output: {e}")))
    }

    /// Check that `input` reads cleanly, discarding the result.
    pub fn validate(&self, input: &[u8]) -> Result<(), KmlError> {
        self.read(input).map(|_| ())
    }
}
