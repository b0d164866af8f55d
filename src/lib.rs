//! # keyhole-base
//!
//! Streaming KML 2.2 reader and writer over a typed object model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codec     → KmlCodec: bytes ↔ Kml, read/write options
//!   ↓
//! reader    → recursive descent, one routine per concrete type
//! writer    → default suppression, runtime-type dispatch
//!   ↓
//! extension → hook for foreign-namespace elements (gx:*, ...)
//! tokens    → token stream abstraction over quick-xml
//!   ↓
//! model     → Feature / Geometry / Style / ... data holders, ModelFactory
//! schema    → namespaces, DEF_* defaults, tag classifier
//!   ↓
//! base      → angles, colors, coordinates, date/times
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! let kml = keyhole::from_str(r#"<kml xmlns="http://www.opengis.net/kml/2.2">
//!   <Placemark><name>Pin</name><Point><coordinates>1,2</coordinates></Point></Placemark>
//! </kml>"#)?;
//! assert_eq!(kml.feature.as_ref().and_then(|f| f.name()), Some("Pin"));
//! let text = keyhole::to_string(&kml)?;
//! ```

/// Scalar value types: angles, colors, coordinates, date/times
pub mod base;

/// Byte-level entry point and read/write options
pub mod codec;

/// Error types
pub mod error;

/// Extension hook for foreign-namespace elements
pub mod extension;

/// The object graph and the model factory
pub mod model;

/// Tree reader
pub mod reader;

/// Namespaces, defaults and the tag classifier
pub mod schema;

/// Token stream abstraction and the quick-xml adapters
pub mod tokens;

/// Tree writer
pub mod writer;

pub use codec::{KmlCodec, ReadOptions, WriteOptions};
pub use error::{DomainError, KmlError, ScalarError};
pub use extension::{CaptureHandler, ExtensionHandler, ExtensionRegistry, ExtensionSite};
pub use model::{DefaultFactory, Feature, Kml, ModelFactory, PermissiveFactory};
pub use reader::KmlReader;
pub use schema::{Category, ConcreteKind};
pub use writer::KmlWriter;

/// Read a document with the default options.
pub fn from_str(input: &str) -> Result<Kml, KmlError> {
    KmlCodec::new().read_str(input)
}

/// Read a document from raw bytes with the default options.
pub fn from_slice(input: &[u8]) -> Result<Kml, KmlError> {
    KmlCodec::new().read(input)
}

/// Write a document with the default options.
pub fn to_string(kml: &Kml) -> Result<String, KmlError> {
    KmlCodec::new().write_string(kml)
}
