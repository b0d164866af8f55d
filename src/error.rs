//! Error types for reading and writing KML.

use thiserror::Error;

/// Errors that abort a read or write call.
///
/// Every variant produced by the reader carries the `/`-joined nesting path of
/// the element being built when the failure happened, e.g.
/// `kml/Document/Placemark/Point`.
#[derive(Debug, Error)]
pub enum KmlError {
    /// Tokenizer or serializer failure reported by the XML layer.
    #[error("XML error: {0}")]
    Xml(String),

    /// Unbalanced or truncated token stream.
    #[error("Malformed document at {path}: {message}")]
    Structure { message: String, path: String },

    /// Text that could not be converted to the declared field type.
    #[error("Invalid {expected} in <{tag}> at {path}: {value:?}")]
    Scalar {
        tag: String,
        namespace: Option<String>,
        value: String,
        expected: &'static str,
        path: String,
    },

    /// A value combination rejected by the model factory.
    #[error("Rejected <{tag}> at {path}: {message}")]
    Domain {
        tag: String,
        message: String,
        path: String,
    },

    /// IO error from the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KmlError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a structural error.
    pub fn structure(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Nesting path recorded with the error, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Structure { path, .. } | Self::Scalar { path, .. } | Self::Domain { path, .. } => {
                Some(path)
            }
            Self::Xml(_) | Self::Io(_) => None,
        }
    }
}

/// A scalar conversion failure, before the reader attaches tag and path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {value:?}")]
pub struct ScalarError {
    /// Human-readable name of the expected type ("double", "color", ...).
    pub expected: &'static str,
    /// The offending text, untrimmed.
    pub value: String,
}

impl ScalarError {
    pub fn new(expected: &'static str, value: impl Into<String>) -> Self {
        Self {
            expected,
            value: value.into(),
        }
    }
}

/// A rejection raised by a [`ModelFactory`](crate::model::ModelFactory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DomainError(pub String);

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
