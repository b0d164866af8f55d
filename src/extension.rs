//! Extension hook.
//!
//! Elements whose namespace is neither the core schema nor Atom are offered to
//! the registered [`ExtensionHandler`]s in registration order; the first one
//! whose [`can_handle`](ExtensionHandler::can_handle) returns true reads it
//! (and, on the way out, writes it). Elements nobody claims are skipped.
//!
//! ```text
//! reader ── foreign child ──▶ registry.find(site) ──▶ handler.read ──▶ owner.extensions
//! writer ◀── handler.write ◀── registry.find(site, element) ◀── owner.extensions
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::KmlError;
use crate::model::ForeignElement;
use crate::schema::ConcreteKind;
use crate::schema::namespace;
use crate::tokens::{StartTag, TokenSink, TokenSource, read_foreign, write_foreign};

/// Where a foreign element sits: the concrete type that owns it plus the
/// element's own qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionSite<'a> {
    pub owner: ConcreteKind,
    pub namespace: &'a str,
    pub local_name: &'a str,
}

/// Reads and writes elements of one foreign namespace.
pub trait ExtensionHandler: Send + Sync {
    /// Namespace URI this handler speaks.
    fn namespace(&self) -> &str;

    /// Prefix bound to [`namespace`](Self::namespace) on output.
    fn prefix(&self) -> &str;

    /// Whether this handler takes the element at `site`. `element` is `None`
    /// on the read side, where the tree has not been consumed yet.
    fn can_handle(&self, site: &ExtensionSite<'_>, element: Option<&ForeignElement>) -> bool;

    /// Consume the element opened by `start`, through its end-tag.
    fn read(
        &self,
        source: &mut dyn TokenSource,
        start: &StartTag,
    ) -> Result<ForeignElement, KmlError> {
        read_foreign(source, start)
    }

    fn write(&self, sink: &mut dyn TokenSink, element: &ForeignElement) -> Result<(), KmlError> {
        write_foreign(sink, element, self.namespace(), self.prefix())
    }
}

/// Captures every element of one namespace as a generic tree and writes it
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureHandler {
    namespace: String,
    prefix: String,
}

impl CaptureHandler {
    pub fn new(namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: prefix.into(),
        }
    }
}

impl ExtensionHandler for CaptureHandler {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn can_handle(&self, site: &ExtensionSite<'_>, _element: Option<&ForeignElement>) -> bool {
        site.namespace == self.namespace
    }
}

/// Ordered set of extension handlers.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    handlers: Vec<Arc<dyn ExtensionHandler>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that captures the Google `gx` extension namespace.
    pub fn with_google_extensions() -> Self {
        Self::new().with(CaptureHandler::new(namespace::GX, namespace::GX_PREFIX))
    }

    /// Append `handler`; earlier registrations take precedence.
    pub fn with(mut self, handler: impl ExtensionHandler + 'static) -> Self {
        self.register(Arc::new(handler));
        self
    }

    pub fn register(&mut self, handler: Arc<dyn ExtensionHandler>) {
        debug!(namespace = handler.namespace(), prefix = handler.prefix(), "registered extension handler");
        self.handlers.push(handler);
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn handlers(&self) -> impl Iterator<Item = &dyn ExtensionHandler> {
        self.handlers.iter().map(|handler| handler.as_ref())
    }

    /// First handler that accepts the site, if any.
    pub fn find(
        &self,
        site: &ExtensionSite<'_>,
        element: Option<&ForeignElement>,
    ) -> Option<&dyn ExtensionHandler> {
        let found = self.handlers().find(|handler| handler.can_handle(site, element));
        match found {
            Some(handler) => debug!(
                owner = %site.owner,
                element = site.local_name,
                prefix = handler.prefix(),
                "extension handler selected"
            ),
            None => debug!(
                owner = %site.owner,
                namespace = site.namespace,
                element = site.local_name,
                "no extension handler"
            ),
        }
        found
    }

    /// Prefix to namespace bindings to declare on the outermost written
    /// element, in registration order. The first registration wins for a
    /// repeated prefix.
    pub fn declarations(&self) -> IndexMap<&str, &str> {
        let mut bindings = IndexMap::new();
        for handler in self.handlers() {
            bindings
                .entry(handler.prefix())
                .or_insert(handler.namespace());
        }
        bindings
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers().map(|handler| handler.namespace()))
            .finish()
    }
}
