//! Namespace URIs.

/// KML 2.2, the namespace the writer emits.
pub const KML: &str = "http://www.opengis.net/kml/2.2";

/// Pre-OGC Google namespaces, read as core when legacy input is accepted.
pub const LEGACY_KML: &[&str] = &[
    "http://earth.google.com/kml/2.0",
    "http://earth.google.com/kml/2.1",
    "http://earth.google.com/kml/2.2",
];

/// Atom syndication namespace, used for `atom:author` and `atom:link`.
pub const ATOM: &str = "http://www.w3.org/2005/Atom";

/// Prefix the writer binds to [`ATOM`].
pub const ATOM_PREFIX: &str = "atom";

/// Google extension namespace. Not part of the core schema.
pub const GX: &str = "http://www.google.com/kml/ext/2.2";

/// Prefix conventionally bound to [`GX`].
pub const GX_PREFIX: &str = "gx";

/// True for namespaces whose elements the core dispatch tables handle.
pub fn is_core(namespace: Option<&str>, accept_legacy: bool, accept_unqualified: bool) -> bool {
    match namespace {
        None => accept_unqualified,
        Some(KML) => true,
        Some(ns) => accept_legacy && LEGACY_KML.contains(&ns),
    }
}
