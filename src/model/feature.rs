//! Features and containers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    AbstractView, Author, AtomLink, ExtendedData, Geometry, Link, ObjectData, Overlay, Region,
    Schema, Snippet, StyleSelector, TimePrimitive,
};
use crate::schema::{ConcreteKind, defaults};

/// Any feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    Placemark(Placemark),
    NetworkLink(NetworkLink),
    Container(Container),
    Overlay(Overlay),
}

impl Feature {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Placemark(_) => ConcreteKind::Placemark,
            Self::NetworkLink(_) => ConcreteKind::NetworkLink,
            Self::Container(c) => c.kind(),
            Self::Overlay(o) => o.kind(),
        }
    }

    /// Fields common to every feature.
    pub fn data(&self) -> &FeatureData {
        match self {
            Self::Placemark(f) => &f.feature,
            Self::NetworkLink(f) => &f.feature,
            Self::Container(c) => c.data(),
            Self::Overlay(o) => &o.overlay().feature,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.data().name.as_deref()
    }

    /// Child features, if this is a container.
    pub fn children(&self) -> Option<&[Feature]> {
        match self {
            Self::Container(c) => Some(c.features()),
            Self::Placemark(_) | Self::NetworkLink(_) | Self::Overlay(_) => None,
        }
    }
}

/// Fields common to every feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureData {
    pub object: ObjectData,
    pub name: Option<String>,
    pub visibility: bool,
    pub open: bool,
    pub author: Option<Author>,
    pub link: Option<AtomLink>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub snippet: Option<Snippet>,
    pub description: Option<String>,
    pub view: Option<AbstractView>,
    pub time_primitive: Option<TimePrimitive>,
    pub style_url: Option<String>,
    pub style_selectors: Vec<StyleSelector>,
    pub region: Option<Region>,
    pub extended_data: Option<ExtendedData>,
}

impl Default for FeatureData {
    fn default() -> Self {
        Self {
            object: ObjectData::default(),
            name: None,
            visibility: defaults::DEF_VISIBILITY,
            open: defaults::DEF_OPEN,
            author: None,
            link: None,
            address: None,
            phone_number: None,
            snippet: None,
            description: None,
            view: None,
            time_primitive: None,
            style_url: None,
            style_selectors: Vec::new(),
            region: None,
            extended_data: None,
        }
    }
}

impl FeatureData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placemark {
    pub feature: FeatureData,
    pub geometry: Option<Geometry>,
}

/// A reference to another KML resource.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkLink {
    pub feature: FeatureData,
    pub refresh_visibility: bool,
    pub fly_to_view: bool,
    pub link: Option<Link>,
}

impl Default for NetworkLink {
    fn default() -> Self {
        Self {
            feature: FeatureData::default(),
            refresh_visibility: defaults::DEF_REFRESH_VISIBILITY,
            fly_to_view: defaults::DEF_FLY_TO_VIEW,
            link: None,
        }
    }
}

/// Features that own child features.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Container {
    Folder(Folder),
    Document(Document),
}

impl Container {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Folder(_) => ConcreteKind::Folder,
            Self::Document(_) => ConcreteKind::Document,
        }
    }

    pub fn data(&self) -> &FeatureData {
        match self {
            Self::Folder(c) => &c.feature,
            Self::Document(c) => &c.feature,
        }
    }

    pub fn features(&self) -> &[Feature] {
        match self {
            Self::Folder(c) => &c.features,
            Self::Document(c) => &c.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Folder {
    pub feature: FeatureData,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub feature: FeatureData,
    pub schemas: Vec<Schema>,
    pub features: Vec<Feature>,
}

impl From<Placemark> for Feature {
    fn from(value: Placemark) -> Self {
        Self::Placemark(value)
    }
}

impl From<NetworkLink> for Feature {
    fn from(value: NetworkLink) -> Self {
        Self::NetworkLink(value)
    }
}

impl From<Folder> for Feature {
    fn from(value: Folder) -> Self {
        Self::Container(Container::Folder(value))
    }
}

impl From<Document> for Feature {
    fn from(value: Document) -> Self {
        Self::Container(Container::Document(value))
    }
}

impl From<Container> for Feature {
    fn from(value: Container) -> Self {
        Self::Container(value)
    }
}

impl From<Overlay> for Feature {
    fn from(value: Overlay) -> Self {
        Self::Overlay(value)
    }
}
