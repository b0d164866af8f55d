//! Data every identifiable object carries, and captured foreign markup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `id`/`targetId` attributes plus foreign-namespace children captured by an
/// [extension handler](crate::extension::ExtensionHandler).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectData {
    pub id: Option<String>,
    /// Identifier of the object a partial update applies to.
    pub target_id: Option<String>,
    /// Foreign elements in input order. Written after the object's own fields.
    pub extensions: Vec<ForeignElement>,
}

impl ObjectData {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// A generic element tree from a namespace outside the core schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForeignElement {
    pub namespace: Option<String>,
    pub local_name: String,
    /// Attributes with their names as written (prefixes kept).
    pub attributes: Vec<(String, String)>,
    pub children: Vec<ForeignNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ForeignNode {
    Element(ForeignElement),
    Text(String),
}

impl ForeignElement {
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(ForeignNode::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: ForeignElement) -> Self {
        self.children.push(ForeignNode::Element(child));
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Concatenated direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                ForeignNode::Text(text) => Some(text.as_str()),
                ForeignNode::Element(_) => None,
            })
            .collect()
    }
}
