//! Extended data and schema declarations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ForeignElement, ObjectData};

/// `<ExtendedData>`: untyped `Data` pairs, typed `SchemaData` records and
/// arbitrary foreign-namespace elements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtendedData {
    pub data: Vec<Data>,
    pub schema_data: Vec<SchemaData>,
    pub extensions: Vec<ForeignElement>,
}

impl ExtendedData {
    /// Value of the first `Data` entry named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|d| d.name.as_deref() == Some(name))
            .and_then(|d| d.value.as_deref())
    }
}

/// `<Data name="...">`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Data {
    pub object: ObjectData,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub value: Option<String>,
}

impl Data {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// `<SchemaData schemaUrl="#schema-id">`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemaData {
    pub object: ObjectData,
    pub schema_url: Option<String>,
    pub simple_data: Vec<SimpleData>,
}

/// `<SimpleData name="...">text</SimpleData>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleData {
    pub name: String,
    pub value: String,
}

/// `<Schema name="..." id="...">`: the typed field layout `SchemaData` refers to.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    pub object: ObjectData,
    pub name: Option<String>,
    pub simple_fields: Vec<SimpleField>,
}

/// `<SimpleField type="..." name="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleField {
    /// Declared type (`string`, `int`, `double`, ...), kept as written.
    pub field_type: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
}
