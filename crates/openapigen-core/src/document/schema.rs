use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every local component schema reference.
pub const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Array,
    Object,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Reference to a schema under `components.schemas`.
    pub fn component(name: &str) -> Self {
        SchemaOrRef::Ref {
            ref_path: format!("{COMPONENT_SCHEMA_PREFIX}{name}"),
        }
    }

    pub fn inline(schema: Schema) -> Self {
        SchemaOrRef::Schema(Box::new(schema))
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(s) => Some(s),
            SchemaOrRef::Ref { .. } => None,
        }
    }

    pub fn as_schema_mut(&mut self) -> Option<&mut Schema> {
        match self {
            SchemaOrRef::Schema(s) => Some(s),
            SchemaOrRef::Ref { .. } => None,
        }
    }

    pub fn ref_path(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { ref_path } => Some(ref_path),
            SchemaOrRef::Schema(_) => None,
        }
    }
}

/// The subset of a JSON Schema object that generated documents use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    // Object properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl Schema {
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// An array schema whose items are the given schema or reference.
    pub fn array_of(items: SchemaOrRef) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}
