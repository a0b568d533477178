use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
}

/// An API parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Parameter {
    /// An optional query parameter.
    pub fn query(name: &str, description: impl Into<String>, schema: SchemaOrRef) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Query,
            description: Some(description.into()),
            required: false,
            schema: Some(schema),
        }
    }

    /// A path parameter. Path parameters are always required.
    pub fn path(name: &str, description: impl Into<String>, schema: SchemaOrRef) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Path,
            description: Some(description.into()),
            required: true,
            schema: Some(schema),
        }
    }
}
