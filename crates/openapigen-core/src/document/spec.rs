use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::components::Components;
use super::operation::PathItem;
use super::schema::Schema;
use super::server::Server;

/// OpenAPI version written into every generated document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Components,
}

impl OpenApiSpec {
    /// Inline component schema registered under `name`.
    pub fn component_schema(&self, name: &str) -> Option<&Schema> {
        self.components
            .schemas
            .get(name)
            .and_then(|s| s.as_schema())
    }

    pub fn component_schema_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.components
            .schemas
            .get_mut(name)
            .and_then(|s| s.as_schema_mut())
    }
}
