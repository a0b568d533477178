use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::{APPLICATION_JSON, MediaType};
use super::schema::SchemaOrRef;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    /// A response without a body.
    pub fn empty(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: IndexMap::new(),
        }
    }

    /// A response with a JSON body.
    pub fn json(description: impl Into<String>, schema: SchemaOrRef) -> Self {
        let mut response = Self::empty(description);
        response.content.insert(
            APPLICATION_JSON.to_string(),
            MediaType {
                schema: Some(schema),
            },
        );
        response
    }

    /// Schema of the JSON body, if any.
    pub fn json_schema(&self) -> Option<&SchemaOrRef> {
        self.content
            .get(APPLICATION_JSON)
            .and_then(|m| m.schema.as_ref())
    }
}
