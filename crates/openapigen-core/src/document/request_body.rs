use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::{APPLICATION_JSON, MediaType};
use super::schema::SchemaOrRef;

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub content: IndexMap<String, MediaType>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl RequestBody {
    /// A JSON request body carrying `schema`.
    pub fn json(description: impl Into<String>, schema: SchemaOrRef) -> Self {
        let mut content = IndexMap::new();
        content.insert(
            APPLICATION_JSON.to_string(),
            MediaType {
                schema: Some(schema),
            },
        );
        Self {
            description: Some(description.into()),
            content,
            required: false,
        }
    }
}
