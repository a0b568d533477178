use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// The only content type generated documents describe.
pub const APPLICATION_JSON: &str = "application/json";

/// A media type object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}
