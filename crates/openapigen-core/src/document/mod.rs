//! OpenAPI object model for generated documents, plus the text encoders.

pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod server;
pub mod spec;

use crate::error::DocumentError;
use spec::OpenApiSpec;

/// Serialize a document to YAML.
pub fn to_yaml(spec: &OpenApiSpec) -> Result<String, DocumentError> {
    Ok(serde_yaml_ng::to_string(spec)?)
}

/// Serialize a document to pretty-printed JSON.
pub fn to_json(spec: &OpenApiSpec) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Parse a document back from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiSpec, DocumentError> {
    let spec: OpenApiSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse a document back from JSON.
pub fn from_json(input: &str) -> Result<OpenApiSpec, DocumentError> {
    let spec: OpenApiSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

fn validate_version(spec: &OpenApiSpec) -> Result<(), DocumentError> {
    if !spec.openapi.starts_with("3.") {
        return Err(DocumentError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}
