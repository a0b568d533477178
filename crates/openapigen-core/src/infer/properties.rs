use log::debug;
use serde_json::Value;

use crate::config::ValuePolicy;
use crate::document::schema::SchemaType;

/// Scalar type guessed from a sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Number,
}

impl PropertyType {
    /// `Number` if `raw` parses as a base-10 `i64`, otherwise `String`.
    pub fn classify(raw: &str) -> Self {
        if raw.parse::<i64>().is_ok() {
            PropertyType::Number
        } else {
            PropertyType::String
        }
    }

    pub fn schema_type(self) -> SchemaType {
        match self {
            PropertyType::String => SchemaType::String,
            PropertyType::Number => SchemaType::Number,
        }
    }
}

/// A field discovered on the sampled object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredProperty {
    pub name: String,
    pub property_type: PropertyType,
    /// The sampled value, verbatim.
    pub example: String,
}

impl InferredProperty {
    pub fn new(name: impl Into<String>, example: impl Into<String>) -> Self {
        let example = example.into();
        Self {
            name: name.into(),
            property_type: PropertyType::classify(&example),
            example,
        }
    }
}

/// Infer properties from a list response using the default value policy.
pub fn infer_properties(bytes: &[u8], plural_name: &str) -> Vec<InferredProperty> {
    infer_properties_with(bytes, plural_name, ValuePolicy::default())
}

/// Infer properties from the first resource object of a list response.
///
/// Returns an empty list when no resource array can be located.
pub fn infer_properties_with(
    bytes: &[u8],
    plural_name: &str,
    policy: ValuePolicy,
) -> Vec<InferredProperty> {
    match resolve_records(bytes, plural_name) {
        Some(records) => properties_from_record(&records[0], policy),
        None => Vec::new(),
    }
}

/// Locate the array of resource objects in a list response.
///
/// Tries `{"<plural>": [...]}` first, then a bare top-level array. The
/// returned array is never empty.
pub fn resolve_records(bytes: &[u8], plural_name: &str) -> Option<Vec<Value>> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            debug!("response body is not JSON: {e}");
            return None;
        }
    };

    match value {
        Value::Object(mut map) => match map.remove(plural_name) {
            Some(Value::Array(records)) if !records.is_empty() => {
                debug!("sampling `{plural_name}` array of wrapped response");
                Some(records)
            }
            _ => {
                debug!("response object has no non-empty `{plural_name}` array");
                None
            }
        },
        Value::Array(records) if !records.is_empty() => {
            debug!("sampling top-level array response");
            Some(records)
        }
        _ => {
            debug!("response is neither a wrapped nor a bare non-empty array");
            None
        }
    }
}

/// One property per usable field of `record`. Non-object records yield none.
pub fn properties_from_record(record: &Value, policy: ValuePolicy) -> Vec<InferredProperty> {
    let Some(fields) = record.as_object() else {
        debug!("first record is not an object");
        return Vec::new();
    };

    fields
        .iter()
        .filter_map(|(name, value)| {
            let raw = stringify(value, policy);
            if raw.is_none() {
                debug!("skipping field `{name}` with non-string value");
            }
            raw.map(|raw| InferredProperty::new(name.as_str(), raw))
        })
        .collect()
}

fn stringify(value: &Value, policy: ValuePolicy) -> Option<String> {
    match (value, policy) {
        (Value::String(s), _) => Some(s.clone()),
        (Value::Null, _) | (_, ValuePolicy::Skip) => None,
        (Value::Number(n), ValuePolicy::Stringify) => Some(n.to_string()),
        (Value::Bool(b), ValuePolicy::Stringify) => Some(b.to_string()),
        (Value::Array(_) | Value::Object(_), ValuePolicy::Stringify) => {
            serde_json::to_string(value).ok()
        }
    }
}
