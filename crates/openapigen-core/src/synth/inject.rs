use serde_json::Value;

use crate::document::schema::{Schema, SchemaOrRef};
use crate::document::spec::OpenApiSpec;
use crate::infer::properties::InferredProperty;
use crate::infer::resource_namer::ResourceIdentity;

/// Add the inferred properties to the resource object schema.
///
/// Entries are keyed by field name, so injecting the same list twice leaves
/// one entry per field. Does nothing if the document has no object schema
/// for the resource.
pub fn inject_properties(
    doc: &mut OpenApiSpec,
    identity: &ResourceIdentity,
    properties: &[InferredProperty],
) {
    let display = &identity.singular_display_name;
    let Some(schema) = doc.component_schema_mut(display) else {
        log::warn!("document has no `{display}` schema; properties not injected");
        return;
    };

    for prop in properties {
        schema.properties.insert(
            prop.name.clone(),
            SchemaOrRef::inline(property_schema(prop, display)),
        );
    }
}

fn property_schema(prop: &InferredProperty, display: &str) -> Schema {
    let mut schema = Schema::of_type(prop.property_type.schema_type());
    schema.description = Some(format!("The {} of the {display}", prop.name));
    schema.example = Some(Value::String(prop.example.clone()));
    schema
}
