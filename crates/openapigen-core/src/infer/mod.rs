pub mod properties;
pub mod resource_namer;

pub use properties::{InferredProperty, PropertyType, infer_properties, infer_properties_with};
pub use resource_namer::{ResourceIdentity, derive_identity};
