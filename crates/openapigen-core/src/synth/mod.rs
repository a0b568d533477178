//! Builds the CRUD document skeleton and fills in the sampled properties.

pub mod inject;
pub mod skeleton;

pub use inject::inject_properties;
pub use skeleton::synthesize;
