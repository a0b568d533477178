//! Infers a CRUD OpenAPI document from one live response of a REST list
//! endpoint.

pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod infer;
pub mod synth;

pub use generate::{Generation, Generator, SampleOutcome, generate_spec};
