use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to encode or decode YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}
