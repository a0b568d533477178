use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Generator configuration loaded from `.openapigen.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub format: OutputFormat,
    /// Fail instead of degrading to a field-less document when the fetch fails.
    pub strict: bool,
    /// Request timeout. `None` waits as long as the transport does.
    pub timeout_secs: Option<u64>,
    pub value_policy: ValuePolicy,
}

/// Text encoding of the emitted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// How sampled field values that are not JSON strings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePolicy {
    /// Numbers and booleans use their JSON text, nested values their compact
    /// JSON encoding. `null` is dropped.
    #[default]
    Stringify,
    /// Only string values become properties.
    Skip,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".openapigen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<GeneratorConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GeneratorConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}
