use std::time::Duration;

use log::{debug, error, warn};

use crate::config::{GeneratorConfig, OutputFormat};
use crate::document::{self, spec::OpenApiSpec};
use crate::error::{DocumentError, GenerateError};
use crate::fetch::{Fetch, HttpFetcher};
use crate::infer::properties::{self, InferredProperty};
use crate::infer::resource_namer::{ResourceIdentity, derive_identity};
use crate::synth::{inject_properties, synthesize};

/// What sampling the list endpoint produced.
///
/// `NoSample` and `FetchFailed` both lead to a document without properties;
/// only this value and the log tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    Inferred(Vec<InferredProperty>),
    /// The body had no usable resource array.
    NoSample,
    /// The request failed; carries the transport error message.
    FetchFailed(String),
}

impl SampleOutcome {
    pub fn properties(&self) -> &[InferredProperty] {
        match self {
            SampleOutcome::Inferred(props) => props,
            SampleOutcome::NoSample | SampleOutcome::FetchFailed(_) => &[],
        }
    }
}

/// A generated document together with how it was derived.
#[derive(Debug, Clone)]
pub struct Generation {
    pub identity: ResourceIdentity,
    pub document: OpenApiSpec,
    pub outcome: SampleOutcome,
}

/// Runs the URL → identity → skeleton → fetch → inject pipeline.
pub struct Generator<F = HttpFetcher> {
    config: GeneratorConfig,
    fetcher: F,
}

impl Generator<HttpFetcher> {
    pub fn new(config: GeneratorConfig) -> Self {
        let fetcher = HttpFetcher::with_timeout(config.timeout_secs.map(Duration::from_secs));
        Self { config, fetcher }
    }
}

impl<F: Fetch> Generator<F> {
    pub fn with_fetcher(config: GeneratorConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Build the document for `url`.
    ///
    /// Fetch failures degrade to a document without properties unless the
    /// config is strict.
    pub fn generate(&self, url: &str) -> Result<Generation, GenerateError> {
        let identity = derive_identity(url);
        debug!(
            "resource `{}` (item `{}`), base url `{}`",
            identity.plural_name, identity.singular_name, identity.base_url
        );

        let mut document = synthesize(&identity);
        let outcome = self.sample(url, &identity)?;
        inject_properties(&mut document, &identity, outcome.properties());

        Ok(Generation {
            identity,
            document,
            outcome,
        })
    }

    /// Build the document for `url` and encode it in the configured format.
    pub fn render(&self, url: &str) -> Result<String, GenerateError> {
        let generation = self.generate(url)?;
        Ok(encode(&generation.document, self.config.format)?)
    }

    fn sample(&self, url: &str, identity: &ResourceIdentity) -> Result<SampleOutcome, GenerateError> {
        let body = match self.fetcher.fetch(url) {
            Ok(body) => body,
            Err(e) if self.config.strict => return Err(e.into()),
            Err(e) => {
                warn!("The HTTP request failed with error {e}");
                return Ok(SampleOutcome::FetchFailed(e.to_string()));
            }
        };

        let Some(records) = properties::resolve_records(&body, &identity.plural_name) else {
            return Ok(SampleOutcome::NoSample);
        };
        let props = properties::properties_from_record(&records[0], self.config.value_policy);
        debug!("inferred {} properties", props.len());
        Ok(SampleOutcome::Inferred(props))
    }
}

/// Encode a document as YAML or JSON.
pub fn encode(doc: &OpenApiSpec, format: OutputFormat) -> Result<String, DocumentError> {
    match format {
        OutputFormat::Yaml => document::to_yaml(doc),
        OutputFormat::Json => document::to_json(doc),
    }
}

/// Generate a YAML OpenAPI document for the list endpoint at `url`.
///
/// Always returns a document; a failed fetch yields one without properties.
pub fn generate_spec(url: &str) -> String {
    match Generator::new(GeneratorConfig::default()).render(url) {
        Ok(text) => text,
        Err(e) => {
            error!("failed to render document for {url}: {e}");
            String::new()
        }
    }
}
