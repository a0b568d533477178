use std::cell::Cell;

use serde_json::Value;

use openapigen_core::config::{GeneratorConfig, OutputFormat};
use openapigen_core::document::{self, schema::SchemaType, spec::OpenApiSpec};
use openapigen_core::error::{FetchError, GenerateError};
use openapigen_core::fetch::Fetch;
use openapigen_core::{Generator, SampleOutcome};

const WIDGETS_WRAPPED: &str = include_str!("fixtures/widgets-wrapped.json");

/// Serves a canned body, or fails like an unreachable server.
struct StubFetcher {
    body: Option<&'static str>,
    calls: Cell<usize>,
}

impl StubFetcher {
    fn ok(body: &'static str) -> Self {
        Self {
            body: Some(body),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            calls: Cell::new(0),
        }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.body {
            Some(body) => Ok(body.as_bytes().to_vec()),
            None => Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            }),
        }
    }
}

fn generator(fetcher: StubFetcher) -> Generator<StubFetcher> {
    Generator::with_fetcher(GeneratorConfig::default(), fetcher)
}

fn widget_property(doc: &OpenApiSpec, name: &str) -> (Option<SchemaType>, Option<Value>) {
    let widget = doc.component_schema("Widget").expect("should have Widget schema");
    let prop = widget.properties[name].as_schema().expect("inline property");
    (prop.schema_type, prop.example.clone())
}

#[test]
fn scenario_bare_array() {
    let generator = generator(StubFetcher::ok(r#"[{"id":"1","name":"Foo"}]"#));
    let generation = generator.generate("https://example.com/widgets").unwrap();

    assert_eq!(generation.identity.plural_name, "widgets");
    assert_eq!(generation.identity.singular_name, "widget");
    assert_eq!(generation.identity.singular_display_name, "Widget");

    let doc = &generation.document;
    assert_eq!(doc.component_schema("Widget").unwrap().properties.len(), 2);
    assert_eq!(
        widget_property(doc, "id"),
        (Some(SchemaType::Number), Some(Value::String("1".into())))
    );
    assert_eq!(
        widget_property(doc, "name"),
        (Some(SchemaType::String), Some(Value::String("Foo".into())))
    );
}

#[test]
fn scenario_transport_failure_keeps_skeleton() {
    let generator = generator(StubFetcher::failing());
    let generation = generator.generate("https://example.com/widgets").unwrap();

    assert!(matches!(generation.outcome, SampleOutcome::FetchFailed(_)));

    let doc = &generation.document;
    let collection = doc.paths.get("/widgets").expect("collection path");
    let item = doc.paths.get("/widgets/{widget}").expect("item path");
    assert!(collection.get.is_some() && collection.post.is_some());
    assert!(item.get.is_some() && item.put.is_some() && item.delete.is_some());
    assert!(doc.component_schema("Widget").unwrap().properties.is_empty());
}

#[test]
fn scenario_wrapped_boolean_text_is_string() {
    let generator = generator(StubFetcher::ok(r#"{"widgets":[{"active":"true"}]}"#));
    let doc = generator.generate("https://example.com/widgets").unwrap().document;
    assert_eq!(
        widget_property(&doc, "active"),
        (Some(SchemaType::String), Some(Value::String("true".into())))
    );
}

#[test]
fn shape_mismatch_and_fetch_failure_produce_same_document() {
    let url = "https://example.com/widgets";
    let mismatch = generator(StubFetcher::ok(r#"{"items":[{"id":"1"}]}"#))
        .generate(url)
        .unwrap();
    let failed = generator(StubFetcher::failing()).generate(url).unwrap();

    assert_eq!(mismatch.outcome, SampleOutcome::NoSample);
    assert!(matches!(failed.outcome, SampleOutcome::FetchFailed(_)));
    assert_eq!(mismatch.document, failed.document);
}

#[test]
fn strict_mode_surfaces_fetch_errors() {
    let config = GeneratorConfig {
        strict: true,
        ..Default::default()
    };
    let generator = Generator::with_fetcher(config, StubFetcher::failing());
    let err = generator.generate("https://example.com/widgets").unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Fetch(FetchError::Status { status: 503, .. })
    ));
}

#[test]
fn fetches_exactly_once() {
    let generator = generator(StubFetcher::ok(WIDGETS_WRAPPED));
    generator.generate("https://example.com/widgets").unwrap();
    assert_eq!(generator.fetcher().calls.get(), 1);
}

#[test]
fn yaml_output_round_trips() {
    let generator = generator(StubFetcher::ok(WIDGETS_WRAPPED));
    let yaml = generator.render("https://example.com/widgets").unwrap();
    assert!(yaml.starts_with("openapi: 3.0.3"));

    let doc = document::from_yaml(&yaml).expect("output should parse back");
    assert_eq!(doc.info.title, "Widgets API");
    assert_eq!(doc.servers[0].url, "https://example.com");
    assert_eq!(
        widget_property(&doc, "id"),
        (Some(SchemaType::Number), Some(Value::String("42".into())))
    );
    assert_eq!(
        widget_property(&doc, "sku"),
        (Some(SchemaType::String), Some(Value::String("W-0042".into())))
    );

    let item = &doc.paths["/widgets/{widget}"];
    assert!(item.delete.as_ref().unwrap().request_body.is_none());
    assert!(item.get.as_ref().unwrap().request_body.is_none());
}

#[test]
fn yaml_output_omits_empty_members() {
    let generator = generator(StubFetcher::failing());
    let yaml = generator.render("https://example.com/widgets").unwrap();
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();

    let delete = &value["paths"]["/widgets/{widget}"]["delete"];
    assert!(delete.get("requestBody").is_none());
    assert!(delete["responses"]["200"].get("content").is_none());

    let widget = &value["components"]["schemas"]["Widget"];
    assert!(widget.get("properties").is_none());
    assert!(widget.get("example").is_none());
}

#[test]
fn json_output_format() {
    let config = GeneratorConfig {
        format: OutputFormat::Json,
        ..Default::default()
    };
    let generator = Generator::with_fetcher(config, StubFetcher::ok(WIDGETS_WRAPPED));
    let json = generator.render("https://example.com/widgets").unwrap();
    let doc = document::from_json(&json).expect("output should parse back");
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.component_schema("Widget").unwrap().properties.len(), 3);
}
