use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use openapigen_core::Generator;
use openapigen_core::config::{self, CONFIG_FILE_NAME, GeneratorConfig, OutputFormat};

const USAGE: &str =
    "Please call with a single URL as parameter, containing the GET list result.";

#[derive(Parser)]
#[command(
    name = "openapigen",
    about = "Infer an OpenAPI spec from a live REST list endpoint",
    version
)]
struct Cli {
    /// URL of the list endpoint, e.g. https://example.com/widgets
    urls: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(long)]
    format: Option<Format>,

    /// Fail when the endpoint cannot be fetched instead of emitting a field-less spec
    #[arg(long)]
    strict: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Yaml => OutputFormat::Yaml,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(url) = single_url(&cli.urls) else {
        println!("{USAGE}");
        return Ok(());
    };

    let cfg = load_config(&cli)?;
    let generator = Generator::new(cfg);
    let output = generator
        .render(url)
        .with_context(|| format!("failed to generate spec for {url}"))?;
    println!("{output}");
    Ok(())
}

/// The URL when exactly one was given.
fn single_url(urls: &[String]) -> Option<&str> {
    match urls {
        [url] => Some(url),
        _ => None,
    }
}

/// Config file values, overridden by command-line flags.
fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?,
        None => config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default(),
    };

    if let Some(format) = cli.format {
        cfg.format = format.into();
    }
    if cli.strict {
        cfg.strict = true;
    }
    if cli.timeout.is_some() {
        cfg.timeout_secs = cli.timeout;
    }
    log::debug!("effective config: {cfg:?}");
    Ok(cfg)
}
