use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod config;
mod engine;
mod engines;
mod error;
mod preprocessing;
mod report;
mod scanner;

use batch::BatchRunner;
use engines::EngineKind;

#[derive(Parser, Debug)]
#[command(name = "xl-scan")]
#[command(about = "Count occurrences of \"XL\" in the text of images")]
#[command(version)]
pub struct Args {
    /// Image file, or directory of png/jpg/jpeg images, to scan
    pub path: PathBuf,

    /// Write a CSV report to this path instead of printing results
    #[arg(long, value_name = "OUTPUT")]
    pub csv: Option<PathBuf>,

    /// OCR backend to use
    #[arg(long, env = "XL_SCAN_ENGINE", value_enum, default_value_t = EngineKind::Rekognition)]
    pub engine: EngineKind,

    /// Abort on the first file that fails instead of recording it and continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Language for the Tesseract engine (e.g., "eng", "deu", "fra")
    #[arg(long, env = "OCR_DEFAULT_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (downloaded to the cache if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only report lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::info!("Starting xl-scan v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Engine: {}, input: {}", config.engine, config.input.display());

    let inputs = batch::collect_inputs(&config.input)?;
    if inputs.is_empty() {
        tracing::warn!("No image files found in {}", config.input.display());
    }

    let engine = engines::create(&config)?;
    tracing::debug!("Using {} ({})", engine.name(), engine.description());

    let outcome = BatchRunner::new(engine.as_ref(), config.failure_policy).run(&inputs)?;

    match &config.csv_output {
        Some(path) => report::write_csv(path, &outcome.reports)?,
        None => report::print_reports(&outcome.reports, &mut std::io::stdout().lock())?,
    }

    for failure in &outcome.failures {
        eprintln!("{}", report::render_failure(failure));
    }

    if !outcome.is_success() {
        anyhow::bail!(
            "{} of {} file(s) could not be processed",
            outcome.failures.len(),
            outcome.processed()
        );
    }

    Ok(())
}
