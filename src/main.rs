//! CLI entry point for the review digest tool.
//!
//! Reads the course review export, builds the digest and writes the JSON
//! asset consumed by the reviews and testimonials pages.

use anyhow::Result;
use clap::Parser;
use review_digest::analyzers::analyzer::analyze_file;
use review_digest::config::{
    DEFAULT_FEATURED_LIMIT, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PipelineConfig,
};
use review_digest::locations::RandomSampler;
use review_digest::output::log_summary;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "review_digest")]
#[command(about = "Builds the course reviews JSON asset from a CSV export", long_about = None)]
struct Cli {
    /// CSV export with Rating, Comment, Student Name and Timestamp columns
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seed for location sampling; omit for a different assignment each run
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of five-star reviews in the featured list
    #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
    featured_limit: usize,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/review_digest.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("review_digest.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::default().with_featured_limit(cli.featured_limit);

    let mut sampler = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded location sampling");
            RandomSampler::seeded(seed)
        }
        None => RandomSampler::from_entropy(),
    };

    let digest = analyze_file(&cli.input, &cli.output, &mut sampler, &config)?;
    log_summary(&digest, &cli.output);

    Ok(())
}
