use anyhow::Result;
use clap::{Parser, ValueEnum};
use logpulse_core::conf::{MetricsConfig, load_config};
use logpulse_core::engine::Pipeline;
use logpulse_core::logging::init_logging;
use logpulse_core::metrics::MetricRegistry;
use logpulse_core::report::{OutputFormat, Report};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "logpulse",
    version,
    about = "Logpulse: one-pass metrics over an access log"
)]
struct Cli {
    /// Access log to analyze
    logfile: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// HCL file listing the metrics to run (defaults to request_count, error_rate, latency)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    match run(cli) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MetricsConfig::default(),
    };

    let metrics = MetricRegistry::builtin().build_all(&config.metrics)?;
    debug!(metrics = ?config.metrics, "starting pipeline");

    let metrics = Pipeline::new(metrics).run(&cli.logfile)?;
    let report = Report::merge(&metrics);

    Ok(OutputFormat::from(cli.format).render(&report)?)
}
