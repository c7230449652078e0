mod input;
mod output;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use praxis_core::config::PraxisConfig;
use praxis_core::request::InputFormat;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "praxis",
    about = "Generate a morning DayScript or an evening ReflectionLog from a JSON/YAML request",
    version
)]
struct Cli {
    /// Request file (reads stdin when omitted; empty stdin runs MorningPraxis)
    request: Option<PathBuf>,

    /// Request format
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// YAML file overriding the built-in default texts
    #[arg(long, env = "PRAXIS_CONFIG")]
    config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Log debug detail to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Auto,
    Json,
    Yaml,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` when set, otherwise WARN. `-v` always adds DEBUG on top.
/// Everything goes to stderr; stdout carries only the document.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let format = match cli.format {
        Format::Json => Some(InputFormat::Json),
        Format::Yaml => Some(InputFormat::Yaml),
        Format::Auto => None,
    };

    let req = match &cli.request {
        Some(path) => input::read_file(path, format)?,
        None => input::read_stdin(format)?,
    };

    let doc = praxis_core::run(&req, &config)?;
    tracing::debug!(document = doc.type_name(), "workflow complete");

    output::print_document(&doc, cli.compact)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PraxisConfig> {
    match path {
        Some(p) => PraxisConfig::load_checked(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(PraxisConfig::default()),
    }
}
