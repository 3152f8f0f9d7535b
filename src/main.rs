//! LexiMood CLI: analyze Persian passages and print one JSON result per passage.
//!
//! Text comes from positional arguments (joined into one passage) or, when none
//! are given, from stdin with one passage per line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use leximood::telemetry::dev_logging_enabled;
use leximood::text::is_blank;
use leximood::{AnalysisConfig, AnalysisLevel, Analyzer, LexiMoodError};

#[derive(Debug, Parser)]
#[command(name = "leximood", version, about = "Persian sentiment analysis")]
struct Cli {
    /// TOML config file (defaults to $LEXIMOOD_CONFIG_PATH, then config/leximood.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// sentence | document
    #[arg(long)]
    level: Option<String>,

    /// Skip keyword extraction
    #[arg(long)]
    no_keywords: bool,

    #[arg(long)]
    max_keywords: Option<i64>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Text to analyze; read stdin when empty
    text: Vec<String>,
}

/// Compact logs to stderr; JSON when LEXIMOOD_LOG_FORMAT=json.
fn init_tracing() {
    let default_filter = if dev_logging_enabled() {
        "leximood=debug,warn"
    } else {
        "leximood=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = std::env::var("LEXIMOOD_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_writer(io::stderr)).init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> Result<AnalysisConfig> {
    let base = match &cli.config {
        Some(path) => AnalysisConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AnalysisConfig::from_env().context("loading config from environment")?,
    };

    let mut b = base.to_builder();
    if let Some(level) = &cli.level {
        b = b.analysis_level(level.parse::<AnalysisLevel>()?);
    }
    if cli.no_keywords {
        b = b.include_keywords(false);
    }
    if let Some(n) = cli.max_keywords {
        b = b.max_keywords(n);
    }
    Ok(b.build()?)
}

fn emit(out: &mut impl Write, analyzer: &Analyzer, text: &str, pretty: bool) -> Result<()> {
    match analyzer.analyze(text) {
        Ok(result) => {
            let value = result.to_value();
            let line = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                value.to_string()
            };
            writeln!(out, "{line}")?;
        }
        Err(LexiMoodError::InvalidInput) => warn!("skipping blank passage"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let analyzer = Analyzer::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        if is_blank(&text) {
            return Err(LexiMoodError::InvalidInput.into());
        }
        return emit(&mut out, &analyzer, &text, cli.pretty);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if is_blank(&line) {
            continue;
        }
        emit(&mut out, &analyzer, &line, cli.pretty)?;
    }
    Ok(())
}
