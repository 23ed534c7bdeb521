use std::{fs, path::Path};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use phishshield::{
    config::{apply_provider_filter, load_config},
    core::{store::VerdictStore, types::AggregatedVerdict},
    detectors::patterns::suspicious_patterns,
    pipeline::analyzer::Analyzer,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "phishshield",
    about = "URL phishing check: local heuristics plus threat-intel lookups"
)]
struct Cli {
    /// URL to analyze
    url: String,
    /// Path to config file (TOML). Default: config/phishshield.toml
    #[arg(long)]
    config: Option<String>,
    /// Comma-separated provider names to enable (case-insensitive)
    #[arg(long, value_delimiter = ',')]
    providers: Option<Vec<String>>,
    /// Skip the verdict cache and force a fresh analysis
    #[arg(long)]
    no_cache: bool,
    /// SQLite path for cached verdicts
    #[arg(long, default_value = "data/phishshield.db")]
    db_path: String,
    /// Output format for the verdict
    #[arg(long, default_value = "text", value_enum)]
    format: FormatArg,
    /// Increase verbosity (info, debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Optional log file path
    #[arg(long, default_value = "data/phishshield.log")]
    log_file: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    // Browser-internal style schemes are skipped, not judged.
    if !is_analyzable(&cli.url) {
        tracing::info!("skipping analysis for non-http(s) url: {}", cli.url);
        println!("skipped: {} is not an analyzable http(s) URL", cli.url);
        return Ok(());
    }

    let mut cfg = load_config(cli.config.as_deref())?;
    cfg = apply_provider_filter(cfg, cli.providers.as_deref());
    let freshness = chrono::Duration::seconds(cfg.cache_ttl_seconds as i64);

    let mut store = VerdictStore::new(Path::new(&cli.db_path))?;
    store.purge_stale(freshness)?;

    if !cli.no_cache {
        if let Some(cached) = store.fresh(&cli.url, freshness)? {
            tracing::debug!("serving cached verdict for {}", cli.url);
            render(&cli, &cached);
            return Ok(());
        }
    }

    let analyzer = Analyzer::new(cfg)?;
    let verdict = match analyzer.analyze(&cli.url).await {
        Ok(verdict) => verdict,
        Err(phishshield::core::error::ShieldError::MalformedUrl(detail)) => {
            // A URL that cannot be parsed is skipped, never treated as
            // a detected threat.
            tracing::warn!("skipping unparsable url: {}", detail);
            println!("skipped: {} could not be parsed as an absolute URL", cli.url);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    store.upsert(&cli.url, &verdict)?;
    render(&cli, &verdict);
    Ok(())
}

/// Only http(s) URLs are worth judging; everything else (browser
/// internals, extension pages, mailto) is out of scope for analysis.
fn is_analyzable(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn render(cli: &Cli, verdict: &AggregatedVerdict) {
    match cli.format {
        FormatArg::Json => match serde_json::to_string_pretty(verdict) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!("failed to serialize verdict: {}", err),
        },
        FormatArg::Text => {
            if verdict.is_phishing {
                println!("WARNING: {} looks like phishing", cli.url);
                for reason in &verdict.reasons {
                    println!("  - {reason}");
                }
            } else {
                println!("OK: no phishing indicators for {}", cli.url);
            }
            let annotations = suspicious_patterns(&cli.url);
            if cli.verbose > 0 && !annotations.is_empty() {
                println!("notes:");
                for note in annotations {
                    println!("  * {note}");
                }
            }
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = Path::new(&cli.log_file);
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if log_path.exists() {
        if let Ok(meta) = fs::metadata(log_path) {
            if meta.len() > 1_000_000 {
                let rotated = log_path.with_extension("log.1");
                let _ = fs::rename(log_path, rotated);
            }
        }
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(false);

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;
    Ok(())
}
