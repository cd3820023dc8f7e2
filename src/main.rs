//! SpiderSense main entry point
//!
//! This is the command-line interface for the SpiderSense contact crawler.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use spider_sense::config::load_config_or_default;
use spider_sense::output::{
    print_failed_summary, print_progress, print_summary, write_markdown_report,
};
use spider_sense::start_crawl;
use tracing_subscriber::EnvFilter;

/// SpiderSense: a bounded-depth contact crawler
///
/// SpiderSense crawls a single site depth-first from a seed URL, following
/// only links on the seed's host and port, and collects the email addresses
/// and phone numbers it finds. Press Ctrl-C to stop early; the summary is
/// printed either way.
#[derive(Parser, Debug)]
#[command(name = "spider-sense")]
#[command(version)]
#[command(about = "A bounded-depth contact crawler", long_about = None)]
struct Cli {
    /// Seed URL (must start with http:// or https://)
    #[arg(value_name = "URL")]
    url: String,

    /// Crawl depth; 0 visits nothing, 1 visits only the seed
    #[arg(short, long, default_value = "2", allow_hyphen_values = true)]
    depth: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Write a markdown report to this path (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Print a progress line at this interval while crawling
    #[arg(long, value_name = "SECS")]
    progress_secs: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match load_config_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    // Overrides are re-validated by start_crawl
    if let Some(secs) = cli.timeout_secs {
        config.crawler.timeout_secs = secs;
    }

    let session = match start_crawl(&config, &cli.url, &cli.depth) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    // Ctrl-C is the stop button
    let cancel = session.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Stop requested, finishing the current page");
            cancel.cancel();
        }
    });

    let live = session.report();
    let finished = session.wait();
    tokio::pin!(finished);

    let result = match cli.progress_secs.filter(|secs| *secs > 0) {
        Some(secs) => {
            let mut ticker = tokio::time::interval(Duration::from_secs(secs));
            ticker.tick().await;
            loop {
                tokio::select! {
                    result = &mut finished => break result,
                    _ = ticker.tick() => print_progress(&live.snapshot()),
                }
            }
        }
        None => finished.await,
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            if !cli.quiet {
                print_failed_summary(&live.snapshot());
            }
            return Err(e.into());
        }
    };

    if !cli.quiet {
        print_summary(&summary);
    }

    let report_path = cli
        .report
        .or_else(|| config.output.report_path.as_ref().map(PathBuf::from));
    if let Some(path) = report_path {
        export_report(&summary.report, &path)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("spider_sense=info,warn"),
            1 => EnvFilter::new("spider_sense=debug,info"),
            2 => EnvFilter::new("spider_sense=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Writes the markdown report and tells the user where it went
fn export_report(
    report: &spider_sense::CrawlReport,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match write_markdown_report(report, path) {
        Ok(()) => {
            tracing::info!("Report saved to: {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to write report to {}: {}", path.display(), e);
            Err(e.into())
        }
    }
}
