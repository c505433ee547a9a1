//! Sumi-Sitemap main entry point
//!
//! Command-line inspection tool: reads a sitemap document from a file,
//! detects (or is told) its format, and prints the validated in-scope
//! links one per line.

use clap::Parser;
use std::path::PathBuf;
use sumi_sitemap::{detect, Sitemap, SitemapFormat};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Sumi-Sitemap: sitemap link inspection
///
/// Reads a sitemap document (XML sitemap, RSS 2.0 feed, or plain-text link
/// list), validates the links it claims against the sitemap's own directory,
/// and prints the surviving links.
#[derive(Parser, Debug)]
#[command(name = "sumi-sitemap")]
#[command(version = "1.0.0")]
#[command(about = "Sitemap link inspection", long_about = None)]
struct Cli {
    /// Path to the sitemap document to inspect
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// URL the document was retrieved from (defines the link scope)
    #[arg(short, long, value_name = "URL")]
    location: Url,

    /// Read the document as a specific format (xml, rss, txt) instead of auto-detecting
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<SitemapFormat>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Reading sitemap document from: {}", cli.document.display());
    let content = std::fs::read_to_string(&cli.document)?;

    let sitemap = match cli.format {
        Some(format) => {
            tracing::info!("Reading document as {} (auto-detection disabled)", format);
            Sitemap::new(format, cli.location.clone(), content)?
        }
        None => detect(&cli.location, &content)?,
    };

    tracing::info!(
        "Document at {} read as {}: {} valid links",
        sitemap.location(),
        sitemap.format(),
        sitemap.links().len()
    );

    for link in sitemap.links() {
        println!("{}", link);
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
            0 => EnvFilter::new("sumi_sitemap=info,warn"),
            1 => EnvFilter::new("sumi_sitemap=debug,info"),
            2 => EnvFilter::new("sumi_sitemap=trace,debug"),
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
