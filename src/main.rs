//! # YC News List
//!
//! Scrapes the Hacker News front page into structured records and prints
//! them or exports them as CSV/JSON.
//!
//! ## Usage
//!
//! ```sh
//! yc_news_list --pages 2 --csv -o ./out
//! ```
//!
//! ## Architecture
//!
//! Each run is a straight composition of independent steps:
//! 1. **Fetch**: download listing pages (`HttpSource`)
//! 2. **Parse**: find the listing table and adapt its rows (`scrapers::ycombinator`)
//! 3. **Extract**: pair header and meta rows into records (`extractor`)
//! 4. **Output**: console, CSV and JSON sinks (`outputs`)
//!
//! Fetch and parse failures end the run with a non-zero exit status.
//! Malformed groups inside the table are dropped during extraction.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use yc_news_list::cli::Cli;
use yc_news_list::config::ScraperConfig;
use yc_news_list::outputs::{console, csv, json};
use yc_news_list::scrapers::{self, HttpSource};
use yc_news_list::utils::{ensure_writable_dir, output_path};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let started_at = Local::now();
    info!("yc_news_list starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match ScraperConfig::resolve(&args).await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(url = %config.url, pages = config.pages, mode = ?config.mode, "Configuration resolved");

    // Early check: only probe the output dir when a file sink is requested
    if args.csv || args.json {
        if let Err(e) = ensure_writable_dir(&args.output_dir).await {
            error!(
                path = %args.output_dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    // ---- Fetch, parse, extract ----
    let source = HttpSource::new(config.timeout(), &config.user_agent)?;
    let records = match scrapers::ycombinator::scrape_listing(&source, &config).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Scrape failed; nothing extracted");
            return Err(e.into());
        }
    };
    info!(count = records.len(), "Found news items");

    // ---- Sinks ----
    if !args.quiet {
        console::print_records(std::io::stdout().lock(), &records)?;
    }

    if args.csv {
        let path = output_path(&args.output_dir, started_at, "csv");
        match csv::write_records(&records, &path).await {
            Ok(path) => info!(path = %path.display(), "News data saved"),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed writing CSV");
                return Err(e.into());
            }
        }
    }

    if args.json {
        let path = output_path(&args.output_dir, started_at, "json");
        if let Err(e) = json::write_records(&records, &path).await {
            error!(path = %path.display(), error = %e, "Failed writing JSON");
            return Err(e.into());
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        records = records.len(),
        "Execution complete"
    );

    Ok(())
}
