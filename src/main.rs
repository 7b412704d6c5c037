//! # DUH News
//!
//! A run-once static page generator for jargon-free Indian news. It pulls a
//! handful of stories per category from RSS feeds (or a top-headlines API),
//! cleans and trims the text, places the stories into fixed page slots and
//! writes a single self-contained HTML file.
//!
//! ## Usage
//!
//! ```sh
//! duh_news -o ./index.html
//! ```
//!
//! ## Architecture
//!
//! The run is a straight pipeline, executed sequentially:
//! 1. **Configuration**: CLI flags, optional YAML feed overrides, optional API key
//! 2. **Aggregation**: per category, try sources in order until one yields articles
//! 3. **Assembly**: assign articles to hero, sidebar and grid slots and render HTML
//! 4. **Output**: atomically replace the page, optionally write a JSON snapshot
//!
//! A run that fetches no articles at all fails before anything is written.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregator;
mod categories;
mod cli;
mod config;
mod models;
mod outputs;
mod sources;
mod utils;

use cli::Cli;
use config::SourceTable;
use models::Edition;
use outputs::{html, json, page};
use sources::HttpFetcher;
use utils::{ensure_writable_dir, ist_now};

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(version = env!("CARGO_PKG_VERSION"), "duh_news starting up");

    let args = Cli::parse();
    debug!(output = %args.output.display(), json_output = ?args.json_output, size = args.size, "Parsed CLI arguments");

    // ---- Configuration ----
    let file_config = match &args.config {
        Some(path) => match config::load_config(path).await {
            Ok(c) => Some(c),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Could not load feed configuration");
                return Err(e);
            }
        },
        None => None,
    };

    // Early check: fail before any network traffic if the page cannot be written
    let output_dir = html::parent_dir(&args.output);
    if let Err(e) = ensure_writable_dir(&output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs), args.news_api_key.clone())?;
    let table = SourceTable::new(file_config, fetcher.has_news_api_key());
    info!(headlines_api = fetcher.has_news_api_key(), "Fetching news");

    // ---- Aggregate ----
    let by_category = match aggregator::fetch_all(&fetcher, &table, usize::from(args.size)).await {
        Ok(by_category) => by_category,
        Err(e) => {
            error!(error = %e, "Nothing to publish; leaving existing page untouched");
            return Err(e);
        }
    };
    let total = by_category.total();

    // ---- Assemble & write ----
    let now = ist_now();
    let page_html = page::assemble(&by_category, now);
    html::write_page(&args.output, &page_html).await?;

    if let Some(json_path) = &args.json_output {
        let edition = Edition {
            local_date: now.format("%Y-%m-%d").to_string(),
            local_time: now.format("%H:%M").to_string(),
            total_stories: total,
            categories: by_category,
        };
        if let Err(e) = json::write_edition(&edition, json_path).await {
            error!(path = %json_path.display(), error = %e, "Failed to write JSON edition");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        total,
        path = %args.output.display(),
        at = %now.format("%H:%M IST"),
        "Execution complete"
    );

    Ok(())
}
