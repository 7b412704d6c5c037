//! Command-line interface definitions for DUH News.
//!
//! Every option has a default, so running the binary with no arguments
//! performs a normal run. Most options can also be set from the environment.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the DUH News page generator.
///
/// # Examples
///
/// ```sh
/// # Fetch from the built-in RSS feeds and write ./index.html
/// duh_news
///
/// # Prefer the headlines API, keep a JSON snapshot
/// NEWS_API_KEY=... duh_news -o site/index.html -j site/edition.json
///
/// # Override feed lists
/// duh_news --config feeds.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the HTML page to (over)write
    #[arg(short, long, env = "DUH_OUTPUT", default_value = "index.html")]
    pub output: PathBuf,

    /// Optional path for a JSON snapshot of the fetched articles
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,

    /// Optional YAML file overriding the per-category feed lists
    #[arg(short, long, env = "DUH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of articles kept per category
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    pub size: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// API key for the top-headlines API; when set it is tried before the RSS feeds
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,
}
