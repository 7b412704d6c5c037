//! Text normalization, escaping and file system helpers.
//!
//! - Markup stripping and provider artifact removal for fetched text
//! - Word-budget truncation used by both the aggregator and the card renderer
//! - Headline cleanup (dropping the appended outlet name)
//! - Output directory validation
//! - Current time in Indian Standard Time

use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Marker appended by headline APIs to clipped content, e.g. `… [+2345 chars]`.
static TRUNCATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*…?\s*\[\+\d+\s*chars?\]").expect("valid truncation regex"));

/// UTC offset of Indian Standard Time (+05:30).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Current time in Indian Standard Time.
pub fn ist_now() -> DateTime<FixedOffset> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range");
    Utc::now().with_timezone(&ist)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Remove HTML tags and decode entities, returning plain text.
///
/// Whitespace is collapsed to single spaces.
pub fn strip_html(html: &str) -> String {
    if !html.contains('<') && !html.contains('&') {
        return collapse_whitespace(html);
    }
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<String>();
    collapse_whitespace(&text)
}

/// Remove `[+N chars]` style truncation markers.
pub fn strip_truncation_marker(text: &str) -> String {
    TRUNCATION_MARKER.replace_all(text, "").trim().to_string()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cap `text` to `max_words` words.
///
/// # Arguments
///
/// * `text` - Plain text to shorten
/// * `max_words` - Word budget
///
/// # Returns
///
/// Exactly `max_words` words followed by `...` when `text` is over budget,
/// otherwise `text` with whitespace collapsed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_words("one two three", 2), "one two...");
/// assert_eq!(clean_words("one  two", 5), "one two");
/// ```
pub fn clean_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        format!("{}...", words[..max_words].join(" "))
    } else {
        words.join(" ")
    }
}

/// Keep the leading segment of a title before the first `" - "`.
///
/// Feeds commonly append the outlet name, e.g. `"Rains lash Mumbai - NDTV"`.
pub fn headline(title: &str) -> String {
    title.split(" - ").next().unwrap_or_default().trim().to_string()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
