//! Feed configuration: built-in feed table plus optional YAML overrides.
//!
//! The override file only needs to mention the categories it changes:
//!
//! ```yaml
//! feeds:
//!   general:
//!     - https://feeds.feedburner.com/ndtvnews-top-stories
//!   sports: []
//! ```
//!
//! Categories left out keep the built-in list from [`crate::categories`].

use crate::categories;
use crate::models::Category;
use crate::sources::Source;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Contents of the YAML override file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Replacement feed lists, keyed by category.
    #[serde(default)]
    pub feeds: BTreeMap<Category, Vec<String>>,
}

/// Parse and validate an override document.
///
/// # Errors
///
/// Returns an error for invalid YAML, unknown keys or categories, and for
/// feed entries that are not absolute `http(s)` URLs.
pub fn parse_config(text: &str) -> Result<FileConfig, Box<dyn Error>> {
    let config: FileConfig = serde_yaml::from_str(text)?;
    for (category, urls) in &config.feeds {
        for raw in urls {
            let url = Url::parse(raw).map_err(|e| format!("{category}: invalid feed URL {raw:?}: {e}"))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!("{category}: feed URL {raw:?} must use http or https").into());
            }
        }
    }
    Ok(config)
}

/// Read and validate the override file at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_config(path: &Path) -> Result<FileConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path).await?;
    let config = parse_config(&text)?;
    info!(overridden = config.feeds.len(), "Loaded feed overrides");
    Ok(config)
}

/// Ordered source lists for every category.
#[derive(Debug)]
pub struct SourceTable {
    overrides: BTreeMap<Category, Vec<String>>,
    use_headlines: bool,
}

impl SourceTable {
    /// Build the table from optional overrides.
    ///
    /// With `use_headlines` set, the headlines API is tried before any feed.
    pub fn new(config: Option<FileConfig>, use_headlines: bool) -> Self {
        Self {
            overrides: config.map(|c| c.feeds).unwrap_or_default(),
            use_headlines,
        }
    }

    /// Sources for `category` in priority order.
    pub fn sources(&self, category: Category) -> Vec<Source> {
        let mut sources = Vec::new();
        if self.use_headlines {
            sources.push(Source::Headlines(category.key().to_string()));
        }
        match self.overrides.get(&category) {
            Some(urls) => sources.extend(urls.iter().cloned().map(Source::Feed)),
            None => sources.extend(
                categories::config(category)
                    .feeds
                    .iter()
                    .map(|url| Source::Feed(url.to_string())),
            ),
        }
        sources
    }
}
