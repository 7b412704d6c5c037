//! Per-category article aggregation with first-success fallback.
//!
//! Sources for a category are tried strictly in order, one at a time. The
//! first source that yields at least one article wins and the remaining
//! sources are never contacted. Failing sources are logged and skipped; they
//! are not retried within a run.

use crate::config::SourceTable;
use crate::models::{Article, ArticlesByCategory, Category};
use crate::sources::{FetchSource, Source};
use std::error::Error;
use std::fmt;
use tracing::{error, info, instrument, warn};

/// Raised when no category produced a single article.
#[derive(Debug)]
pub struct NoArticlesError;

impl fmt::Display for NoArticlesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no articles fetched from any source; check internet connectivity")
    }
}

impl Error for NoArticlesError {}

/// Fetch at most `size` articles for `category` from `sources`.
///
/// # Arguments
///
/// * `fetcher` - Reads a single source
/// * `category` - Category being filled, used for logging
/// * `sources` - Candidate sources in priority order
/// * `size` - Maximum number of articles to keep
///
/// # Returns
///
/// The articles of the first source that yields any, cut to `size`. An empty
/// list when every source fails or yields nothing.
#[instrument(level = "info", skip(fetcher, sources), fields(sources = sources.len()))]
pub async fn fetch<F: FetchSource>(
    fetcher: &F,
    category: Category,
    sources: &[Source],
    size: usize,
) -> Vec<Article> {
    for source in sources {
        match fetcher.fetch_source(source, size).await {
            Ok(mut articles) if !articles.is_empty() => {
                articles.truncate(size);
                info!(%source, count = articles.len(), "Source produced articles");
                return articles;
            }
            Ok(_) => warn!(%source, "Source produced no articles; trying next"),
            Err(e) => warn!(%source, error = %e, "Could not fetch source; trying next"),
        }
    }
    warn!("No source produced articles for this category");
    Vec::new()
}

/// Fetch every category in canonical order.
///
/// # Arguments
///
/// * `fetcher` - Reads a single source
/// * `table` - Ordered sources per category
/// * `size` - Maximum number of articles per category
///
/// # Returns
///
/// Articles for every category, possibly empty for some of them.
///
/// # Errors
///
/// Returns [`NoArticlesError`] when the total across all categories is zero.
#[instrument(level = "info", skip_all, fields(size = size))]
pub async fn fetch_all<F: FetchSource>(
    fetcher: &F,
    table: &SourceTable,
    size: usize,
) -> Result<ArticlesByCategory, Box<dyn Error>> {
    let mut by_category = ArticlesByCategory::new();
    for category in Category::ALL {
        let articles = fetch(fetcher, category, &table.sources(category), size).await;
        info!(%category, count = articles.len(), "Fetched category");
        by_category.insert(category, articles);
    }

    let total = by_category.total();
    if total == 0 {
        error!("No articles fetched from any feed");
        return Err(Box::new(NoArticlesError));
    }
    info!(total, "Aggregation complete");
    Ok(by_category)
}
