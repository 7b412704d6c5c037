//! News sources and the fetcher that reads them.
//!
//! A [`Source`] is either an RSS/Atom feed URL or a category key on the
//! top-headlines API. Retrieval goes through the [`FetchSource`] trait so the
//! aggregator can be driven by a scripted fetcher in tests.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | RSS 2.0 / Atom | [`rss`] | XML feed | No credentials needed |
//! | newsapi.org | [`headlines`] | JSON API | Requires `NEWS_API_KEY` |
//!
//! Every article leaving this module has passed through [`normalize`].

pub mod headlines;
pub mod rss;

use crate::models::Article;
use crate::utils::{clean_words, headline, strip_html, strip_truncation_marker, truncate_for_log};
use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Word budget for descriptions stored on an [`Article`].
pub const DESCRIPTION_WORD_BUDGET: usize = 40;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One place articles for a category can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An RSS 2.0 or Atom feed URL.
    Feed(String),
    /// A category key on the top-headlines API.
    Headlines(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Feed(url) => write!(f, "{url}"),
            Source::Headlines(key) => write!(f, "headlines:{key}"),
        }
    }
}

/// Retrieval of articles from a single [`Source`].
///
/// Implementors return at most `size` normalized articles, or an error when
/// the source could not be read.
pub trait FetchSource {
    async fn fetch_source(&self, source: &Source, size: usize) -> Result<Vec<Article>, Box<dyn Error>>;
}

/// HTTP implementation of [`FetchSource`].
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    news_api_key: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher whose requests each time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(timeout: Duration, news_api_key: Option<String>) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            news_api_key,
        })
    }

    /// Whether a headlines API credential is configured.
    pub fn has_news_api_key(&self) -> bool {
        self.news_api_key.is_some()
    }

    async fn get_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            preview = %truncate_for_log(&body, 120),
            "Downloaded source"
        );
        Ok(body)
    }
}

impl FetchSource for HttpFetcher {
    #[instrument(level = "info", skip(self, source), fields(%source))]
    async fn fetch_source(&self, source: &Source, size: usize) -> Result<Vec<Article>, Box<dyn Error>> {
        match source {
            Source::Feed(url) => {
                let body = self.get_text(url).await?;
                let feed = rss::parse_feed(&body)?;
                Ok(rss::into_articles(feed, size))
            }
            Source::Headlines(key) => {
                let api_key = self
                    .news_api_key
                    .as_deref()
                    .ok_or("no headlines API key configured")?;
                let url = headlines::request_url(key, size, api_key);
                // The API answers errors with a JSON body, so the status is not checked here.
                let body = self.client.get(&url).send().await?.text().await?;
                headlines::parse_headlines(&body, size)
            }
        }
    }
}

/// Build an [`Article`] from raw feed text.
///
/// Markup and truncation markers are stripped from every field, the title is
/// cut at the first `" - "` and the description is capped at
/// [`DESCRIPTION_WORD_BUDGET`] words.
///
/// # Returns
///
/// `None` when no title remains, otherwise the article with an empty `url`
/// replaced by `#` and an empty `source` by `News`.
pub fn normalize(title: &str, description: &str, url: &str, source: &str) -> Option<Article> {
    let title = headline(&strip_truncation_marker(&strip_html(title)));
    if title.is_empty() {
        return None;
    }
    let description = clean_words(
        &strip_truncation_marker(&strip_html(description)),
        DESCRIPTION_WORD_BUDGET,
    );
    let url = url.trim();
    let source = strip_html(source);
    Some(Article {
        title,
        description,
        url: if url.is_empty() { "#".to_string() } else { url.to_string() },
        source: if source.is_empty() { "News".to_string() } else { source },
    })
}
