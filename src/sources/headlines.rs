//! Top-headlines API client (newsapi.org).
//!
//! The API is queried per category for Indian headlines:
//!
//! ```text
//! GET https://newsapi.org/v2/top-headlines?country=in&category=<key>&pageSize=<n>&apiKey=<key>
//! ```
//!
//! Descriptions from this API often end in a `[+N chars]` marker; it is
//! removed during normalization.

use crate::models::Article;
use crate::sources::normalize;
use serde::Deserialize;
use std::error::Error;

const TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";
const COUNTRY: &str = "in";
/// Title the API substitutes for articles pulled by the publisher.
const REMOVED_TITLE: &str = "[Removed]";

#[derive(Debug, Deserialize)]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<HeadlineArticle>,
}

#[derive(Debug, Deserialize)]
pub struct HeadlineArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub source: Option<HeadlineSource>,
}

#[derive(Debug, Deserialize)]
pub struct HeadlineSource {
    pub name: Option<String>,
}

/// Build the request URL for `category_key`.
pub fn request_url(category_key: &str, size: usize, api_key: &str) -> String {
    format!(
        "{}?country={}&category={}&pageSize={}&apiKey={}",
        TOP_HEADLINES_URL,
        COUNTRY,
        urlencoding::encode(category_key),
        size,
        urlencoding::encode(api_key)
    )
}

/// Parse a top-headlines JSON body into at most `size` articles.
///
/// # Errors
///
/// Returns an error for malformed JSON or a response whose `status` is not `ok`.
pub fn parse_headlines(body: &str, size: usize) -> Result<Vec<Article>, Box<dyn Error>> {
    let response: HeadlinesResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        return Err(format!(
            "headlines API returned status {} ({}): {}",
            response.status,
            response.code.as_deref().unwrap_or("unknown"),
            response.message.as_deref().unwrap_or("no message")
        )
        .into());
    }

    Ok(response
        .articles
        .into_iter()
        .take(size)
        .filter(|a| a.title.as_deref().map(str::trim) != Some(REMOVED_TITLE))
        .filter_map(|a| {
            let description = a
                .description
                .filter(|d| !d.trim().is_empty())
                .or(a.content)
                .unwrap_or_default();
            let source = a.source.and_then(|s| s.name).unwrap_or_default();
            normalize(
                a.title.as_deref().unwrap_or_default(),
                &description,
                a.url.as_deref().unwrap_or_default(),
                &source,
            )
        })
        .collect())
}
