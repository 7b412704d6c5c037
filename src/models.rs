//! Data models for fetched articles and the edition they are rendered into.
//!
//! - [`Category`]: the closed set of news verticals the page covers
//! - [`Article`]: a normalized story produced by the aggregator
//! - [`ArticlesByCategory`]: per-category article lists handed to the page assembler
//! - [`Edition`]: serializable snapshot of one run, used for the JSON output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A news vertical with its own sources and styling.
///
/// The declaration order is the canonical order used for fetching, for the
/// ticker and for the total story count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Business,
    Sports,
    Technology,
    Entertainment,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Business,
        Category::Sports,
        Category::Technology,
        Category::Entertainment,
    ];

    /// The lowercase key used in config files, logs and the headlines API.
    pub fn key(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A normalized news story.
///
/// Text fields are already stripped of markup and provider artifacts; the
/// title is cut at the first `" - "` and the description is capped to the
/// aggregator's word budget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// Headline without the trailing outlet name.
    pub title: String,
    /// Plain-text summary, possibly empty.
    pub description: String,
    /// Link to the full story, `#` when the source gave none.
    pub url: String,
    /// Human-readable outlet name.
    pub source: String,
}

/// Fetched articles keyed by category.
///
/// A missing key and an empty list mean the same thing.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ArticlesByCategory(BTreeMap<Category, Vec<Article>>);

impl ArticlesByCategory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, articles: Vec<Article>) {
        self.0.insert(category, articles);
    }

    /// Articles for `category`, empty when nothing was fetched.
    pub fn get(&self, category: Category) -> &[Article] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Article at `index` within `category`, if present.
    pub fn nth(&self, category: Category, index: usize) -> Option<&Article> {
        self.get(category).get(index)
    }

    /// Sum of article counts across every category.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Every article in canonical category order.
    pub fn flatten(&self) -> impl Iterator<Item = (Category, &Article)> {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |a| (c, a)))
    }
}

/// A snapshot of one generated edition.
///
/// Serialized next to the HTML page when a JSON output path is configured.
#[derive(Debug, Deserialize, Serialize)]
pub struct Edition {
    /// The date of publication in `YYYY-MM-DD` format (IST).
    pub local_date: String,
    /// The local publication time in `HH:MM` format (IST).
    pub local_time: String,
    /// Number of stories across all categories.
    pub total_stories: usize,
    /// The fetched articles.
    pub categories: ArticlesByCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: "#".to_string(),
            source: "News".to_string(),
        }
    }

    #[test]
    fn test_missing_category_is_empty() {
        let by_cat = ArticlesByCategory::new();
        assert!(by_cat.get(Category::Sports).is_empty());
        assert_eq!(by_cat.nth(Category::Sports, 0), None);
        assert_eq!(by_cat.total(), 0);
    }

    #[test]
    fn test_total_and_flatten_order() {
        let mut by_cat = ArticlesByCategory::new();
        by_cat.insert(Category::Entertainment, vec![article("e1")]);
        by_cat.insert(Category::General, vec![article("g1"), article("g2")]);

        assert_eq!(by_cat.total(), 3);
        let order: Vec<_> = by_cat.flatten().map(|(_, a)| a.title.as_str()).collect();
        assert_eq!(order, vec!["g1", "g2", "e1"]);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, "\"technology\"");
        let parsed: Category = serde_json::from_str("\"entertainment\"").unwrap();
        assert_eq!(parsed, Category::Entertainment);
    }

    #[test]
    fn test_edition_serialization() {
        let mut categories = ArticlesByCategory::new();
        categories.insert(Category::General, vec![article("Rains lash Mumbai")]);
        let edition = Edition {
            local_date: "2025-05-06".to_string(),
            local_time: "07:00".to_string(),
            total_stories: 1,
            categories,
        };

        let json = serde_json::to_string(&edition).unwrap();
        assert!(json.contains("2025-05-06"));
        assert!(json.contains("\"general\":[{"));
        assert!(json.contains("Rains lash Mumbai"));
    }
}
