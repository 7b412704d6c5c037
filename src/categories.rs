//! Static per-category lookup tables.
//!
//! Everything the page needs to know about a category that is not fetched at
//! runtime lives here: default feed URLs, badge label and CSS class, the
//! rotating icon set and the "why it matters" blurb.

use crate::models::Category;

/// Immutable configuration for a single category.
#[derive(Debug)]
pub struct CategoryConfig {
    /// Badge text shown on every card of this category.
    pub label: &'static str,
    /// CSS class that colours the badge.
    pub badge: &'static str,
    /// Icons rotated through by slot index.
    pub icons: &'static [&'static str],
    pub why_label: &'static str,
    pub why_text: &'static str,
    /// Default RSS feeds, tried in order.
    pub feeds: &'static [&'static str],
}

impl CategoryConfig {
    /// Icon for the card at `index`, wrapping around the icon set.
    pub fn icon(&self, index: usize) -> &'static str {
        self.icons[index % self.icons.len()]
    }
}

static GENERAL: CategoryConfig = CategoryConfig {
    label: "🇮🇳 India",
    badge: "b-india",
    icons: &["🇮🇳", "📰", "🏛️", "⚡", "🔔"],
    why_label: "🇮🇳 Why it matters",
    why_text: "This story affects India and its people directly.",
    feeds: &[
        "https://feeds.feedburner.com/ndtvnews-top-stories",
        "https://timesofindia.indiatimes.com/rssfeedstopstories.cms",
        "https://www.thehindu.com/news/national/feeder/default.rss",
    ],
};

static BUSINESS: CategoryConfig = CategoryConfig {
    label: "💼 Business",
    badge: "b-biz",
    icons: &["💼", "📈", "💰", "🏦", "💹"],
    why_label: "💰 For your wallet",
    why_text: "Keep an eye on how this affects markets and your money.",
    feeds: &[
        "https://feeds.feedburner.com/ndtvnews-business",
        "https://timesofindia.indiatimes.com/rssfeeds/1898055.cms",
        "https://www.thehindu.com/business/feeder/default.rss",
    ],
};

static SPORTS: CategoryConfig = CategoryConfig {
    label: "🏏 Sports",
    badge: "b-sports",
    icons: &["🏏", "⚽", "🏆", "🥇", "🎯"],
    why_label: "🏆 For fans",
    why_text: "Here's what this means for Indian sports.",
    feeds: &[
        "https://feeds.feedburner.com/ndtvnews-sports",
        "https://timesofindia.indiatimes.com/rssfeeds/4719161.cms",
        "https://www.thehindu.com/sport/feeder/default.rss",
    ],
};

static TECHNOLOGY: CategoryConfig = CategoryConfig {
    label: "📱 Tech",
    badge: "b-tech",
    icons: &["📱", "💻", "🤖", "🚀", "🔬"],
    why_label: "📱 For you",
    why_text: "This could change how you use technology soon.",
    feeds: &[
        "https://feeds.feedburner.com/ndtvnews-tech",
        "https://timesofindia.indiatimes.com/rssfeeds/-2128672765.cms",
    ],
};

static ENTERTAINMENT: CategoryConfig = CategoryConfig {
    label: "🎬 Entertainment",
    badge: "b-life",
    icons: &["🎬", "🎵", "⭐", "🎭", "🎪"],
    why_label: "🍿 In short",
    why_text: "Here's the scoop from the world of entertainment.",
    feeds: &[
        "https://feeds.feedburner.com/ndtvnews-entertainment",
        "https://timesofindia.indiatimes.com/rssfeeds/1081479906.cms",
    ],
};

/// Look up the static configuration for `category`.
pub fn config(category: Category) -> &'static CategoryConfig {
    match category {
        Category::General => &GENERAL,
        Category::Business => &BUSINESS,
        Category::Sports => &SPORTS,
        Category::Technology => &TECHNOLOGY,
        Category::Entertainment => &ENTERTAINMENT,
    }
}

/// Icons rotated through by the headline ticker.
pub const TICKER_ICONS: &[&str] = &["📰", "⚡", "🔔", "🌟", "💡", "🗞️", "📣", "🔴"];
