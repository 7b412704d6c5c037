//! Slot assignment and whole-page assembly.
//!
//! Which article lands where is fixed and order dependent:
//!
//! - **Hero**: `general[0]`, or a "No stories today." placeholder
//! - **Sidebar**: `[0]` of business, sports, technology (empty categories skipped)
//! - **Grid**: `general[1]`, `business[1]`, `entertainment[0]`, `technology[1]`,
//!   `sports[1]`, `entertainment[1]`, skipping missing entries, at most six
//!
//! Assembly is pure: the same articles and timestamp always give the same page.

use crate::categories::TICKER_ICONS;
use crate::models::{Article, ArticlesByCategory, Category};
use crate::outputs::cards::{CardSize, NO_STORIES, card};
use crate::outputs::template::{PAGE, STYLE, render};
use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use quick_xml::escape::escape;

/// Category whose lead story becomes the hero.
pub const PRIMARY: Category = Category::General;

/// Categories feeding the sidebar, in priority order.
pub const SIDEBAR_RECIPE: [Category; 3] = [Category::Business, Category::Sports, Category::Technology];

/// `(category, index)` pairs feeding the grid, in display order.
pub const GRID_RECIPE: [(Category, usize); 6] = [
    (Category::General, 1),
    (Category::Business, 1),
    (Category::Entertainment, 0),
    (Category::Technology, 1),
    (Category::Sports, 1),
    (Category::Entertainment, 1),
];

/// Maximum number of grid cards.
pub const GRID_SLOTS: usize = 6;

/// Maximum number of headlines in the ticker.
pub const TICKER_ITEMS: usize = 10;

/// An article placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slotted<'a> {
    pub article: &'a Article,
    pub category: Category,
    /// Icon rotation index for the card.
    pub index: usize,
}

/// Articles chosen for every slot of one page.
#[derive(Debug, Default)]
pub struct SlotAssignment<'a> {
    pub hero: Option<Slotted<'a>>,
    pub sidebar: Vec<Slotted<'a>>,
    pub grid: Vec<Slotted<'a>>,
}

/// Pick the articles for every slot.
pub fn assign_slots(by_category: &ArticlesByCategory) -> SlotAssignment<'_> {
    let hero = by_category.nth(PRIMARY, 0).map(|article| Slotted {
        article,
        category: PRIMARY,
        index: 0,
    });

    // Sidebar icons follow the recipe position, so a skipped category leaves a gap.
    let sidebar = SIDEBAR_RECIPE
        .iter()
        .enumerate()
        .filter_map(|(index, &category)| {
            by_category.nth(category, 0).map(|article| Slotted {
                article,
                category,
                index,
            })
        })
        .collect();

    let grid = GRID_RECIPE
        .iter()
        .filter_map(|&(category, nth)| by_category.nth(category, nth).map(|a| (category, a)))
        .take(GRID_SLOTS)
        .enumerate()
        .map(|(index, (category, article))| Slotted {
            article,
            category,
            index,
        })
        .collect();

    SlotAssignment { hero, sidebar, grid }
}

/// Scrolling headline strip, repeated twice for a seamless loop.
pub fn ticker(by_category: &ArticlesByCategory) -> String {
    let content = by_category
        .flatten()
        .take(TICKER_ITEMS)
        .enumerate()
        .filter(|(_, (_, article))| !article.title.is_empty())
        .map(|(i, (_, article))| {
            format!(
                r#"<span>{} {}</span><span class="sep">|</span>"#,
                TICKER_ICONS[i % TICKER_ICONS.len()],
                escape(&article.title)
            )
        })
        .join("");
    content.repeat(2)
}

/// Render the complete HTML document.
///
/// # Arguments
///
/// * `by_category` - Normalized articles per category
/// * `now` - Timestamp shown in the header, already in IST
///
/// # Returns
///
/// The full page. Missing categories leave gaps and an empty general list
/// puts the "No stories today." placeholder in the hero slot.
pub fn assemble(by_category: &ArticlesByCategory, now: DateTime<FixedOffset>) -> String {
    let slots = assign_slots(by_category);

    let hero = match slots.hero {
        Some(s) => card(s.article, s.category, s.index, CardSize::Large),
        None => NO_STORIES.to_string(),
    };
    let sidebar = slots
        .sidebar
        .iter()
        .map(|s| card(s.article, s.category, s.index, CardSize::Side))
        .join("");
    let grid = slots
        .grid
        .iter()
        .map(|s| card(s.article, s.category, s.index, CardSize::Small))
        .join("");

    let date = now.format("%A, %d %B %Y").to_string();
    let time = now.format("%I:%M %p").to_string();
    let total = by_category.total().to_string();
    let ticker = ticker(by_category);

    render(
        PAGE,
        &[
            ("style", STYLE),
            ("date", &date),
            ("ticker", &ticker),
            ("time", &time),
            ("total", &total),
            ("hero", &hero),
            ("sidebar", &sidebar),
            ("grid", &grid),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: format!("{title} explained in a few plain words."),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            source: "Mock Wire".to_string(),
        }
    }

    fn articles(prefix: &str, n: usize) -> Vec<Article> {
        (0..n).map(|i| article(&format!("{prefix} {i}"))).collect()
    }

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2025, 5, 6, 7, 5, 0)
            .unwrap()
    }

    fn count_slots(html: &str, slot: &str) -> usize {
        html.matches(&format!(r#"data-slot="{slot}""#)).count()
    }

    fn full() -> ArticlesByCategory {
        let mut by_category = ArticlesByCategory::new();
        by_category.insert(Category::General, articles("India", 5));
        by_category.insert(Category::Business, articles("Business", 4));
        by_category.insert(Category::Sports, articles("Sports", 3));
        by_category.insert(Category::Technology, articles("Tech", 2));
        by_category.insert(Category::Entertainment, articles("Film", 5));
        by_category
    }

    #[test]
    fn test_all_empty_renders_placeholder_only() {
        let by_category = ArticlesByCategory::new();
        let html = assemble(&by_category, now());

        assert!(html.contains("No stories today."));
        assert_eq!(count_slots(&html, "hero"), 0);
        assert_eq!(count_slots(&html, "sidebar"), 0);
        assert_eq!(count_slots(&html, "grid"), 0);
        assert!(html.contains(r#"<span class="story-count">0</span>"#));
    }

    #[test]
    fn test_primary_only_has_hero_and_no_sidebar() {
        let mut by_category = ArticlesByCategory::new();
        by_category.insert(Category::General, articles("India", 1));
        let html = assemble(&by_category, now());

        assert_eq!(count_slots(&html, "hero"), 1);
        assert_eq!(count_slots(&html, "sidebar"), 0);
        assert_eq!(count_slots(&html, "grid"), 0);
        assert!(!html.contains("No stories today."));
    }

    #[test]
    fn test_full_page_slot_counts_and_total() {
        let by_category = full();
        let html = assemble(&by_category, now());

        assert_eq!(count_slots(&html, "hero"), 1);
        assert!(count_slots(&html, "sidebar") <= 3);
        assert!(count_slots(&html, "grid") <= 6);
        assert_eq!(count_slots(&html, "sidebar"), 3);
        assert_eq!(count_slots(&html, "grid"), 6);
        assert!(html.contains(r#"<span class="story-count">19</span>"#));
    }

    #[test]
    fn test_grid_recipe_order() {
        let by_category = full();
        let slots = assign_slots(&by_category);
        let titles: Vec<_> = slots.grid.iter().map(|s| s.article.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["India 1", "Business 1", "Film 0", "Tech 1", "Sports 1", "Film 1"]
        );
        let indexes: Vec<_> = slots.grid.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_grid_skips_missing_entries() {
        let mut by_category = ArticlesByCategory::new();
        by_category.insert(Category::General, articles("India", 1));
        by_category.insert(Category::Business, articles("Business", 2));
        by_category.insert(Category::Entertainment, articles("Film", 1));
        let slots = assign_slots(&by_category);

        let picked: Vec<_> = slots
            .grid
            .iter()
            .map(|s| (s.category, s.article.title.as_str(), s.index))
            .collect();
        assert_eq!(
            picked,
            vec![
                (Category::Business, "Business 1", 0),
                (Category::Entertainment, "Film 0", 1),
            ]
        );
    }

    #[test]
    fn test_sidebar_skips_empty_but_keeps_recipe_index() {
        let mut by_category = ArticlesByCategory::new();
        by_category.insert(Category::Technology, articles("Tech", 1));
        let slots = assign_slots(&by_category);

        assert!(slots.hero.is_none());
        assert_eq!(slots.sidebar.len(), 1);
        assert_eq!(slots.sidebar[0].category, Category::Technology);
        assert_eq!(slots.sidebar[0].index, 2);
    }

    #[test]
    fn test_ticker_takes_first_ten_and_repeats() {
        let by_category = full();
        let ticker = ticker(&by_category);
        assert_eq!(ticker.matches(r#"<span class="sep">"#).count(), 20);
        assert!(ticker.contains("India 0"));
        assert!(ticker.contains("Business 3"));
        assert!(!ticker.contains("Sports 1"));
    }

    #[test]
    fn test_assemble_is_deterministic_and_dated() {
        let by_category = full();
        let a = assemble(&by_category, now());
        let b = assemble(&by_category, now());
        assert_eq!(a, b);
        assert!(a.contains("Tuesday, 06 May 2025"));
        assert!(a.contains("Updated today at 07:05 AM IST"));
        assert!(!a.contains("{{"));
    }
}
