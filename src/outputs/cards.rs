//! Markup fragments for individual stories.
//!
//! Each slot size has its own fragment and description budget:
//!
//! | Size | Used for | Description words | Why box | Footer |
//! |------|----------|-------------------|---------|--------|
//! | [`CardSize::Large`] | hero | 40 | yes | yes |
//! | [`CardSize::Side`] | sidebar | 20 | no | no |
//! | [`CardSize::Small`] | grid | 25 | yes | no |
//!
//! Every fragment carries a `data-slot` attribute naming the slot it fills.

use crate::categories;
use crate::models::{Article, Category};
use crate::utils::clean_words;
use quick_xml::escape::escape;
use std::fmt::Write;

/// Visual size of a story card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Side,
    Small,
}

impl CardSize {
    /// Maximum description length in words.
    pub fn word_budget(self) -> usize {
        match self {
            CardSize::Large => 40,
            CardSize::Side => 20,
            CardSize::Small => 25,
        }
    }

    /// Value of the fragment's `data-slot` attribute.
    pub fn slot_name(self) -> &'static str {
        match self {
            CardSize::Large => "hero",
            CardSize::Side => "sidebar",
            CardSize::Small => "grid",
        }
    }
}

/// Placeholder rendered in the hero slot when there is no primary story.
pub const NO_STORIES: &str = r#"<p class="no-stories">No stories today.</p>"#;

/// Render one story card.
///
/// # Arguments
///
/// * `article` - Story to render
/// * `category` - Category supplying the badge, icons and "why" box
/// * `index` - Picks the category icon (`index mod icon count`)
/// * `size` - Slot the card fills
///
/// # Returns
///
/// An HTML fragment with every article value escaped.
pub fn card(article: &Article, category: Category, index: usize, size: CardSize) -> String {
    let cfg = categories::config(category);
    let icon = cfg.icon(index);
    let title = escape(&article.title);
    let url = escape(&article.url);
    let source = escape(&article.source);
    let badge = format!(r#"<span class="badge {}">{}</span>"#, cfg.badge, cfg.label);
    let why = format!(
        r#"<div class="why-box"><strong>{}:</strong> {}</div>"#,
        cfg.why_label,
        escape(cfg.why_text)
    );
    let description = clean_words(&article.description, size.word_budget());
    let slot = size.slot_name();

    let mut html = String::new();
    match size {
        CardSize::Large => {
            let text = if description.is_empty() {
                "Click to read the full story.".to_string()
            } else {
                escape(&description).into_owned()
            };
            write!(
                html,
                r#"
    <div class="card" data-slot="{slot}" onclick="window.open(this.dataset.href,'_blank')" data-href="{url}">
      <div class="card-emoji">{icon}</div>
      <div class="card-body">
        {badge}
        <div class="card-headline">{title}</div>
        <div class="card-text">{text}</div>
        {why}
        <div class="card-footer">
          <span class="read-time">📰 {source}</span>
          <a href="{url}" target="_blank" class="read-more">Read full story →</a>
        </div>
      </div>
    </div>"#
            )
            .unwrap();
        }
        CardSize::Side => {
            let text = if description.is_empty() {
                "Click to read more.".to_string()
            } else {
                escape(&description).into_owned()
            };
            write!(
                html,
                r#"
      <div class="side-card" data-slot="{slot}" onclick="window.open(this.dataset.href,'_blank')" data-href="{url}">
        <div class="side-emoji">{icon}</div>
        <div class="side-content">
          {badge}
          <div class="side-headline">{title}</div>
          <div class="side-text">{text}</div>
        </div>
      </div>"#
            )
            .unwrap();
        }
        CardSize::Small => {
            let text = if description.is_empty() {
                "Click to read the full story.".to_string()
            } else {
                escape(&description).into_owned()
            };
            write!(
                html,
                r#"
    <div class="card card-sm" data-slot="{slot}" onclick="window.open(this.dataset.href,'_blank')" data-href="{url}">
      <div class="card-emoji">{icon}</div>
      <div class="card-body card-body-sm">
        {badge}
        <div class="card-headline">{title}</div>
        <div class="card-text">{text}</div>
        {why}
      </div>
    </div>"#
            )
            .unwrap();
        }
    }
    html
}
