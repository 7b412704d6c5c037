//! RSS 2.0 and Atom feed parsing.
//!
//! Feeds are read with a streaming `quick-xml` reader. Only the handful of
//! elements the page needs are captured:
//!
//! | Format | Feed title | Entry | Title | Link | Summary |
//! |--------|------------|-------|-------|------|---------|
//! | RSS 2.0 | `channel/title` | `item` | `title` | `link` text | `description` |
//! | Atom | `feed/title` | `entry` | `title` | `link@href` | `summary`, else `content` |
//!
//! Prefixed elements such as `media:description` or `atom:link` are ignored.

use crate::models::Article;
use crate::sources::normalize;
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use std::error::Error;
use tracing::debug;

/// A feed as it appears on the wire, before normalization.
#[derive(Debug, Default)]
pub struct ParsedFeed {
    /// Channel or feed title, used as the article source name.
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

/// One `item` or `entry`, raw text only.
#[derive(Debug, Default, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Atom `content`, used when there is no `summary`.
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    FeedTitle,
    Title,
    Link,
    Description,
    Content,
}

/// Parse an RSS or Atom document.
///
/// # Errors
///
/// Returns an error if the XML is malformed or the document has no
/// `channel` (RSS) or `feed` (Atom) element.
pub fn parse_feed(xml: &str) -> Result<ParsedFeed, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);

    let mut feed = ParsedFeed::default();
    let mut saw_root = false;
    let mut stack: Vec<String> = Vec::new();
    let mut entry: Option<FeedEntry> = None;
    // Field being captured and the stack depth of its element.
    let mut capture: Option<(Field, usize)> = None;
    let mut buf = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                let parent = stack.last().map(String::as_str);
                match name.as_str() {
                    "channel" | "feed" => saw_root = true,
                    "item" | "entry" => entry = Some(FeedEntry::default()),
                    _ => {}
                }
                if let Some(current) = entry.as_mut() {
                    if name == "link" {
                        take_atom_href(&e, current);
                    }
                }
                if capture.is_none() {
                    let field = match (name.as_str(), parent, entry.is_some()) {
                        ("title", Some("item" | "entry"), true) => Some(Field::Title),
                        ("link", Some("item" | "entry"), true) => Some(Field::Link),
                        ("description" | "summary", Some("item" | "entry"), true) => {
                            Some(Field::Description)
                        }
                        ("content", Some("entry"), true) => Some(Field::Content),
                        ("title", Some("channel" | "feed"), false) => Some(Field::FeedTitle),
                        _ => None,
                    };
                    if let Some(field) = field {
                        capture = Some((field, stack.len()));
                        buf.clear();
                    }
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                if let Some(current) = entry.as_mut() {
                    if element_name(&e) == "link" {
                        take_atom_href(&e, current);
                    }
                }
            }
            Event::Text(e) => {
                if capture.is_some() {
                    let raw = String::from_utf8_lossy(&e);
                    match unescape(&raw) {
                        Ok(text) => buf.push_str(&text),
                        Err(_) => buf.push_str(&raw),
                    }
                }
            }
            Event::CData(e) => {
                if capture.is_some() {
                    buf.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::GeneralRef(e) => {
                if capture.is_some() {
                    let name = String::from_utf8_lossy(&e);
                    if let Ok(Some(c)) = e.resolve_char_ref() {
                        buf.push(c);
                    } else if let Some(resolved) = resolve_predefined_entity(&name) {
                        buf.push_str(resolved);
                    } else {
                        // HTML entities such as `&nbsp;` are decoded later by `strip_html`.
                        buf.push('&');
                        buf.push_str(&name);
                        buf.push(';');
                    }
                }
            }
            Event::End(_) => {
                let name = stack.pop().unwrap_or_default();
                if let Some((field, depth)) = capture {
                    if depth == stack.len() {
                        let text = std::mem::take(&mut buf).trim().to_string();
                        store(field, text, &mut feed, entry.as_mut());
                        capture = None;
                    }
                }
                if name == "item" || name == "entry" {
                    if let Some(done) = entry.take() {
                        feed.entries.push(done);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err("document is neither an RSS channel nor an Atom feed".into());
    }
    debug!(entries = feed.entries.len(), title = ?feed.title, "Parsed feed");
    Ok(feed)
}

/// Normalize the first `size` entries of a parsed feed into articles.
///
/// Entries without a usable title are dropped after the size cut, so the
/// result can be shorter than `size` even when the feed is longer.
pub fn into_articles(feed: ParsedFeed, size: usize) -> Vec<Article> {
    let source = feed.title.unwrap_or_default();
    feed.entries
        .into_iter()
        .take(size)
        .filter_map(|entry| {
            let description = if entry.description.trim().is_empty() {
                entry.content
            } else {
                entry.description
            };
            normalize(&entry.title, &description, &entry.link, &source)
        })
        .collect()
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Atom links carry the URL in `href`; only `alternate` (or unqualified) links count.
fn take_atom_href(e: &BytesStart<'_>, entry: &mut FeedEntry) {
    if !entry.link.is_empty() {
        return;
    }
    let mut href = None;
    let mut rel = None;
    for attr in e.attributes().flatten() {
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape(&raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        match attr.key.as_ref() {
            b"href" => href = Some(value),
            b"rel" => rel = Some(value),
            _ => {}
        }
    }
    if let Some(href) = href {
        if matches!(rel.as_deref(), None | Some("alternate")) {
            entry.link = href;
        }
    }
}

fn store(field: Field, text: String, feed: &mut ParsedFeed, entry: Option<&mut FeedEntry>) {
    match (field, entry) {
        (Field::FeedTitle, _) => {
            if feed.title.is_none() && !text.is_empty() {
                feed.title = Some(text);
            }
        }
        (Field::Title, Some(entry)) => entry.title = text,
        (Field::Link, Some(entry)) => {
            if !text.is_empty() {
                entry.link = text;
            }
        }
        (Field::Description, Some(entry)) => {
            if entry.description.is_empty() {
                entry.description = text;
            }
        }
        (Field::Content, Some(entry)) => entry.content = text,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>NDTV News - Top Stories</title>
    <atom:link href="https://feeds.feedburner.com/ndtvnews-top-stories" rel="self"/>
    <image>
      <title>NDTV logo</title>
      <url>https://example.com/logo.png</url>
    </image>
    <item>
      <title>Rains lash Mumbai - NDTV</title>
      <link>https://www.ndtv.com/mumbai-news/rains-lash-mumbai</link>
      <description><![CDATA[<p>Heavy <b>rain</b> brought the city to a halt.</p>]]></description>
      <media:description>Photo caption that must be ignored</media:description>
    </item>
    <item>
      <title>Sensex &amp; Nifty close higher</title>
      <link>https://www.ndtv.com/business/markets?id=1&amp;ref=rss</link>
      <description>&lt;p&gt;Markets gained for a third day.&lt;/p&gt;</description>
    </item>
    <item>
      <title>   </title>
      <link>https://www.ndtv.com/empty</link>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>The Hindu - Sport</title>
  <entry>
    <title>India win the series</title>
    <link rel="self" href="https://example.com/self"/>
    <link rel="alternate" href="https://example.com/india-win"/>
    <content type="html">&lt;div&gt;A famous win at the Wankhede.&lt;/div&gt;</content>
  </entry>
  <entry>
    <title>Second story</title>
    <link href="https://example.com/second"/>
    <summary>Short summary.</summary>
    <content>Long content that is not used.</content>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_channel_and_items() {
        let feed = parse_feed(SAMPLE_RSS).expect("valid RSS");
        assert_eq!(feed.title.as_deref(), Some("NDTV News - Top Stories"));
        assert_eq!(feed.entries.len(), 3);

        let first = &feed.entries[0];
        assert_eq!(first.title, "Rains lash Mumbai - NDTV");
        assert_eq!(first.link, "https://www.ndtv.com/mumbai-news/rains-lash-mumbai");
        assert_eq!(first.description, "<p>Heavy <b>rain</b> brought the city to a halt.</p>");

        let second = &feed.entries[1];
        assert_eq!(second.title, "Sensex & Nifty close higher");
        assert_eq!(second.link, "https://www.ndtv.com/business/markets?id=1&ref=rss");
        assert_eq!(second.description, "<p>Markets gained for a third day.</p>");
    }

    #[test]
    fn test_rss_into_articles_normalizes_and_drops_untitled() {
        let feed = parse_feed(SAMPLE_RSS).unwrap();
        let articles = into_articles(feed, 5);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Rains lash Mumbai");
        assert_eq!(articles[0].description, "Heavy rain brought the city to a halt.");
        assert_eq!(articles[0].source, "NDTV News - Top Stories");
        assert_eq!(articles[1].description, "Markets gained for a third day.");
    }

    #[test]
    fn test_into_articles_cuts_before_filtering() {
        let feed = parse_feed(SAMPLE_RSS).unwrap();
        assert_eq!(into_articles(feed, 1).len(), 1);
    }

    #[test]
    fn test_parse_atom_feed() {
        let feed = parse_feed(SAMPLE_ATOM).expect("valid Atom");
        assert_eq!(feed.title.as_deref(), Some("The Hindu - Sport"));
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(feed.entries[0].link, "https://example.com/india-win");
        assert_eq!(feed.entries[1].link, "https://example.com/second");

        let articles = into_articles(feed, 5);
        assert_eq!(articles[0].description, "A famous win at the Wankhede.");
        assert_eq!(articles[1].description, "Short summary.");
    }

    #[test]
    fn test_empty_channel_yields_no_entries() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Empty</title></channel></rss>"#;
        let feed = parse_feed(xml).unwrap();
        assert!(feed.entries.is_empty());
        assert!(into_articles(feed, 5).is_empty());
    }

    #[test]
    fn test_references_in_text_are_resolved() {
        let xml = r#"<rss><channel><item>
            <title>Modi&#8217;s visit &#x2013; day two &amp; more</title>
            <description>Tickets&nbsp;sold &lt;b&gt;out&lt;/b&gt;</description>
        </item></channel></rss>"#;
        let feed = parse_feed(xml).unwrap();
        assert_eq!(feed.entries[0].title, "Modi\u{2019}s visit \u{2013} day two & more");
        assert_eq!(feed.entries[0].description, "Tickets&nbsp;sold <b>out</b>");

        let articles = into_articles(feed, 5);
        assert_eq!(articles[0].description, "Tickets sold out");
    }

    #[test]
    fn test_non_feed_document_is_an_error() {
        assert!(parse_feed("<html><body>Service unavailable</body></html>").is_err());
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        assert!(parse_feed("<rss><channel><item><title>Broken</item></channel></rss>").is_err());
    }

    #[test]
    fn test_missing_channel_title_falls_back_to_news() {
        let xml = r#"<rss><channel><item><title>Only item</title></item></channel></rss>"#;
        let articles = into_articles(parse_feed(xml).unwrap(), 5);
        assert_eq!(articles[0].source, "News");
        assert_eq!(articles[0].url, "#");
    }
}
