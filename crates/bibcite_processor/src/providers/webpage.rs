/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Metadata scraped from an arbitrary web page.

use bibcite_core::reference::date::today;
use bibcite_core::{build_authors, Content, DateObject, ItemType};
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

const AUTHOR_META: &str = r#"meta[name="author"], meta[name="article:author"]"#;
const BYLINE: &str = r#"span.last-byline[itemprop="name"]"#;

/// Meta tags holding a publication date, in order of preference.
const DATE_META: [&str; 6] = [
    r#"meta[name="date"]"#,
    r#"meta[name="article:published_time"]"#,
    r#"meta[property="article:published_time"]"#,
    r#"meta[name="article:modified_time"]"#,
    r#"meta[property="article:modified_time"]"#,
    r#"meta[name="og:updated_time"]"#,
];

/// Elements naming the canonical URL, and the attribute that holds it.
const URL_SOURCES: [(&str, &str); 3] = [
    (r#"meta[property="og:url"]"#, "content"),
    (r#"meta[name="url"]"#, "content"),
    (r#"link[rel="canonical"]"#, "href"),
];

pub fn normalize(html: &str, url: &str) -> Content {
    normalize_at(html, url, today())
}

/// Normalize the HTML fetched from `url`, stamping `accessed` with `today`.
pub fn normalize_at(html: &str, url: &str, today: NaiveDate) -> Content {
    let document = Html::parse_document(html);

    let issued_text = DATE_META
        .iter()
        .find_map(|css| attr(&document, css, "content"))
        .or_else(|| text(&document, ".publication-date"));
    let issued = issued_text.as_deref().and_then(|date| {
        let parsed = DateObject::parse(date);
        if parsed.is_none() {
            warn!(date, "unreadable publication date");
        }
        parsed
    });

    let canonical = URL_SOURCES
        .iter()
        .find_map(|(css, name)| attr(&document, css, name))
        .unwrap_or_else(|| url.trim().to_string());

    let content = Content {
        item_type: Some(ItemType::Webpage),
        title: text(&document, "title"),
        author: build_authors(&author_names(&document)),
        container_title: attr(&document, r#"meta[property="og:site_name"]"#, "content"),
        publisher: attr(&document, r#"meta[property="article:publisher"]"#, "content"),
        issued,
        accessed: Some(DateObject::from(today)),
        url: Some(canonical),
        ..Default::default()
    };
    debug!(url, authors = content.author.len(), "normalized web page");
    content
}

fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(e) => {
            warn!(css, error = %e, "invalid selector");
            Vec::new()
        }
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first matching element, if not blank.
fn text(document: &Html, css: &str) -> Option<String> {
    select(document, css)
        .first()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

/// A non-blank attribute of the first matching element.
fn attr(document: &Html, css: &str, name: &str) -> Option<String> {
    select(document, css)
        .iter()
        .find_map(|element| element.value().attr(name))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Byline names from rel=author links, author meta tags and byline spans,
/// first occurrence kept.
fn author_names(document: &Html) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let linked = select(document, r#".author[rel="author"]"#);
    let meta = select(document, AUTHOR_META);
    let bylines = select(document, BYLINE);

    let candidates = linked
        .iter()
        .map(element_text)
        .chain(
            meta.iter()
                .filter_map(|e| e.value().attr("content"))
                .map(|s| s.trim().to_string()),
        )
        .chain(bylines.iter().map(element_text));
    for name in candidates {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    const ARTICLE: &str = r#"<!doctype html>
<html><head>
  <title>How Rust Works</title>
  <meta name="author" content="Jane Q Public">
  <meta name="article:author" content="Jane Q Public">
  <meta property="og:site_name" content="Example News">
  <meta property="article:publisher" content="Example Media">
  <meta property="article:published_time" content="2021-03-04T10:15:00Z">
  <meta property="og:url" content="https://news.example.com/rust">
  <link rel="canonical" href="https://example.com/canonical">
</head><body>
  <a class="author" rel="author" href="/staff/sam">Sam   Smith</a>
</body></html>"#;

    #[test]
    fn test_article_metadata() {
        let content = normalize_at(ARTICLE, "https://example.com/?utm=1", day());
        assert_eq!(content.item_type, Some(ItemType::Webpage));
        assert_eq!(content.title(), Some("How Rust Works"));
        let names: Vec<String> = content.author.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["Sam Smith", "Jane Q Public"]);
        assert_eq!(content.author[1].family(), Some("Q Public"));
        assert_eq!(content.container_title(), Some("Example News"));
        assert_eq!(content.publisher(), Some("Example Media"));
        let issued = content.issued_parts();
        assert_eq!((issued.year, issued.month, issued.day), (Some(2021), Some(3), Some(4)));
        assert_eq!(content.url(), Some("https://news.example.com/rust"));
        assert_eq!(content.accessed_parts().year, Some(2024));
    }

    #[test]
    fn test_bare_page_falls_back() {
        let html = r#"<html><head><link rel="canonical" href="https://example.com/c"></head>
            <body><p class="publication-date">March 4, 2021</p></body></html>"#;
        let content = normalize_at(html, "https://example.com/x", day());
        assert_eq!(content.title(), None);
        assert!(content.author.is_empty());
        assert_eq!(content.container_title(), None);
        assert_eq!(content.url(), Some("https://example.com/c"));
        assert_eq!(content.issued_parts().day, Some(4));

        let content = normalize_at("<p>nothing</p>", " https://example.com/x ", day());
        assert_eq!(content.url(), Some("https://example.com/x"));
        assert_eq!(content.issued, None);
    }
}
