/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA 7th edition reference entries.

use bibcite_core::{Content, SourceType};

use super::names::apa_author_list;
use super::util::{
    edition_label, emph_title, format_doi, link_target, long_date, month_name, page_range, text,
    url_link, with_period,
};
use crate::render::{Html, OutputFormat};

/// Render an APA reference as HTML.
pub fn format_apa(content: &Content, source_type: SourceType) -> String {
    render_apa(content, source_type, &Html)
}

/// Render an APA reference in any output format.
pub fn render_apa<F: OutputFormat>(content: &Content, source_type: SourceType, fmt: &F) -> String {
    let parts = match source_type {
        SourceType::Webpage => webpage(content, fmt),
        SourceType::ArticleJournal => article_journal(content, fmt),
        SourceType::Book => book(content, fmt),
    };
    fmt.finish(fmt.join(parts, " "))
}

fn author_block(content: &Content) -> Option<String> {
    let authors = content.authors();
    if authors.is_empty() {
        return None;
    }
    Some(with_period(&apa_author_list(&authors)))
}

fn date_block<F: OutputFormat>(fmt: &F, date: &str) -> F::Output {
    fmt.affix("", fmt.parenthesize(fmt.text(date)), ".")
}

fn year(content: &Content) -> String {
    content
        .issued_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n.d.".to_string())
}

/// Web pages carry the month and day when they are known.
fn webpage_date(content: &Content) -> String {
    let parts = content.issued_parts();
    match (parts.year, parts.month.and_then(month_name), parts.day) {
        (Some(y), Some(m), Some(d)) => format!("{}, {} {}", y, m, d),
        (Some(y), Some(m), None) => format!("{}, {}", y, m),
        (Some(y), None, _) => y.to_string(),
        _ => "n.d.".to_string(),
    }
}

/// Author, date and title, in that order; without authors the title leads.
fn lead<F: OutputFormat>(
    fmt: &F,
    authors: Option<String>,
    date: &str,
    title: Option<F::Output>,
) -> Vec<F::Output> {
    let mut parts = Vec::new();
    match authors {
        Some(authors) => {
            parts.push(fmt.text(&authors));
            parts.push(date_block(fmt, date));
            parts.extend(title);
        }
        None => {
            parts.extend(title);
            parts.push(date_block(fmt, date));
        }
    }
    parts
}

/// The DOI link, bare; otherwise the URL, with the retrieval date when
/// one is known.
fn source_link<F: OutputFormat>(content: &Content, fmt: &F) -> Option<F::Output> {
    if let Some(doi) = content.doi() {
        return Some(url_link(fmt, &format_doi(doi)));
    }
    let url = content.url()?;
    Some(match long_date(&content.accessed_parts()) {
        Some(accessed) => fmt.affix(
            &format!("Retrieved {}, from ", accessed),
            url_link(fmt, url),
            "",
        ),
        None => url_link(fmt, url),
    })
}

fn webpage<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let title = content.title().map(|t| emph_title(fmt, t));
    let mut parts = lead(fmt, author_block(content), &webpage_date(content), title);

    let site = content.container_title();
    if let Some(site) = site {
        parts.push(fmt.text(&with_period(site)));
    }
    if let Some(publisher) = content.publisher().filter(|p| Some(*p) != site) {
        parts.push(fmt.text(&with_period(publisher)));
    }

    let target = content.url().map(String::from).or_else(|| link_target(content));
    match (long_date(&content.accessed_parts()), target) {
        (Some(accessed), Some(url)) => parts.push(fmt.affix(
            &format!("Retrieved {}, from ", accessed),
            url_link(fmt, &url),
            "",
        )),
        (None, Some(url)) => parts.push(url_link(fmt, &url)),
        _ => {}
    }
    parts
}

fn article_journal<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let title = content.title().map(|t| fmt.text(&with_period(t)));
    let mut parts = lead(fmt, author_block(content), &year(content), title);

    let mut source = Vec::new();
    if let Some(journal) = content.container_title() {
        source.push(fmt.emph(fmt.text(journal)));
    }
    match (text(&content.volume), text(&content.issue)) {
        (Some(volume), Some(issue)) => {
            source.push(fmt.affix("", fmt.emph(fmt.text(&volume)), &format!("({})", issue)))
        }
        (Some(volume), None) => source.push(fmt.emph(fmt.text(&volume))),
        (None, Some(issue)) => source.push(fmt.text(&format!("({})", issue))),
        (None, None) => {}
    }
    if let Some(pages) = text(&content.page) {
        source.push(fmt.text(&page_range(&pages)));
    } else if let Some(number) = text(&content.number) {
        source.push(fmt.text(&format!("Article {}", number)));
    }
    if !source.is_empty() {
        parts.push(fmt.affix("", fmt.join(source, ", "), "."));
    }

    parts.extend(source_link(content, fmt));
    parts
}

fn book<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let lead_names = author_block(content).or_else(|| {
        let editors = content.editors();
        match editors.len() {
            0 => None,
            1 => Some(format!("{} (Ed.).", apa_author_list(&editors))),
            _ => Some(format!("{} (Eds.).", apa_author_list(&editors))),
        }
    });

    let mut notes = Vec::new();
    notes.extend(edition_label(content));
    notes.extend(text(&content.volume).map(|v| format!("Vol. {}", v)));
    let title = content.title().map(|t| {
        if notes.is_empty() {
            emph_title(fmt, t)
        } else {
            fmt.affix(
                "",
                fmt.emph(fmt.text(t.trim())),
                &format!(" ({}).", notes.join(", ")),
            )
        }
    });
    let mut parts = lead(fmt, lead_names, &year(content), title);

    match (content.publisher_place(), content.publisher()) {
        (Some(place), Some(publisher)) => {
            parts.push(fmt.text(&format!("{}:", place)));
            parts.push(fmt.text(&with_period(publisher)));
        }
        (None, Some(publisher)) => parts.push(fmt.text(&with_period(publisher))),
        (Some(place), None) => parts.push(fmt.text(&with_period(place))),
        (None, None) => {}
    }

    parts.extend(source_link(content, fmt));

    if let Some(original) = content.original_year() {
        if content.issued_year().map(i64::from) != Some(original) {
            parts.push(fmt.text(&format!("(Original work published {})", original)));
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainText;
    use bibcite_core::{to_date_object, Author, ItemType};

    #[test]
    fn test_principia() {
        let content: Content = serde_json::from_str(
            r#"{"type": "Book", "authors": [{"firstName": "Isaac", "lastName": "Newton"}],
                "year": 1687, "title": "Principia", "city": "London", "publisher": "Royal Society"}"#,
        )
        .unwrap();
        assert_eq!(
            format_apa(&content, SourceType::Book),
            "Newton, I. (1687). <i>Principia</i>. London: Royal Society."
        );
    }

    #[test]
    fn test_webpage_title_only() {
        let content = Content {
            item_type: Some(ItemType::Webpage),
            title: Some("Test".into()),
            ..Default::default()
        };
        let html = format_apa(&content, SourceType::Webpage);
        assert_eq!(html, "<i>Test</i>. (n.d.).");
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_webpage_retrieval_clause() {
        let content = Content {
            author: vec![Author::person("Tim", "Berners-Lee")],
            title: Some("Information Management: A Proposal".into()),
            container_title: Some("W3C".into()),
            url: Some("https://www.w3.org/History/1989/proposal.html".into()),
            issued: Some(to_date_object(1989, Some(3), Some(12))),
            accessed: Some(to_date_object(2024, Some(1), Some(5))),
            ..Default::default()
        };
        assert_eq!(
            format_apa(&content, SourceType::Webpage),
            "Berners-Lee, T. (1989, March 12). <i>Information Management: A Proposal</i>. W3C. \
             Retrieved January 5, 2024, from \
             <a href=\"https://www.w3.org/History/1989/proposal.html\">https://www.w3.org/History/1989/proposal.html</a>"
        );
    }

    #[test]
    fn test_article_plain_text() {
        let content = Content {
            author: vec![Author::person("Yann", "LeCun"), Author::person("Yoshua", "Bengio")],
            title: Some("Deep learning".into()),
            container_title: Some("Nature".into()),
            volume: Some("521".into()),
            issue: Some("7553".into()),
            page: Some("436-444".into()),
            doi: Some("10.1038/nature14539".into()),
            issued: Some(to_date_object(2015, None, None)),
            ..Default::default()
        };
        assert_eq!(
            render_apa(&content, SourceType::ArticleJournal, &PlainText),
            "LeCun, Y., & Bengio, Y. (2015). Deep learning. _Nature_, _521_(7553), 436\u{2013}444. \
             https://doi.org/10.1038/nature14539"
        );
    }
}
