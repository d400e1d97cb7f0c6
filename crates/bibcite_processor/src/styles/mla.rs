/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! MLA 9th edition works-cited entries.
//!
//! An MLA entry is the author, the title of the source, then one
//! "container" of comma-separated facts closed by a period.

use bibcite_core::{Content, SourceType};

use super::names::mla_author_list;
use super::util::{
    edition_label, emph_title, format_doi, is_page_range, mla_date, page_range, quoted_title,
    text, url_link, with_period,
};
use crate::render::{Html, OutputFormat};

/// Render an MLA entry as HTML.
pub fn format_mla(content: &Content, source_type: SourceType) -> String {
    render_mla(content, source_type, &Html)
}

/// Render an MLA entry in any output format.
pub fn render_mla<F: OutputFormat>(content: &Content, source_type: SourceType, fmt: &F) -> String {
    let mut parts = Vec::new();
    if let Some(names) = names(content, source_type) {
        parts.push(fmt.text(&with_period(&names)));
    }
    let title = match source_type {
        SourceType::Book => content.title().map(|t| emph_title(fmt, t)),
        _ => content.title().map(|t| quoted_title(fmt, t)),
    };
    parts.extend(title);

    let container = match source_type {
        SourceType::Webpage => webpage(content, fmt),
        SourceType::ArticleJournal => article_journal(content, fmt),
        SourceType::Book => book(content, fmt),
    };
    if !container.is_empty() {
        parts.push(fmt.affix("", fmt.join(container, ", "), "."));
    }

    if source_type == SourceType::Webpage {
        if let Some(accessed) = mla_date(&content.accessed_parts()) {
            parts.push(fmt.text(&format!("Accessed {}.", accessed)));
        }
    }
    fmt.finish(fmt.join(parts, " "))
}

/// Authors, or for an edited book without authors its editors.
fn names(content: &Content, source_type: SourceType) -> Option<String> {
    let authors = content.authors();
    if !authors.is_empty() {
        return Some(mla_author_list(&authors));
    }
    let editors = content.editors();
    if source_type != SourceType::Book || editors.is_empty() {
        return None;
    }
    let role = if editors.len() == 1 { "editor" } else { "editors" };
    Some(format!("{}, {}", mla_author_list(&editors), role))
}

fn webpage<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut container = Vec::new();
    let site = content.container_title();
    if let Some(site) = site {
        container.push(fmt.emph(fmt.text(site)));
    }
    if let Some(publisher) = content.publisher().filter(|p| Some(*p) != site) {
        container.push(fmt.text(publisher));
    }
    if let Some(date) = mla_date(&content.issued_parts()) {
        container.push(fmt.text(&date));
    }
    if let Some(url) = content.url() {
        container.push(url_link(fmt, url));
    }
    container
}

fn article_journal<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut container = Vec::new();
    if let Some(journal) = content.container_title() {
        container.push(fmt.emph(fmt.text(journal)));
    }
    if let Some(volume) = text(&content.volume) {
        container.push(fmt.text(&format!("vol. {}", volume)));
    }
    if let Some(issue) = text(&content.issue) {
        container.push(fmt.text(&format!("no. {}", issue)));
    }
    if let Some(date) = mla_date(&content.issued_parts()) {
        container.push(fmt.text(&date));
    }
    if let Some(pages) = text(&content.page) {
        let label = if is_page_range(&pages) { "pp." } else { "p." };
        container.push(fmt.text(&format!("{} {}", label, page_range(&pages))));
    }
    match (content.doi(), content.url()) {
        (Some(doi), _) => container.push(url_link(fmt, &format_doi(doi))),
        (None, Some(url)) => container.push(url_link(fmt, url)),
        (None, None) => {}
    }
    container
}

fn book<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut container = Vec::new();
    let editors = content.editors();
    if !content.authors().is_empty() && !editors.is_empty() {
        let names: Vec<String> = editors.iter().map(|e| e.to_string()).collect();
        let names = match names.as_slice() {
            [first, second] => format!("{} and {}", first, second),
            [first, _, _, ..] => format!("{} et al.", first),
            _ => names.concat(),
        };
        container.push(fmt.text(&format!("Edited by {}", names)));
    }
    if let Some(edition) = edition_label(content) {
        container.push(fmt.text(&edition));
    }
    if let Some(volume) = text(&content.volume) {
        container.push(fmt.text(&format!("vol. {}", volume)));
    }
    if let Some(publisher) = content.publisher() {
        container.push(fmt.text(publisher));
    }
    if let Some(year) = content.issued_year() {
        container.push(fmt.text(&year.to_string()));
    }
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainText;
    use bibcite_core::{to_date_object, Author, NumOrStr};

    #[test]
    fn test_book() {
        let content = Content {
            author: vec![Author::person("Isaac", "Newton")],
            title: Some("Principia".into()),
            publisher: Some("Royal Society".into()),
            edition: Some(NumOrStr::Number(2)),
            issued: Some(to_date_object(1713, None, None)),
            ..Default::default()
        };
        assert_eq!(
            format_mla(&content, SourceType::Book),
            "Newton, Isaac. <i>Principia</i>. 2nd ed., Royal Society, 1713."
        );
    }

    #[test]
    fn test_edited_book() {
        let content = Content {
            editor: vec![Author::person("Jane", "Austen"), Author::person("Anne", "Elliot")],
            title: Some("Letters".into()),
            ..Default::default()
        };
        assert_eq!(
            render_mla(&content, SourceType::Book, &PlainText),
            "Austen, Jane, and Anne Elliot, editors. _Letters_."
        );
    }

    #[test]
    fn test_article_single_page() {
        let content = Content {
            author: vec![Author::person("Ada", "Lovelace")],
            title: Some("Notes".into()),
            container_title: Some("Scientific Memoirs".into()),
            volume: Some(NumOrStr::Number(3)),
            page: Some("666".into()),
            issued: Some(to_date_object(1843, None, None)),
            ..Default::default()
        };
        assert_eq!(
            render_mla(&content, SourceType::ArticleJournal, &PlainText),
            "Lovelace, Ada. \u{201C}Notes.\u{201D} _Scientific Memoirs_, vol. 3, 1843, p. 666."
        );
    }

    #[test]
    fn test_webpage_accessed() {
        let content = Content {
            title: Some("Rust".into()),
            container_title: Some("Wikipedia".into()),
            publisher: Some("Wikimedia Foundation".into()),
            url: Some("https://en.wikipedia.org/wiki/Rust".into()),
            accessed: Some(to_date_object(2024, Some(9), Some(3))),
            ..Default::default()
        };
        assert_eq!(
            render_mla(&content, SourceType::Webpage, &PlainText),
            "\u{201C}Rust.\u{201D} _Wikipedia_, Wikimedia Foundation, \
             https://en.wikipedia.org/wiki/Rust. Accessed 3 Sept. 2024."
        );
    }
}
