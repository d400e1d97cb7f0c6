/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Chicago author-date reference-list entries (17th edition).

use bibcite_core::{Content, SourceType};

use super::names::chicago_author_list;
use super::util::{
    edition_label, emph_title, link_target, long_date, month_name, page_range, quoted_title, text,
    url_link, with_period,
};
use crate::render::{Html, OutputFormat};

/// Render a Chicago entry as HTML.
pub fn format_chicago(content: &Content, source_type: SourceType) -> String {
    render_chicago(content, source_type, &Html)
}

/// Render a Chicago entry in any output format.
pub fn render_chicago<F: OutputFormat>(
    content: &Content,
    source_type: SourceType,
    fmt: &F,
) -> String {
    let title = match source_type {
        SourceType::Book => content.title().map(|t| emph_title(fmt, t)),
        _ => content.title().map(|t| quoted_title(fmt, t)),
    };
    let year = fmt.text(&with_period(&year(content)));

    let mut parts = Vec::new();
    match names(content, source_type) {
        Some(names) => {
            parts.push(fmt.text(&with_period(&names)));
            parts.push(year);
            parts.extend(title);
        }
        None => {
            parts.extend(title);
            parts.push(year);
        }
    }

    parts.extend(match source_type {
        SourceType::Webpage => webpage(content, fmt),
        SourceType::ArticleJournal => article_journal(content, fmt),
        SourceType::Book => book(content, fmt),
    });
    fmt.finish(fmt.join(parts, " "))
}

/// `(1687) 1999` for reprints, else the issued year or `n.d.`
fn year(content: &Content) -> String {
    let issued = content.issued_year();
    match (content.original_year(), issued) {
        (Some(original), Some(issued)) if original != i64::from(issued) => {
            format!("({}) {}", original, issued)
        }
        (_, Some(issued)) => issued.to_string(),
        (Some(original), None) => original.to_string(),
        (None, None) => "n.d.".to_string(),
    }
}

fn names(content: &Content, source_type: SourceType) -> Option<String> {
    let authors = content.authors();
    if !authors.is_empty() {
        return Some(chicago_author_list(&authors));
    }
    let editors = content.editors();
    if source_type != SourceType::Book || editors.is_empty() {
        return None;
    }
    let role = if editors.len() == 1 { "ed." } else { "eds." };
    Some(format!("{}, {}", chicago_author_list(&editors), role))
}

fn webpage<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut parts = Vec::new();
    let site = content.container_title();
    if let Some(site) = site {
        parts.push(fmt.text(&with_period(site)));
    }
    if let Some(publisher) = content.publisher().filter(|p| Some(*p) != site) {
        parts.push(fmt.text(&with_period(publisher)));
    }
    let issued = content.issued_parts();
    if let (Some(month), Some(day)) = (issued.month, issued.day) {
        if let Some(name) = month_name(month) {
            parts.push(fmt.text(&format!("{} {}.", name, day)));
        }
    }
    if let Some(accessed) = long_date(&content.accessed_parts()) {
        parts.push(fmt.text(&format!("Accessed {}.", accessed)));
    }
    if let Some(url) = content.url() {
        parts.push(fmt.affix("", url_link(fmt, url), "."));
    }
    parts
}

fn article_journal<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut parts = Vec::new();
    let mut source = Vec::new();
    if let Some(journal) = content.container_title() {
        source.push(fmt.emph(fmt.text(journal)));
    }
    if let Some(volume) = text(&content.volume) {
        source.push(fmt.text(&volume));
    }
    if let Some(issue) = text(&content.issue) {
        source.push(fmt.text(&format!("({})", issue)));
    }
    if !source.is_empty() {
        let source = fmt.join(source, " ");
        match text(&content.page) {
            Some(pages) => parts.push(fmt.affix("", source, &format!(": {}.", page_range(&pages)))),
            None => parts.push(fmt.affix("", source, ".")),
        }
    }
    if let Some(target) = link_target(content) {
        parts.push(fmt.affix("", url_link(fmt, &target), "."));
    }
    parts
}

fn book<F: OutputFormat>(content: &Content, fmt: &F) -> Vec<F::Output> {
    let mut parts = Vec::new();
    let editors = content.editors();
    if !content.authors().is_empty() && !editors.is_empty() {
        let names: Vec<String> = editors.iter().map(|e| e.to_string()).collect();
        let names = match names.as_slice() {
            [rest @ .., last] if rest.len() > 1 => format!("{}, and {}", rest.join(", "), last),
            [first, second] => format!("{} and {}", first, second),
            _ => names.concat(),
        };
        parts.push(fmt.text(&format!("Edited by {}.", names)));
    }
    if let Some(edition) = edition_label(content) {
        parts.push(fmt.text(&with_period(&edition)));
    }
    if let Some(volume) = text(&content.volume) {
        parts.push(fmt.text(&format!("Vol. {}.", volume)));
    }
    match (content.publisher_place(), content.publisher()) {
        (Some(place), Some(publisher)) => {
            parts.push(fmt.text(&with_period(&format!("{}: {}", place, publisher))))
        }
        (None, Some(publisher)) => parts.push(fmt.text(&with_period(publisher))),
        (Some(place), None) => parts.push(fmt.text(&with_period(place))),
        (None, None) => {}
    }
    if let Some(target) = link_target(content) {
        parts.push(fmt.affix("", url_link(fmt, &target), "."));
    }
    parts
}
