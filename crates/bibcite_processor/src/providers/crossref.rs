/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Crossref works API (`https://api.crossref.org/works/{doi}`).

use bibcite_core::reference::date::today;
use bibcite_core::{Content, DateObject, ItemType};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use super::{
    authors_field, date_field, doi_url, num_or_str_field, parse_json, string_field, ProviderError,
};

/// Crossref work types that differ from their CSL names.
const TYPE_RENAMES: [(&str, &str); 9] = [
    ("journal-article", "article-journal"),
    ("book-chapter", "chapter"),
    ("book-section", "chapter"),
    ("proceedings-article", "paper-conference"),
    ("monograph", "book"),
    ("edited-book", "book"),
    ("reference-book", "book"),
    ("dissertation", "thesis"),
    ("posted-content", "manuscript"),
];

fn csl_type(crossref_type: &str) -> ItemType {
    TYPE_RENAMES
        .iter()
        .find(|(from, _)| *from == crossref_type)
        .map(|(_, to)| ItemType::from(*to))
        .unwrap_or_else(|| ItemType::from(crossref_type))
}

pub fn normalize(json: &str) -> Result<Content, ProviderError> {
    normalize_at(json, today())
}

/// Normalize a works response, stamping `accessed` with `today`.
pub fn normalize_at(json: &str, today: NaiveDate) -> Result<Content, ProviderError> {
    let body = parse_json(json)?;
    let work = match body.get("message") {
        Some(work) if work.is_object() => work,
        _ => return Err(ProviderError::NotFound),
    };
    Ok(work_to_content(work, today))
}

fn work_to_content(work: &Value, today: NaiveDate) -> Content {
    let doi = string_field(&work["DOI"]);
    let url = string_field(&work["URL"]).or_else(|| doi.as_deref().map(doi_url));
    let issued = date_field(&work["issued"])
        .or_else(|| date_field(&work["published-print"]))
        .or_else(|| date_field(&work["published-online"]));

    let content = Content {
        item_type: work["type"].as_str().map(csl_type),
        title: string_field(&work["title"]),
        container_title: string_field(&work["container-title"]),
        author: authors_field(&work["author"]),
        editor: authors_field(&work["editor"]),
        publisher: string_field(&work["publisher"]),
        publisher_place: string_field(&work["publisher-location"])
            .or_else(|| string_field(&work["publisher-place"])),
        volume: num_or_str_field(&work["volume"]),
        issue: num_or_str_field(&work["issue"]),
        page: num_or_str_field(&work["page"]),
        number: num_or_str_field(&work["article-number"]),
        edition: num_or_str_field(&work["edition-number"]),
        isbn: string_field(&work["ISBN"]),
        issn: string_field(&work["ISSN"]),
        pmid: string_field(&work["PMID"]),
        pmcid: string_field(&work["PMCID"]),
        source: string_field(&work["source"]),
        language: string_field(&work["language"]),
        doi,
        url,
        issued,
        accessed: Some(DateObject::from(today)),
        online: Some(true),
        ..Default::default()
    };
    debug!(doi = ?content.doi, authors = content.author.len(), "normalized Crossref work");
    content
}
