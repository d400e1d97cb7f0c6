/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Open Library search API, queried by ISBN.

use bibcite_core::reference::date::today;
use bibcite_core::{build_authors, Content, DateObject, ItemType};
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{num_or_str_field, parse_json, string_field, ProviderError};

pub fn normalize(json: &str, isbn: &str) -> Result<Content, ProviderError> {
    normalize_at(json, isbn, today())
}

/// Normalize a search response for `isbn`: the first matching work and its
/// first edition.
pub fn normalize_at(json: &str, isbn: &str, today: NaiveDate) -> Result<Content, ProviderError> {
    let body = parse_json(json)?;
    let doc = body["docs"]
        .as_array()
        .and_then(|docs| docs.first())
        .ok_or(ProviderError::NotFound)?;
    let edition = &doc["editions"]["docs"][0];
    if edition.is_null() {
        warn!(isbn, "Open Library work has no edition details");
    }

    let author_names: Vec<String> = doc["author_name"]
        .as_array()
        .map(|names| names.iter().filter_map(string_field).collect())
        .unwrap_or_default();

    let issued = string_field(&edition["publish_date"])
        .or_else(|| string_field(&doc["first_publish_year"]))
        .and_then(|date| DateObject::parse(&date));

    let content = Content {
        item_type: Some(ItemType::Book),
        title: string_field(&edition["title"]).or_else(|| string_field(&doc["title"])),
        number_of_pages: num_or_str_field(&doc["number_of_pages_median"]),
        author: build_authors(&author_names),
        publisher: string_field(&edition["publisher"]),
        publisher_place: string_field(&edition["publish_place"]),
        isbn: string_field(&edition["isbn"]).or_else(|| Some(isbn.trim().to_string())),
        language: string_field(&edition["language"]),
        issued,
        accessed: Some(DateObject::from(today)),
        ..Default::default()
    };
    debug!(isbn, title = ?content.title, "normalized Open Library record");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibcite_core::NumOrStr;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_first_doc_and_edition() {
        let json = r#"{"numFound": 1, "docs": [{
            "title": "The Hobbit",
            "author_name": ["J. R. R. Tolkien"],
            "number_of_pages_median": 310,
            "editions": {"numFound": 2, "docs": [
                {"title": "The Hobbit", "publisher": ["Houghton Mifflin"], "publish_place": ["Boston"],
                 "isbn": ["9780618260300"], "publish_date": ["September 2002"]},
                {"publisher": ["Allen & Unwin"]}
            ]}
        }]}"#;
        let content = normalize_at(json, "0618260307", day()).unwrap();
        assert_eq!(content.item_type, Some(ItemType::Book));
        assert_eq!(content.number_of_pages, Some(NumOrStr::Number(310)));
        assert_eq!(content.author[0].given(), Some("J."));
        assert_eq!(content.author[0].family(), Some("R. R. Tolkien"));
        assert_eq!(content.publisher(), Some("Houghton Mifflin"));
        assert_eq!(content.publisher_place(), Some("Boston"));
        assert_eq!(content.isbn(), Some("9780618260300"));
        assert_eq!(content.issued_parts().month, Some(9));
    }

    #[test]
    fn test_queried_isbn_fallback() {
        let json = r#"{"docs": [{"title": "Untitled edition"}]}"#;
        let content = normalize_at(json, "9780306406157", day()).unwrap();
        assert_eq!(content.isbn(), Some("9780306406157"));
        assert_eq!(content.publisher(), None);
        assert_eq!(content.issued, None);
    }

    #[test]
    fn test_empty_docs() {
        assert_eq!(
            normalize_at(r#"{"numFound": 0, "docs": []}"#, "123", day()),
            Err(ProviderError::NotFound)
        );
    }
}
