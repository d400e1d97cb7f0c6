/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use bibcite_core::{to_date_object, Author, Content, ItemType, NumOrStr};
use std::path::PathBuf;

// --- Helper Functions for Test Data Construction ---

pub fn person(given: &str, family: &str) -> Author {
    Author::person(given, family)
}

/// A book with one author, a year and a title.
pub fn make_book(given: &str, family: &str, year: i32, title: &str) -> Content {
    Content {
        item_type: Some(ItemType::Book),
        author: vec![person(given, family)],
        title: Some(title.to_string()),
        issued: Some(to_date_object(year, None, None)),
        ..Default::default()
    }
}

/// A journal article with the given (given, family) authors.
pub fn make_article(authors: &[(&str, &str)], year: i32, title: &str, journal: &str) -> Content {
    Content {
        item_type: Some(ItemType::ArticleJournal),
        author: authors.iter().map(|(g, f)| person(g, f)).collect(),
        title: Some(title.to_string()),
        container_title: Some(journal.to_string()),
        issued: Some(to_date_object(year, None, None)),
        ..Default::default()
    }
}

pub fn make_webpage(title: &str, site: &str, url: &str) -> Content {
    Content {
        item_type: Some(ItemType::Webpage),
        title: Some(title.to_string()),
        container_title: Some(site.to_string()),
        url: Some(url.to_string()),
        ..Default::default()
    }
}

/// `Given1 Author1` .. `GivenN AuthorN`.
pub fn numbered_authors(n: usize) -> Vec<Author> {
    (1..=n)
        .map(|i| person(&format!("Given{}", i), &format!("Author{}", i)))
        .collect()
}

pub fn num(n: i64) -> Option<NumOrStr> {
    Some(NumOrStr::Number(n))
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Panics unless every needle occurs in `haystack`, in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("{:?} not found in order in {:?}", needle, haystack),
        }
    }
}
