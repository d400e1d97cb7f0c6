/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use bibcite_core::to_date_object;
use bibcite_processor::styles::{format_chicago, render_chicago, SourceType};
use bibcite_processor::PlainText;

#[test]
fn test_book() {
    let mut content = make_book("Thomas", "Kuhn", 1962, "The Structure of Scientific Revolutions");
    content.publisher_place = Some("Chicago".into());
    content.publisher = Some("University of Chicago Press".into());
    assert_eq!(
        format_chicago(&content, SourceType::Book),
        "Kuhn, Thomas. 1962. <i>The Structure of Scientific Revolutions</i>. Chicago: \
         University of Chicago Press."
    );
}

#[test]
fn test_two_authors_and_edition() {
    let mut content = make_book("William", "Strunk", 1999, "The Elements of Style");
    content.author.push(person("E. B.", "White"));
    content.edition = num(4);
    content.publisher = Some("Longman".into());
    assert_eq!(
        render_chicago(&content, SourceType::Book, &PlainText),
        "Strunk, William, and E. B. White. 1999. _The Elements of Style_. 4th ed. Longman."
    );
}

#[test]
fn test_eleven_authors_truncate_to_seven() {
    let mut content = make_article(&[], 2021, "Consortium report", "Science");
    content.author = numbered_authors(11);
    let out = render_chicago(&content, SourceType::ArticleJournal, &PlainText);
    assert!(out.starts_with("Author1, Given1, Given2 Author2,"), "{}", out);
    assert!(out.contains("Given7 Author7, et al. 2021."), "{}", out);
    assert!(!out.contains("Author8"));
}

#[test]
fn test_ten_authors_listed_in_full() {
    let mut content = make_article(&[], 2021, "Consortium report", "Science");
    content.author = numbered_authors(10);
    let out = render_chicago(&content, SourceType::ArticleJournal, &PlainText);
    assert!(out.contains("Given9 Author9, and Given10 Author10. 2021."), "{}", out);
}

#[test]
fn test_webpage_with_date() {
    let mut content = make_webpage(
        "Information Management: A Proposal",
        "W3C",
        "https://www.w3.org/History/1989/proposal.html",
    );
    content.author = vec![person("Tim", "Berners-Lee")];
    content.issued = Some(to_date_object(1989, Some(3), Some(12)));
    content.accessed = Some(to_date_object(2024, Some(1), Some(5)));
    assert_eq!(
        render_chicago(&content, SourceType::Webpage, &PlainText),
        "Berners-Lee, Tim. 1989. \u{201C}Information Management: A Proposal.\u{201D} W3C. \
         March 12. Accessed January 5, 2024. https://www.w3.org/History/1989/proposal.html."
    );
}
