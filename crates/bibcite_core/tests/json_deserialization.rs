/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibcite_core::{BibJson, Content, ItemType, NumOrStr};

#[test]
fn test_csl_json_array_of_items() {
    let json = r#"[
        {"id": "a", "type": "webpage", "title": "Home", "URL": "https://example.com",
         "accessed": {"date-parts": [[2024, 2, 29]]}},
        {"id": 7, "type": "article-journal", "title": "Paper", "DOI": "10.1000/1",
         "issued": {"date-parts": [["2020"]]}}
    ]"#;
    let items: Vec<Content> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].accessed_parts().day, Some(29));
    assert_eq!(items[1].id, Some(NumOrStr::Number(7)));
    assert_eq!(items[1].issued_year(), Some(2020));
}

#[test]
fn test_ncbi_csl_shape() {
    let json = r#"{
        "source": "PubMed",
        "accessed": {"date-parts": [[2024, 5, 1]]},
        "id": "pmid:23193287",
        "title": "Genome-wide association study",
        "author": [{"family": "Smith", "given": "John A"}],
        "container-title-short": "Nat Genet",
        "container-title": "Nature genetics",
        "ISSN": "1546-1718",
        "page": "1-10",
        "volume": "45",
        "issue": "1",
        "PMID": "23193287",
        "PMCID": "PMC3531190",
        "DOI": "10.1038/ng.2484",
        "type": "article-journal",
        "issued": {"date-parts": [[2013, 1]]}
    }"#;
    let content: Content = serde_json::from_str(json).unwrap();
    assert_eq!(content.item_type, Some(ItemType::ArticleJournal));
    assert_eq!(content.pmcid.as_deref(), Some("PMC3531190"));
    assert_eq!(content.container_title(), Some("Nature genetics"));
    assert_eq!(content.issued_parts().month, Some(1));
}

#[test]
fn test_content_survives_yaml() {
    let yaml = r#"
type: book
title: Structure of Scientific Revolutions
author:
  - given: Thomas S.
    family: Kuhn
issued:
  date-parts:
    - [1962]
"#;
    let content: Content = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(content.author[0].family(), Some("Kuhn"));
    assert_eq!(content.issued_year(), Some(1962));
}

#[test]
fn test_bibjson_round_trip_keeps_identifiers() {
    let content: Content = serde_json::from_str(
        r#"{"type": "book", "title": "T", "ISBN": "9780306406157", "DOI": "10.1/x"}"#,
    )
    .unwrap();
    let back = Content::from(&BibJson::from(&content));
    assert_eq!(back.isbn.as_deref(), Some("9780306406157"));
    assert_eq!(back.doi.as_deref(), Some("10.1/x"));
    assert_eq!(back.item_type, Some(ItemType::Book));
}
