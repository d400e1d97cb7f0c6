/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! NCBI Literature Citation Exporter, which answers PMC and PubMed lookups
//! with CSL-JSON.

use bibcite_core::reference::date::today;
use bibcite_core::{Content, DateObject, ItemType};
use chrono::NaiveDate;
use tracing::debug;

use super::{
    authors_field, date_field, doi_url, num_or_str_field, parse_json, string_field, ProviderError,
};

pub fn normalize(json: &str) -> Result<Content, ProviderError> {
    normalize_at(json, today())
}

/// Normalize one exporter record, stamping `accessed` with `today`.
pub fn normalize_at(json: &str, today: NaiveDate) -> Result<Content, ProviderError> {
    let data = parse_json(json)?;
    if data["status"].as_str() == Some("error") {
        debug!(message = ?data["message"].as_str(), "citation exporter returned an error");
        return Err(ProviderError::NotFound);
    }
    let title = string_field(&data["title"]).ok_or(ProviderError::NotFound)?;

    let doi = string_field(&data["DOI"]);
    let content = Content {
        item_type: data["type"].as_str().map(ItemType::from),
        title: Some(title),
        author: authors_field(&data["author"]),
        container_title: string_field(&data["container-title"]),
        publisher_place: string_field(&data["publisher-place"]),
        volume: num_or_str_field(&data["volume"]),
        issue: num_or_str_field(&data["issue"]),
        page: num_or_str_field(&data["page"]),
        issn: string_field(&data["ISSN"]),
        pmid: string_field(&data["PMID"]),
        pmcid: string_field(&data["PMCID"]),
        source: string_field(&data["source"]),
        url: string_field(&data["URL"]).or_else(|| doi.as_deref().map(doi_url)),
        doi,
        issued: date_field(&data["issued"]),
        accessed: Some(DateObject::from(today)),
        online: Some(true),
        ..Default::default()
    };
    debug!(pmid = ?content.pmid, pmcid = ?content.pmcid, "normalized NCBI record");
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
    fn test_pmc_record() {
        let json = r#"{
            "source": "PMC", "accessed": {"date-parts": [[2024, 1, 1]]},
            "id": "pmcid:PMC3531190",
            "title": "The NCBI Taxonomy database",
            "author": [{"family": "Federhen", "given": "Scott"}],
            "container-title": "Nucleic Acids Research",
            "issued": {"date-parts": [[2012, 1]]},
            "volume": "40", "issue": "Database issue", "page": "D136-D143",
            "publisher-place": "England",
            "DOI": "10.1093/nar/gkr1178",
            "PMID": "22139910", "PMCID": "PMC3245000",
            "type": "article-journal"
        }"#;
        let content = normalize_at(json, day()).unwrap();
        assert_eq!(content.item_type, Some(ItemType::ArticleJournal));
        assert_eq!(content.url(), Some("https://doi.org/10.1093/nar/gkr1178"));
        assert_eq!(content.issue, Some(NumOrStr::Str("Database issue".into())));
        assert_eq!(content.pmid.as_deref(), Some("22139910"));
        assert_eq!(content.accessed_parts().year, Some(2024));
        assert_eq!(content.accessed_parts().day, Some(2));
        assert_eq!(content.id, None);
        assert_eq!(content.author[0].family(), Some("Federhen"));
    }

    #[test]
    fn test_error_status_and_untitled() {
        let error = r#"{"status": "error", "message": "ID not found"}"#;
        assert_eq!(normalize_at(error, day()), Err(ProviderError::NotFound));
        assert_eq!(
            normalize_at(r#"{"type": "article-journal"}"#, day()),
            Err(ProviderError::NotFound)
        );
    }
}
