/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A reference is one citable source: a web page, a journal article or a
//! book. It is stored with CSL-JSON field names so the same record can be
//! handed to any CSL processor.

pub mod contributor;
pub mod conversion;
pub mod date;
pub mod types;


#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

pub use self::contributor::{build_authors, Author, AuthorName};
pub use self::conversion::{BibIdentifier, BibJson, BibLink, BibName};
pub use self::date::{from_date_object, to_date_object, DateInput, DateObject, YearMonthDay};
pub use self::types::*;

/// The normalized Content record.
///
/// Every field is optional. Input accepts the field names of the older
/// form-based records (`authors`, `city`, `journal`, `pages`, ...) as well.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NumOrStr>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, alias = "authors", skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Author>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editor: Vec<Author>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translator: Vec<Author>,
    #[serde(default, deserialize_with = "first_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        alias = "journal",
        alias = "website",
        deserialize_with = "first_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub container_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, alias = "city", skip_serializing_if = "Option::is_none")]
    pub publisher_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<NumOrStr>,
    #[serde(default, alias = "pages", skip_serializing_if = "Option::is_none")]
    pub page: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_pages: Option<NumOrStr>,
    #[serde(
        rename = "ISBN",
        default,
        deserialize_with = "first_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub isbn: Option<String>,
    #[serde(
        rename = "ISSN",
        default,
        deserialize_with = "first_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub issn: Option<String>,
    #[serde(rename = "DOI", alias = "doi", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "URL", alias = "url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "PMID",
        default,
        deserialize_with = "first_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pmid: Option<String>,
    #[serde(rename = "PMCID", default, skip_serializing_if = "Option::is_none")]
    pub pmcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<DateObject>,
    /// Year of first publication, for reprints.
    #[serde(default, alias = "originalPublished", skip_serializing_if = "Option::is_none")]
    pub original_published: Option<NumOrStr>,
    /// Publication year of form-based records that carry no `issued` date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<NumOrStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Content {
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.title)
    }

    pub fn container_title(&self) -> Option<&str> {
        non_blank(&self.container_title)
    }

    pub fn publisher(&self) -> Option<&str> {
        non_blank(&self.publisher)
    }

    pub fn publisher_place(&self) -> Option<&str> {
        non_blank(&self.publisher_place)
    }

    pub fn doi(&self) -> Option<&str> {
        non_blank(&self.doi)
    }

    pub fn url(&self) -> Option<&str> {
        non_blank(&self.url)
    }

    pub fn isbn(&self) -> Option<&str> {
        non_blank(&self.isbn)
    }

    /// Authors that carry at least one usable name part.
    pub fn authors(&self) -> Vec<&Author> {
        self.author.iter().filter(|a| !a.is_empty()).collect()
    }

    pub fn editors(&self) -> Vec<&Author> {
        self.editor.iter().filter(|a| !a.is_empty()).collect()
    }

    pub fn issued_parts(&self) -> YearMonthDay {
        let parts = self.issued.as_ref().map(DateObject::parts).unwrap_or_default();
        if parts.year.is_some() {
            return parts;
        }
        YearMonthDay {
            year: self
                .year
                .as_ref()
                .and_then(NumOrStr::as_number)
                .and_then(|y| i32::try_from(y).ok()),
            ..Default::default()
        }
    }

    pub fn accessed_parts(&self) -> YearMonthDay {
        self.accessed.as_ref().map(DateObject::parts).unwrap_or_default()
    }

    pub fn issued_year(&self) -> Option<i32> {
        self.issued_parts().year
    }

    /// The first-publication year, when it reads as a number.
    pub fn original_year(&self) -> Option<i64> {
        self.original_published.as_ref().and_then(NumOrStr::as_number)
    }

    /// The layout this record maps to directly, if any.
    pub fn source_type(&self) -> Option<SourceType> {
        self.item_type.as_ref().and_then(SourceType::from_item_type)
    }

    /// Key for ordering a reference list: first author's family name,
    /// then title, then year.
    pub fn sort_key(&self) -> (String, String, i32) {
        let name = self
            .authors()
            .first()
            .copied()
            .or_else(|| self.editors().first().copied())
            .map(|a| a.family_or_literal().to_lowercase())
            .unwrap_or_default();
        let title = self.title().map(str::to_lowercase).unwrap_or_default();
        (name, title, self.issued_year().unwrap_or(i32::MAX))
    }
}

// A string field that some providers send as an array (Crossref titles,
// ISSN lists) or as a bare number (PMIDs). The first non-empty entry wins.
fn first_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn scalar(value: &serde_json::Value) -> Option<String> {
        match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items.iter().find_map(scalar),
        Some(other) => scalar(&other),
        None => None,
    })
}
