/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conversion between [`Content`] and BibJSON records.

use crate::reference::contributor::Author;
use crate::reference::date::{to_date_object, DateObject};
use crate::reference::types::{ItemType, NumOrStr};
use crate::reference::Content;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A BibJSON record.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibJson {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<BibName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editor: Vec<BibName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translator: Vec<BibName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubplace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<BibIdentifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BibLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibIdentifier {
    #[serde(rename = "type")]
    pub id_type: String,
    pub id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibLink {
    pub url: String,
}

const TYPE_NAMES: [(&str, &str); 10] = [
    ("book", "Book"),
    ("article-journal", "Journal Article"),
    ("chapter", "Book Chapter"),
    ("thesis", "Thesis"),
    ("report", "Report"),
    ("paper-conference", "Conference Paper"),
    ("webpage", "Web Page"),
    ("manuscript", "Manuscript"),
    ("article-magazine", "Magazine Article"),
    ("article-newspaper", "Newspaper Article"),
];

fn bib_type_name(item_type: Option<&ItemType>) -> &'static str {
    item_type
        .and_then(|t| TYPE_NAMES.iter().find(|(csl, _)| *csl == t.as_str()))
        .map(|(_, bib)| *bib)
        .unwrap_or("Misc")
}

fn csl_type_name(bib_type: Option<&str>) -> &'static str {
    bib_type
        .and_then(|t| TYPE_NAMES.iter().find(|(_, bib)| *bib == t))
        .map(|(csl, _)| *csl)
        .unwrap_or("misc")
}

impl From<&Author> for BibName {
    fn from(author: &Author) -> Self {
        match author.literal() {
            Some(literal) => BibName {
                name: literal.to_string(),
                ..Default::default()
            },
            None => BibName {
                name: author.to_string(),
                firstname: author.given().map(String::from),
                lastname: author.family().map(String::from),
            },
        }
    }
}

impl From<&BibName> for Author {
    /// The last space-separated word is the family name.
    fn from(name: &BibName) -> Self {
        let full = name.name.trim();
        match full.rsplit_once(' ') {
            Some((given, family)) => Author::person(given.trim(), family),
            None => Author::person("", full),
        }
    }
}

fn text(value: &Option<NumOrStr>) -> Option<String> {
    value.as_ref().and_then(NumOrStr::text)
}

impl From<&Content> for BibJson {
    fn from(content: &Content) -> Self {
        let accessed = content.accessed.as_ref().and_then(|date| {
            date.date_parts.first().filter(|p| !p.is_empty()).map(|parts| {
                parts
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join("-")
            })
        });

        let mut identifier = Vec::new();
        for (id_type, value) in [
            ("doi", content.doi()),
            ("isbn", content.isbn()),
            ("issn", content.issn.as_deref()),
        ] {
            if let Some(id) = value.filter(|v| !v.trim().is_empty()) {
                identifier.push(BibIdentifier {
                    id_type: id_type.to_string(),
                    id: id.to_string(),
                });
            }
        }

        BibJson {
            entry_type: Some(bib_type_name(content.item_type.as_ref()).to_string()),
            title: content.title().map(String::from),
            author: content.author.iter().map(BibName::from).collect(),
            editor: content.editor.iter().map(BibName::from).collect(),
            translator: content.translator.iter().map(BibName::from).collect(),
            year: content.issued_year().map(|y| y.to_string()),
            accessed,
            publisher: content.publisher().map(String::from),
            pubplace: content.publisher_place().map(String::from),
            journal: content.container_title().map(String::from),
            volume: text(&content.volume),
            issue: text(&content.issue),
            pages: text(&content.page),
            identifier,
            link: content
                .url()
                .map(|url| vec![BibLink { url: url.to_string() }])
                .unwrap_or_default(),
            keywords: content.keyword.clone(),
            abstract_text: content.abstract_text.clone(),
            language: content.language.clone(),
        }
    }
}

fn parse_accessed(accessed: &str) -> Option<DateObject> {
    let mut parts = accessed.trim().split('-').map(|p| p.trim().parse::<u32>().ok());
    let year = parts.next().flatten()?;
    let month = parts.next().flatten();
    let day = parts.next().flatten();
    Some(to_date_object(i32::try_from(year).ok()?, month, day))
}

impl From<&BibJson> for Content {
    fn from(bib: &BibJson) -> Self {
        let mut content = Content {
            item_type: Some(ItemType::from(csl_type_name(bib.entry_type.as_deref()))),
            title: bib.title.clone(),
            author: bib.author.iter().map(Author::from).collect(),
            editor: bib.editor.iter().map(Author::from).collect(),
            translator: bib.translator.iter().map(Author::from).collect(),
            issued: bib
                .year
                .as_deref()
                .and_then(|y| y.trim().parse::<i32>().ok())
                .map(|y| to_date_object(y, None, None)),
            accessed: bib.accessed.as_deref().and_then(parse_accessed),
            publisher: bib.publisher.clone(),
            publisher_place: bib.pubplace.clone(),
            container_title: bib.journal.clone(),
            volume: bib.volume.clone().map(NumOrStr::Str),
            issue: bib.issue.clone().map(NumOrStr::Str),
            page: bib.pages.clone().map(NumOrStr::Str),
            url: bib.link.first().map(|link| link.url.clone()),
            keyword: bib.keywords.as_deref().map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|kw| !kw.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            abstract_text: bib.abstract_text.clone(),
            language: bib.language.clone(),
            ..Default::default()
        };

        for id in &bib.identifier {
            let value = Some(id.id.clone());
            match id.id_type.to_lowercase().as_str() {
                "doi" => content.doi = value,
                "isbn" => content.isbn = value,
                "issn" => content.issn = value,
                "pmid" => content.pmid = value,
                "pmcid" => content.pmcid = value,
                _ => {}
            }
        }
        content
    }
}
