/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value that could be either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum NumOrStr {
    Number(i64),
    Str(String),
}

impl NumOrStr {
    /// The value as text, or `None` when it is blank.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(n.to_string()),
            Self::Str(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Self::Str(_) => None,
        }
    }

    /// The leading integer, if the value has one (`"2"`, `"2nd"`, `2`).
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Str(s) => {
                let digits: String = s
                    .trim()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().ok()
            }
        }
    }
}

impl fmt::Display for NumOrStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for NumOrStr {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for NumOrStr {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for NumOrStr {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// The CSL item type tag.
///
/// Unknown tags are kept verbatim so records survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Webpage,
    ArticleJournal,
    ArticleMagazine,
    ArticleNewspaper,
    Book,
    Chapter,
    PaperConference,
    Report,
    Thesis,
    Manuscript,
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Webpage => "webpage",
            ItemType::ArticleJournal => "article-journal",
            ItemType::ArticleMagazine => "article-magazine",
            ItemType::ArticleNewspaper => "article-newspaper",
            ItemType::Book => "book",
            ItemType::Chapter => "chapter",
            ItemType::PaperConference => "paper-conference",
            ItemType::Report => "report",
            ItemType::Thesis => "thesis",
            ItemType::Manuscript => "manuscript",
            ItemType::Other(tag) => tag,
        }
    }
}

impl From<String> for ItemType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "webpage" => ItemType::Webpage,
            "article-journal" => ItemType::ArticleJournal,
            "article-magazine" => ItemType::ArticleMagazine,
            "article-newspaper" => ItemType::ArticleNewspaper,
            "book" => ItemType::Book,
            "chapter" => ItemType::Chapter,
            "paper-conference" => ItemType::PaperConference,
            "report" => ItemType::Report,
            "thesis" => ItemType::Thesis,
            "manuscript" => ItemType::Manuscript,
            _ => ItemType::Other(tag),
        }
    }
}

impl From<&str> for ItemType {
    fn from(tag: &str) -> Self {
        ItemType::from(tag.to_string())
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for ItemType {
    fn schema_name() -> String {
        "ItemType".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

/// The three source shapes the formatters know how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Webpage,
    ArticleJournal,
    Book,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown source type: {0}")]
pub struct UnknownSourceType(pub String);

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webpage" => Ok(SourceType::Webpage),
            "article-journal" | "journal-article" | "journal" => Ok(SourceType::ArticleJournal),
            "book" => Ok(SourceType::Book),
            _ => Err(UnknownSourceType(s.to_string())),
        }
    }
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Webpage => "webpage",
            SourceType::ArticleJournal => "article-journal",
            SourceType::Book => "book",
        }
    }

    /// Direct mapping for the three item types the formatters lay out.
    pub fn from_item_type(item_type: &ItemType) -> Option<Self> {
        match item_type {
            ItemType::Webpage => Some(SourceType::Webpage),
            ItemType::ArticleJournal => Some(SourceType::ArticleJournal),
            ItemType::Book => Some(SourceType::Book),
            ItemType::Other(tag) => tag.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
