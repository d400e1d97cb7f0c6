/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Recognition of the identifiers people paste into a citation form:
//! URLs, DOIs, PubMed Central ids, PubMed ids and ISBNs.

use once_cell::sync::Lazy;
use regex::Regex;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum IdentifierKind {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "DOI")]
    Doi,
    #[serde(rename = "PMCID")]
    Pmcid,
    #[serde(rename = "PMID")]
    Pmid,
    #[serde(rename = "ISBN")]
    Isbn,
    #[serde(rename = "undefined")]
    Undefined,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Url => "URL",
            IdentifierKind::Doi => "DOI",
            IdentifierKind::Pmcid => "PMCID",
            IdentifierKind::Pmid => "PMID",
            IdentifierKind::Isbn => "ISBN",
            IdentifierKind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified identifier. `value` is trimmed and has any explicit
/// `kind:` prefix removed; otherwise it keeps the user's casing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub value: String,
}

impl Identifier {
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.kind != IdentifierKind::Undefined
    }

    /// The form a metadata provider expects in its query: a bare DOI,
    /// PMCID digits, an ISBN without separators.
    pub fn lookup_key(&self) -> String {
        match self.kind {
            IdentifierKind::Doi => DOI_URL_PREFIX.replace(&self.value, "").into_owned(),
            IdentifierKind::Pmcid => {
                let value = self.value.trim();
                match value.get(..3) {
                    Some(prefix) if prefix.eq_ignore_ascii_case("pmc") => value[3..].to_string(),
                    _ => value.to_string(),
                }
            }
            IdentifierKind::Isbn => strip_isbn_separators(&self.value),
            _ => self.value.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

const PREFIXES: [(&str, IdentifierKind); 5] = [
    ("url:", IdentifierKind::Url),
    ("doi:", IdentifierKind::Doi),
    ("pmcid:", IdentifierKind::Pmcid),
    ("pmid:", IdentifierKind::Pmid),
    ("isbn:", IdentifierKind::Isbn),
];

static DOI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:https?://)?(?:dx\.)?doi\.org/)?10\.\d{4,9}/[-._;()/:a-z0-9\[\]<>]+$")
        .unwrap()
});
static DOI_URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?://)?(?:dx\.)?doi\.org/").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://\S+$").unwrap());
static PMCID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^PMC\d+$").unwrap());
static PMID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{7,10}$").unwrap());
static ISBN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:97[89]\d{10}|\d{9}[\dXx])$").unwrap());
static WORD_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+:\s*").unwrap());
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-|\*|\d+[.)-])?\s+").unwrap());

fn strip_isbn_separators(value: &str) -> String {
    value.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect()
}

fn is_url(value: &str) -> bool {
    URL.is_match(value) && url::Url::parse(value).is_ok()
}

/// Classify one user-entered string. Never fails: anything unrecognized
/// comes back as [`IdentifierKind::Undefined`].
pub fn recognize(input: &str) -> Identifier {
    let trimmed = input.trim();

    for (prefix, kind) in PREFIXES {
        if let Some(head) = trimmed.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return Identifier::new(kind, trimmed[prefix.len()..].trim());
            }
        }
    }

    let kind = if DOI.is_match(trimmed) {
        IdentifierKind::Doi
    } else if is_url(trimmed) {
        IdentifierKind::Url
    } else if PMCID.is_match(trimmed) {
        IdentifierKind::Pmcid
    } else if PMID.is_match(trimmed) {
        IdentifierKind::Pmid
    } else if ISBN.is_match(&strip_isbn_separators(trimmed)) {
        IdentifierKind::Isbn
    } else {
        let value = WORD_PREFIX.replace(trimmed, "");
        return Identifier::new(IdentifierKind::Undefined, value.trim());
    };
    Identifier::new(kind, trimmed)
}

/// Split pasted text into one entry per line, dropping list markers
/// (`-`, `*`, `1.`, `1)`, `1-`) and blank lines.
pub fn parse_identifier_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
