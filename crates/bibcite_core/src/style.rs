/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The citation-style catalog and its search.
//!
//! Entries follow the shape of the CSL `styles.json` index: a style code
//! plus a long and an optional short name. Search matches plain substrings
//! and acronyms, so `cmos17e` and `cms17e` both find
//! "Chicago Manual of Style 17th edition".

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StyleName {
    pub long: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StyleEntry {
    pub code: String,
    pub name: StyleName,
}

impl StyleEntry {
    pub fn new(code: &str, long: &str, short: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            name: StyleName {
                long: long.to_string(),
                short: short.map(String::from),
            },
        }
    }

    pub fn is_popular(&self) -> bool {
        POPULAR_STYLES.contains(&self.code.as_str())
    }

    fn searchable(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.long.as_str()),
            self.name.short.as_deref(),
            Some(self.code.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for StyleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name.short {
            Some(short) => write!(f, "{} ({}) [{}]", self.name.long, short, self.code),
            None => write!(f, "{} [{}]", self.name.long, self.code),
        }
    }
}

/// Style codes listed ahead of everything else.
pub const POPULAR_STYLES: [&str; 10] = [
    "apa",
    "modern-language-association",
    "chicago-author-date",
    "chicago-note-bibliography",
    "harvard-cite-them-right",
    "ieee",
    "vancouver",
    "american-medical-association",
    "nature",
    "american-chemical-society",
];

/// The catalog used when no `styles.json` is configured.
pub fn builtin_catalog() -> Vec<StyleEntry> {
    vec![
        StyleEntry::new(
            "american-chemical-society",
            "American Chemical Society",
            Some("ACS"),
        ),
        StyleEntry::new(
            "american-medical-association",
            "American Medical Association 11th edition",
            Some("AMA"),
        ),
        StyleEntry::new(
            "american-political-science-association",
            "American Political Science Association",
            Some("APSA"),
        ),
        StyleEntry::new(
            "apa",
            "American Psychological Association 7th edition",
            Some("APA"),
        ),
        StyleEntry::new(
            "chicago-author-date",
            "Chicago Manual of Style 17th edition (author-date)",
            None,
        ),
        StyleEntry::new(
            "chicago-note-bibliography",
            "Chicago Manual of Style 17th edition (note)",
            None,
        ),
        StyleEntry::new("elsevier-harvard", "Elsevier - Harvard (with titles)", None),
        StyleEntry::new(
            "harvard-cite-them-right",
            "Cite Them Right 12th edition - Harvard",
            None,
        ),
        StyleEntry::new(
            "ieee",
            "IEEE Reference Guide version 11.29.2023",
            Some("IEEE"),
        ),
        StyleEntry::new(
            "modern-language-association",
            "Modern Language Association 9th edition",
            Some("MLA"),
        ),
        StyleEntry::new("nature", "Nature", None),
        StyleEntry::new(
            "turabian-author-date",
            "Turabian 9th edition (author-date)",
            None,
        ),
        StyleEntry::new("vancouver", "Vancouver", None),
    ]
}

/// Parse a `styles.json` index.
pub fn load_catalog(json: &str) -> Result<Vec<StyleEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

const STOP_WORDS: [&str; 11] = [
    "of", "and", "in", "on", "at", "the", "from", "to", "with", "by", "for",
];

/// First letter of each word, or all the digits of a word containing any.
pub fn acronym(name: &str, skip_stop_words: bool) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|word| word.trim_matches(|c| c == '(' || c == ')'))
        .filter(|word| !word.is_empty())
        .filter(|word| !(skip_stop_words && STOP_WORDS.contains(word)))
        .map(|word| {
            if word.chars().any(|c| c.is_ascii_digit()) {
                word.chars().filter(char::is_ascii_digit).collect()
            } else {
                word.chars().take(1).collect::<String>()
            }
        })
        .collect()
}

fn matches(text: &str, term: &str, compact_term: &str) -> bool {
    text.to_lowercase().contains(term)
        || acronym(text, false).contains(compact_term)
        || acronym(text, true).contains(compact_term)
}

/// Entries whose names or code match `term`. An empty term matches all.
pub fn search_styles<'a>(entries: &'a [StyleEntry], term: &str) -> Vec<&'a StyleEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return entries.iter().collect();
    }
    let compact: String = term.chars().filter(|c| !c.is_whitespace()).collect();
    entries
        .iter()
        .filter(|entry| entry.searchable().any(|text| matches(text, &term, &compact)))
        .collect()
}

/// Move popular styles to the front, keeping relative order otherwise.
pub fn sort_popular_first(entries: &mut [StyleEntry]) {
    entries.sort_by_key(|entry| !entry.is_popular());
}

/// Closest long names by Jaro-Winkler similarity, best first.
pub fn suggest_styles<'a>(entries: &'a [StyleEntry], term: &str) -> Vec<&'a StyleEntry> {
    let term = term.trim().to_lowercase();
    let mut scored: Vec<(f64, &StyleEntry)> = entries
        .iter()
        .map(|entry| {
            let score = entry
                .searchable()
                .map(|text| strsim::jaro_winkler(&text.to_lowercase(), &term))
                .fold(0.0, f64::max);
            (score, entry)
        })
        .filter(|(score, _)| *score >= 0.8)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(5).map(|(_, entry)| entry).collect()
}
