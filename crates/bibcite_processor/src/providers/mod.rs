/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Normalizers for the metadata providers behind each identifier kind.
//!
//! Each provider module turns a raw payload into a [`Content`]. Fetching is
//! left to a [`Fetcher`] supplied by the caller, so the normalizers stay
//! pure and the network layer owns retries and timeouts.

pub mod crossref;
pub mod ncbi;
pub mod openlibrary;
pub mod webpage;

use std::fmt;
use std::str::FromStr;

use bibcite_core::reference::date::today;
use bibcite_core::{Author, Content, DateObject, Identifier, IdentifierKind, NumOrStr};
use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("no record found")]
    NotFound,

    #[error("unrecognized identifier: {0}")]
    Unrecognized(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// A metadata source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Webpage,
    Crossref,
    OpenLibrary,
    Pmc,
    Pubmed,
}

const CROSSREF_WORKS: &str = "https://api.crossref.org/works/";
const OPENLIBRARY_SEARCH: &str = "https://openlibrary.org/search.json";
const NCBI_CITATION_EXPORTER: &str = "https://api.ncbi.nlm.nih.gov/lit/ctxp/v1";

impl Provider {
    /// The provider that answers for an identifier kind.
    pub fn for_identifier(kind: IdentifierKind) -> Option<Provider> {
        match kind {
            IdentifierKind::Url => Some(Provider::Webpage),
            IdentifierKind::Doi => Some(Provider::Crossref),
            IdentifierKind::Isbn => Some(Provider::OpenLibrary),
            IdentifierKind::Pmcid => Some(Provider::Pmc),
            IdentifierKind::Pmid => Some(Provider::Pubmed),
            IdentifierKind::Undefined => None,
        }
    }

    /// Build the request for a lookup key (see [`Identifier::lookup_key`]).
    pub fn request(&self, key: &str) -> Request {
        let url = match self {
            Provider::Webpage => key.to_string(),
            Provider::Crossref => format!("{}{}", CROSSREF_WORKS, key),
            Provider::OpenLibrary => format!(
                "{}?q=isbn:{}&mode=everything&fields=*,editions",
                OPENLIBRARY_SEARCH, key
            ),
            Provider::Pmc => format!("{}/pmc/?format=csl&id={}", NCBI_CITATION_EXPORTER, key),
            Provider::Pubmed => format!("{}/pubmed/?format=csl&id={}", NCBI_CITATION_EXPORTER, key),
        };
        Request {
            provider: *self,
            url,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Webpage => "webpage",
            Provider::Crossref => "crossref",
            Provider::OpenLibrary => "openlibrary",
            Provider::Pmc => "pmc",
            Provider::Pubmed => "pubmed",
        }
    }

    /// Normalize a payload from this provider. `key` is the lookup key the
    /// payload was fetched with: the page URL or the queried ISBN.
    pub fn normalize_at(
        &self,
        payload: &str,
        key: &str,
        today: NaiveDate,
    ) -> Result<Content, ProviderError> {
        match self {
            Provider::Webpage => Ok(webpage::normalize_at(payload, key, today)),
            Provider::Crossref => crossref::normalize_at(payload, today),
            Provider::OpenLibrary => openlibrary::normalize_at(payload, key, today),
            Provider::Pmc | Provider::Pubmed => ncbi::normalize_at(payload, today),
        }
    }

    pub fn normalize(&self, payload: &str, key: &str) -> Result<Content, ProviderError> {
        self.normalize_at(payload, key, today())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    /// Accepts provider names and the identifier kinds they serve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webpage" | "url" => Ok(Provider::Webpage),
            "crossref" | "doi" => Ok(Provider::Crossref),
            "openlibrary" | "open-library" | "isbn" => Ok(Provider::OpenLibrary),
            "pmc" | "pmcid" => Ok(Provider::Pmc),
            "pubmed" | "pmid" => Ok(Provider::Pubmed),
            other => Err(ProviderError::Unrecognized(other.to_string())),
        }
    }
}

/// One HTTP GET to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub provider: Provider,
    pub url: String,
}

/// Performs a request and returns the response body.
///
/// Implementations report a missing record (HTTP 404) as
/// [`ProviderError::NotFound`] and transport problems as
/// [`ProviderError::NetworkFailure`].
pub trait Fetcher {
    fn fetch(&self, request: &Request) -> Result<String, ProviderError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, request: &Request) -> Result<String, ProviderError> {
        (**self).fetch(request)
    }
}

/// Identifier in, normalized record out.
#[derive(Debug, Clone)]
pub struct Resolver<F> {
    fetcher: F,
}

impl<F: Fetcher> Resolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn resolve(&self, identifier: &Identifier) -> Result<Content, ProviderError> {
        self.resolve_at(identifier, today())
    }

    /// Resolve with a fixed access date.
    pub fn resolve_at(
        &self,
        identifier: &Identifier,
        today: NaiveDate,
    ) -> Result<Content, ProviderError> {
        let provider = Provider::for_identifier(identifier.kind)
            .ok_or_else(|| ProviderError::Unrecognized(identifier.value.clone()))?;
        let key = identifier.lookup_key();
        let request = provider.request(&key);
        debug!(%provider, url = %request.url, "resolving identifier");
        let payload = self.fetcher.fetch(&request)?;
        provider.normalize_at(&payload, &key, today)
    }
}

// Field readers shared by the JSON providers. A field with an unexpected
// shape reads as absent.

pub(crate) fn parse_json(payload: &str) -> Result<Value, ProviderError> {
    serde_json::from_str(payload).map_err(|e| ProviderError::InvalidPayload(e.to_string()))
}

/// A non-blank string, a number, or the first such entry of an array.
pub(crate) fn string_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.iter().find_map(string_field),
        _ => None,
    }
}

pub(crate) fn num_or_str_field(value: &Value) -> Option<NumOrStr> {
    match value {
        Value::Number(n) => n.as_i64().map(NumOrStr::Number),
        other => string_field(other).map(NumOrStr::Str),
    }
}

pub(crate) fn date_field(value: &Value) -> Option<DateObject> {
    if value.is_null() {
        return None;
    }
    let date: DateObject = serde_json::from_value(value.clone()).ok()?;
    (!date.is_empty()).then_some(date)
}

/// CSL-style name objects, each with a fresh id. Unreadable entries are
/// skipped.
pub(crate) fn authors_field(value: &Value) -> Vec<Author> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Author>(item.clone()) {
            Ok(author) => Some(author.with_fresh_id()),
            Err(e) => {
                warn!(error = %e, "skipping unreadable author entry");
                None
            }
        })
        .filter(|author| !author.is_empty())
        .collect()
}

pub(crate) fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi.trim())
}
