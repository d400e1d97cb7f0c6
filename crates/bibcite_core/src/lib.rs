/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! bibcite_core - the data model behind a bibliography manager.
//!
//! Holds the CSL-JSON shaped [`Content`] record, the identifier recognizer,
//! the date normalizer, the author list builder and the citation-style
//! catalog. Formatting and provider normalization live in
//! `bibcite_processor`.

pub mod identifier;
pub mod reference;
pub mod style;

pub use identifier::{parse_identifier_list, recognize, Identifier, IdentifierKind};
pub use reference::{
    build_authors, from_date_object, to_date_object, Author, AuthorName, BibJson, Content,
    DateInput, DateObject, ItemType, NumOrStr, SourceType, YearMonthDay,
};
pub use style::{search_styles, StyleEntry, StyleName};
