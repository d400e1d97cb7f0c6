/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibcite Processor
//!
//! Turns normalized [`Content`] records into reference-list entries and
//! in-text citations (APA, MLA, Chicago author-date), and turns the raw
//! payloads of metadata providers (web pages, Crossref, Open Library,
//! NCBI) into `Content`.
//!
//! # Example
//!
//! ```rust
//! use bibcite_core::{build_authors, to_date_object, Content};
//! use bibcite_processor::styles::{format_apa, SourceType};
//!
//! let content = Content {
//!     author: build_authors(&["Isaac Newton"]),
//!     title: Some("Principia".to_string()),
//!     publisher: Some("Royal Society".to_string()),
//!     issued: Some(to_date_object(1687, None, None)),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     format_apa(&content, SourceType::Book),
//!     "Newton, I. (1687). <i>Principia</i>. Royal Society."
//! );
//! ```

pub mod error;
pub mod io;
pub mod providers;
pub mod render;
pub mod styles;

pub use bibcite_core::Content;
pub use error::ProcessorError;
pub use io::{load_references, parse_references, write_references, ReferenceFormat};
pub use providers::{Fetcher, Provider, ProviderError, Request, Resolver};
pub use render::{Html, OutputFormat, PlainText, RenderFormat};
pub use styles::{format_bibliography, format_intext, SourceType, Style};
