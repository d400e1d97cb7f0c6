/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reference-list entries and in-text citations in APA, MLA and Chicago
//! author-date style.
//!
//! Every formatter takes a [`Content`] and the [`SourceType`] layout to use,
//! and never fails: absent fields simply contribute nothing.

pub mod apa;
pub mod chicago;
pub mod mla;
pub mod names;
pub mod util;

pub use apa::{format_apa, render_apa};
pub use bibcite_core::SourceType;
pub use chicago::{format_chicago, render_chicago};
pub use mla::{format_mla, render_mla};
pub use util::{format_doi, format_edition};

use bibcite_core::Content;
use std::fmt;
use std::str::FromStr;

use crate::error::ProcessorError;
use crate::render::{Html, OutputFormat, PlainText, RenderFormat};
use names::intext_names;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    #[default]
    Apa,
    Mla,
    Chicago,
}

impl FromStr for Style {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(Style::Apa),
            "mla" | "modern-language-association" => Ok(Style::Mla),
            "chicago" | "chicago-author-date" => Ok(Style::Chicago),
            other => Err(ProcessorError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Apa => f.write_str("apa"),
            Style::Mla => f.write_str("mla"),
            Style::Chicago => f.write_str("chicago"),
        }
    }
}

impl Style {
    /// Render one reference-list entry.
    pub fn render<F: OutputFormat>(
        &self,
        content: &Content,
        source_type: SourceType,
        fmt: &F,
    ) -> String {
        match self {
            Style::Apa => render_apa(content, source_type, fmt),
            Style::Mla => render_mla(content, source_type, fmt),
            Style::Chicago => render_chicago(content, source_type, fmt),
        }
    }
}

/// The layout for a record: its own type when it maps to one, otherwise a
/// web page when it has a URL and a book when it does not.
pub fn layout_for(content: &Content) -> SourceType {
    content.source_type().unwrap_or_else(|| {
        if content.url().is_some() {
            SourceType::Webpage
        } else {
            SourceType::Book
        }
    })
}

/// A parenthetical in-text citation.
pub fn format_intext(style: Style, content: &Content) -> String {
    let authors = content.authors();
    let names = match style {
        Style::Apa => intext_names(&authors, "&", 3),
        Style::Mla => intext_names(&authors, "and", 3),
        Style::Chicago => intext_names(&authors, "and", 4),
    };
    let names = if names.is_empty() {
        content.title().unwrap_or_default().to_string()
    } else {
        names
    };
    let year = content
        .issued_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n.d.".to_string());

    let inner = match style {
        Style::Mla => names,
        Style::Apa if names.is_empty() => year,
        Style::Apa => format!("{}, {}", names, year),
        Style::Chicago if names.is_empty() => year,
        Style::Chicago => format!("{} {}", names, year),
    };
    if inner.is_empty() {
        return String::new();
    }
    format!("({})", inner)
}

/// Render and sort a reference list. The input slice keeps its order.
pub fn format_bibliography(
    style: Style,
    contents: &[Content],
    format: RenderFormat,
) -> Vec<String> {
    let mut sorted: Vec<&Content> = contents.iter().collect();
    sorted.sort_by_cached_key(|content| content.sort_key());
    sorted
        .into_iter()
        .map(|content| match format {
            RenderFormat::Html => style.render(content, layout_for(content), &Html),
            RenderFormat::Plain => style.render(content, layout_for(content), &PlainText),
        })
        .collect()
}
