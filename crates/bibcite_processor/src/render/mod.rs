/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output formats for rendered references.

pub mod format;
pub mod html;
pub mod plain;

#[cfg(test)]
mod test_formats;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

use std::fmt;
use std::str::FromStr;

/// The output formats a caller can pick at run time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Html,
    Plain,
}

impl FromStr for RenderFormat {
    type Err = crate::ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "plain" | "text" | "txt" => Ok(RenderFormat::Plain),
            other => Err(crate::ProcessorError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Html => f.write_str("html"),
            RenderFormat::Plain => f.write_str("plain"),
        }
    }
}
