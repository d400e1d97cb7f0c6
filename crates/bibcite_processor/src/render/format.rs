/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// How the style rules turn text, emphasis, quotes and links into markup.
///
/// The APA, MLA and Chicago rules only ever talk to this trait, so the same
/// rules produce HTML for the UI and plain text for terminals and files.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type. Markup formats
    /// escape it here.
    fn text(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with emphasis (italics for titles and containers).
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Render content enclosed in quotation marks.
    fn quote(&self, content: Self::Output) -> Self::Output;

    /// Apply prefix and suffix strings to the content.
    fn affix(&self, prefix: &str, content: Self::Output, suffix: &str) -> Self::Output;

    /// Enclose the content in parentheses.
    fn parenthesize(&self, content: Self::Output) -> Self::Output;

    /// Hyperlink the content to a URL.
    fn link(&self, url: &str, content: Self::Output) -> Self::Output;
}
