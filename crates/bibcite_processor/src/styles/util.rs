/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field helpers shared by the style rules.

use bibcite_core::{Content, NumOrStr, YearMonthDay};

use crate::render::OutputFormat;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// MLA abbreviates every month longer than four letters.
pub const MLA_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

pub fn mla_month(month: u32) -> Option<&'static str> {
    MLA_MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// `Month D, YYYY`, only for complete dates.
pub fn long_date(parts: &YearMonthDay) -> Option<String> {
    let year = parts.year?;
    let month = month_name(parts.month?)?;
    let day = parts.day?;
    Some(format!("{} {}, {}", month, day, year))
}

/// `D Mon. YYYY`, `Mon. YYYY` or `YYYY`, as much as is known.
pub fn mla_date(parts: &YearMonthDay) -> Option<String> {
    let year = parts.year?;
    match (parts.month.and_then(mla_month), parts.day) {
        (Some(month), Some(day)) => Some(format!("{} {} {}", day, month, year)),
        (Some(month), None) => Some(format!("{} {}", month, year)),
        _ => Some(year.to_string()),
    }
}

/// Append the ordinal suffix: `1st`, `2nd`, `3rd`, `11th`, `21st`.
pub fn format_edition(edition: i64) -> String {
    let suffix = match (edition % 100, edition % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", edition, suffix)
}

/// Normalize a DOI, bare or in any doi.org URL form, to `https://doi.org/...`.
pub fn format_doi(doi: &str) -> String {
    let doi = doi.trim();
    let without_scheme = ["https://", "http://"]
        .iter()
        .find_map(|scheme| {
            doi.get(..scheme.len())
                .filter(|head| head.eq_ignore_ascii_case(scheme))
                .map(|_| &doi[scheme.len()..])
        })
        .unwrap_or(doi);
    let normalized = without_scheme.replacen("dx.doi.org", "doi.org", 1);
    if normalized.starts_with("doi.org/") {
        format!("https://{}", normalized)
    } else {
        format!("https://doi.org/{}", normalized)
    }
}

/// The edition as it appears in a reference, e.g. `2nd ed.`. A first
/// edition is not worth mentioning.
pub fn edition_label(content: &Content) -> Option<String> {
    let edition = content.edition.as_ref()?;
    match edition.as_number() {
        Some(1) => None,
        Some(n) if edition.text()? == n.to_string() => Some(format!("{} ed.", format_edition(n))),
        _ => {
            let text = edition.text()?;
            let lower = text.to_lowercase();
            if lower.ends_with("ed.") || lower.ends_with("edition") {
                Some(text)
            } else {
                Some(format!("{} ed.", text))
            }
        }
    }
}

pub fn text(value: &Option<NumOrStr>) -> Option<String> {
    value.as_ref().and_then(NumOrStr::text)
}

/// Hyphenated page ranges use an en dash.
pub fn page_range(pages: &str) -> String {
    pages.trim().replace("--", "-").replace('-', "\u{2013}")
}

pub fn is_page_range(pages: &str) -> bool {
    pages.contains(['-', '\u{2013}', ','])
}

/// DOI link when there is a DOI, else the URL.
pub fn link_target(content: &Content) -> Option<String> {
    content
        .doi()
        .map(format_doi)
        .or_else(|| content.url().map(String::from))
}

pub fn ends_with_terminal(s: &str) -> bool {
    s.trim_end().ends_with(['.', '?', '!'])
}

/// `s` with a closing period unless it already ends a sentence.
pub fn with_period(s: &str) -> String {
    let s = s.trim_end();
    if ends_with_terminal(s) {
        s.to_string()
    } else {
        format!("{}.", s)
    }
}

/// A rendered link whose visible text is the target itself.
pub fn url_link<F: OutputFormat>(fmt: &F, url: &str) -> F::Output {
    fmt.link(url, fmt.text(url))
}

/// Italic title followed by a period where one is needed.
pub fn emph_title<F: OutputFormat>(fmt: &F, title: &str) -> F::Output {
    let suffix = if ends_with_terminal(title) { "" } else { "." };
    fmt.affix("", fmt.emph(fmt.text(title.trim())), suffix)
}

/// Quoted title with the period inside the quotes.
pub fn quoted_title<F: OutputFormat>(fmt: &F, title: &str) -> F::Output {
    fmt.quote(fmt.text(&with_period(title)))
}
