/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! bibcite_dates - a forgiving date parser for provider metadata
//!
//! Webpage meta tags, library catalogs and CSL `raw` dates hand us strings such
//! as `2021-03-04T10:00:00Z`, `March 4, 2021`, `4 Mar 2021` or just `2021`.
//! This crate reduces them to a year with an optional month and day.

use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use std::fmt;

/// A calendar date with optional month and day precision.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LooseDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl LooseDate {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    pub fn year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
        }
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }
}

impl fmt::Display for LooseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{:02}", m)?;
            if let Some(d) = self.day {
                write!(f, "-{:02}", d)?;
            }
        }
        Ok(())
    }
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Map an English month name or abbreviation ("Sept", "oct") to 1-12.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(name.as_str()))
        .map(|i| i as u32 + 1)
}

fn parse_year(input: &mut &str) -> Result<i32, ErrMode<ContextError>> {
    take_while(4, '0'..='9')
        .try_map(|s: &str| s.parse::<i32>())
        .parse_next(input)
}

fn parse_month_number(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    take_while(1..=2, '0'..='9')
        .try_map(|s: &str| s.parse::<u32>())
        .verify(|m: &u32| (1..=12).contains(m))
        .parse_next(input)
}

fn parse_day(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    terminated(
        take_while(1..=2, '0'..='9')
            .try_map(|s: &str| s.parse::<u32>())
            .verify(|d: &u32| (1..=31).contains(d)),
        opt(alt(("st", "nd", "rd", "th"))),
    )
    .parse_next(input)
}

fn parse_month_name(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    terminated(
        take_while(3.., |c: char| c.is_ascii_alphabetic()).verify_map(month_from_name),
        opt('.'),
    )
    .parse_next(input)
}

/// `2021`, `2021-03`, `2021-03-04`, `2021/03/04`, optionally followed by a time.
fn parse_numeric(input: &mut &str) -> Result<LooseDate, ErrMode<ContextError>> {
    let year = parse_year.parse_next(input)?;
    let month = opt(preceded(alt(('-', '/')), parse_month_number)).parse_next(input)?;
    let day = if month.is_some() {
        opt(preceded(alt(('-', '/')), parse_day)).parse_next(input)?
    } else {
        None
    };
    // Time of day is irrelevant for citation dates.
    let _ = opt(preceded(alt(('T', ' ')), rest)).parse_next(input)?;
    eof.parse_next(input)?;
    Ok(LooseDate { year, month, day })
}

/// `March 4, 2021` or `Mar. 4th 2021`.
fn parse_month_day_year(input: &mut &str) -> Result<LooseDate, ErrMode<ContextError>> {
    let month = parse_month_name.parse_next(input)?;
    space1.parse_next(input)?;
    let day = parse_day.parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    space1.parse_next(input)?;
    let year = parse_year.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(LooseDate::ymd(year, month, day))
}

/// `4 March 2021`.
fn parse_day_month_year(input: &mut &str) -> Result<LooseDate, ErrMode<ContextError>> {
    let day = parse_day.parse_next(input)?;
    space1.parse_next(input)?;
    let month = parse_month_name.parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    space1.parse_next(input)?;
    let year = parse_year.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(LooseDate::ymd(year, month, day))
}

/// `March 2021`.
fn parse_month_year(input: &mut &str) -> Result<LooseDate, ErrMode<ContextError>> {
    let month = parse_month_name.parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    space0.parse_next(input)?;
    let year = parse_year.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(LooseDate::year_month(year, month))
}

/// Parses a loose date, consuming the whole input.
pub fn parse(input: &mut &str) -> Result<LooseDate, ErrMode<ContextError>> {
    alt((
        parse_numeric,
        parse_month_day_year,
        parse_day_month_year,
        parse_month_year,
    ))
    .parse_next(input)
}

/// Main entry point: trims the string and returns `None` for anything that
/// does not look like a date.
pub fn parse_loose(s: &str) -> Option<LooseDate> {
    let mut input = s.trim();
    if input.is_empty() {
        return None;
    }
    parse(&mut input).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_only() {
        assert_eq!(parse_loose("1687"), Some(LooseDate::year(1687)));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_loose("2023-05-15"), Some(LooseDate::ymd(2023, 5, 15)));
        assert_eq!(parse_loose("2023-05"), Some(LooseDate::year_month(2023, 5)));
        assert_eq!(parse_loose("2023/5/7"), Some(LooseDate::ymd(2023, 5, 7)));
    }

    #[test]
    fn test_iso_datetime_ignores_time() {
        assert_eq!(
            parse_loose("2021-03-04T10:15:00+01:00"),
            Some(LooseDate::ymd(2021, 3, 4))
        );
        assert_eq!(
            parse_loose(" 2021-03-04 10:15 "),
            Some(LooseDate::ymd(2021, 3, 4))
        );
    }

    #[test]
    fn test_textual_forms() {
        assert_eq!(parse_loose("March 4, 2021"), Some(LooseDate::ymd(2021, 3, 4)));
        assert_eq!(parse_loose("Sept. 21st 1999"), Some(LooseDate::ymd(1999, 9, 21)));
        assert_eq!(parse_loose("4 Mar 2021"), Some(LooseDate::ymd(2021, 3, 4)));
        assert_eq!(parse_loose("June 2004"), Some(LooseDate::year_month(2004, 6)));
        assert_eq!(parse_loose("Dec, 2004"), Some(LooseDate::year_month(2004, 12)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_loose(""), None);
        assert_eq!(parse_loose("yesterday"), None);
        assert_eq!(parse_loose("2023-13-01"), None);
        assert_eq!(parse_loose("Mayday 2020"), None);
        assert_eq!(parse_loose("12345"), None);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("January"), Some(1));
        assert_eq!(month_from_name("sep"), Some(9));
        assert_eq!(month_from_name("Ma"), None);
    }

    #[test]
    fn test_display() {
        let cases = vec!["2023-05-15", "0999", "2004-06"];
        for case in cases {
            assert_eq!(parse_loose(case).unwrap().to_string(), case);
        }
    }
}
