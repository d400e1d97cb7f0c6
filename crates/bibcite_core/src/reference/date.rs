/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CSL-JSON date objects and the normalizer that builds them.

use bibcite_dates::LooseDate;
use chrono::{NaiveDate, SecondsFormat};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A CSL-JSON date.
///
/// `date-parts` holds a single `[year, month?, day?]` tuple. The derived
/// `raw`, `date_time` and `timestamp` fields are only set when all three
/// parts are known and form a real calendar date.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DateObject {
    #[serde(
        rename = "date-parts",
        default,
        deserialize_with = "lenient_date_parts",
        skip_serializing_if = "Vec::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Vec<Vec<i32>>"))]
    pub date_parts: Vec<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, alias = "date-time", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Date parts read back out of a [`DateObject`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct YearMonthDay {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// What the normalizer accepts: a full calendar date or just a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Year(i32),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<i32> for DateInput {
    fn from(year: i32) -> Self {
        DateInput::Year(year)
    }
}

/// Build a [`DateObject`].
///
/// A calendar date supplies all three parts and the optional `month` and
/// `day` are ignored. A bare year takes them from the arguments; a day
/// without a month is dropped.
pub fn to_date_object(input: impl Into<DateInput>, month: Option<u32>, day: Option<u32>) -> DateObject {
    use chrono::Datelike;

    let (year, month, day) = match input.into() {
        DateInput::Date(date) => (date.year(), Some(date.month()), Some(date.day())),
        DateInput::Year(year) => (year, month, month.and(day)),
    };

    let mut parts = vec![year];
    parts.extend(month.map(|m| m as i32));
    parts.extend(day.map(|d| d as i32));

    let mut object = DateObject {
        date_parts: vec![parts],
        ..Default::default()
    };

    let calendar = match (month, day) {
        (Some(m), Some(d)) => NaiveDate::from_ymd_opt(year, m, d),
        _ => None,
    };
    if let Some(date) = calendar {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            let utc = midnight.and_utc();
            object.raw = Some(date.format("%Y-%m-%d").to_string());
            object.date_time = Some(utc.to_rfc3339_opts(SecondsFormat::Millis, true));
            object.timestamp = Some(utc.timestamp_millis());
        }
    }
    object
}

/// Read the first `date-parts` tuple; a `raw`-only object is parsed instead.
pub fn from_date_object(date: &DateObject) -> YearMonthDay {
    match date.date_parts.first().filter(|parts| !parts.is_empty()) {
        Some(parts) => YearMonthDay {
            year: parts.first().copied(),
            month: parts.get(1).and_then(|&m| u32::try_from(m).ok()),
            day: parts.get(2).and_then(|&d| u32::try_from(d).ok()),
        },
        None => date
            .raw
            .as_deref()
            .and_then(bibcite_dates::parse_loose)
            .map(|loose| YearMonthDay {
                year: Some(loose.year),
                month: loose.month,
                day: loose.day,
            })
            .unwrap_or_default(),
    }
}

impl DateObject {
    pub fn parts(&self) -> YearMonthDay {
        from_date_object(self)
    }

    pub fn year(&self) -> Option<i32> {
        self.parts().year
    }

    pub fn is_empty(&self) -> bool {
        self.year().is_none()
    }

    /// Parse a provider date string such as `2021-03-04T10:00:00Z`.
    pub fn parse(s: &str) -> Option<Self> {
        bibcite_dates::parse_loose(s).map(Self::from)
    }
}

impl From<LooseDate> for DateObject {
    fn from(date: LooseDate) -> Self {
        to_date_object(date.year, date.month, date.day)
    }
}

impl From<NaiveDate> for DateObject {
    fn from(date: NaiveDate) -> Self {
        to_date_object(date, None, None)
    }
}

/// The local calendar date, used to stamp `accessed`.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// date-parts entries arrive as numbers, numeric strings or nulls depending on
// the provider. Each tuple stops at its first unreadable entry.
fn lenient_date_parts<'de, D>(deserializer: D) -> Result<Vec<Vec<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Vec<serde_json::Value>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|tuple| {
            tuple
                .iter()
                .map_while(|value| match value {
                    serde_json::Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
                    serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .filter(|tuple| !tuple.is_empty())
        .collect())
}
