//! The helper library exposed to templates as named globals.
//!
//! Every helper is a pure function over its arguments; the environment
//! factory wraps them into minijinja functions.

use chrono::{Datelike, Locale, Months, NaiveDate};
use minijinja::Value;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

/// Calendar-aware difference between two dates.
///
/// `start + delta == end` holds, with month arithmetic clamping the day to
/// the target month's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDelta {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

/// Joins the non-empty `city`, `region` and `country` fields of a mapping
/// with `", "`, preserving that order. All-absent fields yield an empty
/// string; `include_city` drops the city segment entirely.
pub fn location(parts: &Value, include_city: bool) -> String {
    let mut segments = Vec::new();
    for key in ["city", "region", "country"] {
        if key == "city" && !include_city {
            continue;
        }
        if let Ok(value) = parts.get_attr(key) {
            if !value.is_undefined() && !value.is_none() {
                let text = value.to_string();
                if !text.is_empty() {
                    segments.push(text);
                }
            }
        }
    }
    segments.join(", ")
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
}

/// Today's date, the "present" endpoint for open-ended durations.
pub fn now_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// strftime-style formatting with month/day names from an explicit locale
/// rather than a process-wide `setlocale`.
pub fn format_date(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    date.format_localized(pattern, locale).to_string()
}

/// Calendar-accurate delta between two dates, decomposed into years,
/// months and days. Not a fixed day-count division: a month's worth of
/// days depends on where in the calendar it falls.
pub fn relative_delta_date(end: NaiveDate, start: NaiveDate) -> DateDelta {
    let (negate, earlier, later) =
        if end < start { (true, end, start) } else { (false, start, end) };

    let mut months = (later.year() - earlier.year()) * 12
        + (later.month() as i32 - earlier.month() as i32);
    let mut anchor = add_months(earlier, months);
    if anchor > later {
        months -= 1;
        anchor = add_months(earlier, months);
    }
    let days = (later - anchor).num_days();

    let (mut years, mut months) = (months / 12, months % 12);
    let mut days = days;
    if negate {
        years = -years;
        months = -months;
        days = -days;
    }
    DateDelta { years, months, days }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    // months is bounded by the year span of the two inputs, so the only
    // failure mode is a date near NaiveDate::MAX; clamp there.
    date.checked_add_months(Months::new(months.max(0) as u32))
        .unwrap_or(NaiveDate::MAX)
}

/// Converts a markdown fragment to HTML for embedding. Tables, footnotes,
/// strikethrough and task lists are enabled; raw HTML passes through.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
