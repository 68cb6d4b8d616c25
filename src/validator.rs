use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{NormalizedRecord, RawRecord, RowFailure};

// ---------------------------------------------------------------------------
// Date layouts
// ---------------------------------------------------------------------------

/// A day-month-year layout. Day and month take one or two digits; the year
/// takes exactly `year_digits`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateLayout {
    pub separator: char,
    pub year_digits: usize,
}

/// Tried in order; the first full match wins.
pub const DATE_LAYOUTS: &[DateLayout] = &[
    DateLayout { separator: '-', year_digits: 4 },
    DateLayout { separator: '-', year_digits: 2 },
    DateLayout { separator: '/', year_digits: 4 },
    DateLayout { separator: '/', year_digits: 2 },
];

/// Two-digit years at or above this resolve to 19xx, below it to 20xx.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

pub fn expand_two_digit_year(yy: i32) -> i32 {
    if yy >= TWO_DIGIT_YEAR_PIVOT {
        1900 + yy
    } else {
        2000 + yy
    }
}

fn digits(part: &str, min: usize, max: usize) -> Option<u32> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl DateLayout {
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = text.split(self.separator).collect();
        if parts.len() != 3 {
            return None;
        }
        let day = digits(parts[0], 1, 2)?;
        let month = digits(parts[1], 1, 2)?;
        let year = digits(parts[2], self.year_digits, self.year_digits)? as i32;
        let year = if self.year_digits == 2 {
            expand_two_digit_year(year)
        } else {
            year
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Collapse internal whitespace runs to one space and trim the ends.
pub fn parse_category(value: Option<&str>) -> Result<String, RowFailure> {
    let cleaned = value
        .unwrap_or("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        return Err(RowFailure::MissingCategory);
    }
    Ok(cleaned)
}

/// Thousands-separator commas are dropped; currency symbols are not.
/// Values outside `Decimal`'s range (magnitude above about 7.9e28, or an
/// exponent needing more than 28 fractional digits) are `InvalidAmount`.
pub fn parse_amount(value: Option<&str>) -> Result<Decimal, RowFailure> {
    let stripped = value.unwrap_or("").replace(',', "");
    let normalized = stripped.trim();
    if normalized.is_empty() {
        return Err(RowFailure::MissingAmount);
    }
    Decimal::from_str(normalized)
        .or_else(|_| Decimal::from_scientific(normalized))
        .map_err(|_| RowFailure::InvalidAmount)
}

pub fn parse_date(value: Option<&str>) -> Result<NaiveDate, RowFailure> {
    let cleaned = value.unwrap_or("").trim();
    if cleaned.is_empty() {
        return Err(RowFailure::MissingDate);
    }
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(cleaned))
        .ok_or(RowFailure::InvalidDateFormat)
}

pub fn parse_details(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

/// Checks category, then amount, then date, stopping at the first failure.
pub fn validate_record(raw: &RawRecord) -> Result<NormalizedRecord, RowFailure> {
    let category = parse_category(raw.category.as_deref())?;
    let amount = parse_amount(raw.amount.as_deref())?;
    let date = parse_date(raw.date.as_deref())?;
    Ok(NormalizedRecord {
        category,
        amount,
        details: parse_details(raw.details.as_deref()),
        date,
    })
}
