use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// One input row exactly as read, before any parsing. `None` means the
/// column is absent from the header or the row is too short to reach it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
}

/// A row that passed every field check and carries the cleaned values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub category: String,
    pub amount: Decimal,
    pub details: String,
    pub date: NaiveDate,
}

impl NormalizedRecord {
    /// Grouping key, `YYYY-MM`. Always derived from `date`.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

/// Why a row was diverted to the rejection list. Only the first failing
/// field check is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFailure {
    MissingCategory,
    MissingAmount,
    InvalidAmount,
    MissingDate,
    InvalidDateFormat,
}

impl RowFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingCategory => "Missing category",
            Self::MissingAmount => "Missing amount",
            Self::InvalidAmount => "Invalid amount",
            Self::MissingDate => "Missing date",
            Self::InvalidDateFormat => "Invalid date format",
        }
    }
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// A rejected input row, kept with its trimmed source text for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionEntry {
    /// 1-based, header is row 1.
    pub row_number: usize,
    pub category: String,
    pub amount: String,
    pub details: String,
    pub date: String,
    pub reason: RowFailure,
}

impl RejectionEntry {
    pub fn new(row_number: usize, raw: &RawRecord, reason: RowFailure) -> Self {
        fn trimmed(value: &Option<String>) -> String {
            value.as_deref().unwrap_or("").trim().to_string()
        }
        Self {
            row_number,
            category: trimmed(&raw.category),
            amount: trimmed(&raw.amount),
            details: trimmed(&raw.details),
            date: trimmed(&raw.date),
            reason,
        }
    }
}
