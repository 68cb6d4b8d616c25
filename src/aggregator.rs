use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{Result, TallyError};
use crate::fmt;
use crate::models::NormalizedRecord;

/// Totals keyed by month (`YYYY-MM`), then category. `BTreeMap` keeps both
/// levels in ordinal (byte-wise, case-sensitive) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyReport {
    months: BTreeMap<String, BTreeMap<String, Decimal>>,
}

/// One line of the persisted summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub month: String,
    pub category: String,
    pub total: String,
}

impl MonthlyReport {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Add one amount to its (month, category) group, inserting a zero
    /// total first if the group is new.
    ///
    /// Fails with `TotalOverflow`, leaving the report unchanged, if the group
    /// total or the month's total across categories would leave `Decimal`'s
    /// range.
    pub fn add(&mut self, month: String, category: String, amount: Decimal) -> Result<()> {
        let existing = self.months.get(&month);
        let current = existing
            .and_then(|c| c.get(&category))
            .copied()
            .unwrap_or(Decimal::ZERO);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| TallyError::TotalOverflow(format!("{category} in {month}")))?;
        existing
            .map_or(Some(Decimal::ZERO), |c| checked_sum(c.values()))
            .and_then(|sum| sum.checked_add(amount))
            .ok_or_else(|| TallyError::TotalOverflow(month.clone()))?;

        let categories = self.months.entry(month).or_insert_with(BTreeMap::new);
        let total = categories.entry(category).or_insert(Decimal::ZERO);
        *total = updated;
        Ok(())
    }

    pub fn months(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Decimal>)> {
        self.months.iter().map(|(m, c)| (m.as_str(), c))
    }

    #[cfg(test)]
    pub fn total_for(&self, month: &str, category: &str) -> Option<Decimal> {
        self.months.get(month)?.get(category).copied()
    }

    /// Sum across a month's categories. Computed on demand, never stored.
    pub fn month_total(&self, month: &str) -> Result<Decimal> {
        match self.months.get(month) {
            Some(categories) => checked_sum(categories.values())
                .ok_or_else(|| TallyError::TotalOverflow(month.to_string())),
            None => Ok(Decimal::ZERO),
        }
    }

    /// Months ascending, then categories ascending, totals to two places.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.months
            .iter()
            .flat_map(|(month, categories)| {
                categories.iter().map(move |(category, total)| SummaryRow {
                    month: month.clone(),
                    category: category.clone(),
                    total: fmt::amount(*total),
                })
            })
            .collect()
    }
}

fn checked_sum<'a>(values: impl IntoIterator<Item = &'a Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
}

pub fn summarize_by_month(records: &[NormalizedRecord]) -> Result<MonthlyReport> {
    let mut report = MonthlyReport::default();
    for record in records {
        report.add(record.month_key(), record.category.clone(), record.amount)?;
    }
    Ok(report)
}
