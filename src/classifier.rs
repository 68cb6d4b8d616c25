use crate::models::{NormalizedRecord, RawRecord, RejectionEntry};
use crate::validator::validate_record;

/// Output of [`classify`]. Both lists keep input row order.
#[derive(Debug, Default)]
pub struct Classified {
    pub valid: Vec<NormalizedRecord>,
    pub rejected: Vec<RejectionEntry>,
}

impl Classified {
    pub fn total(&self) -> usize {
        self.valid.len() + self.rejected.len()
    }
}

/// Split numbered raw rows into accepted and rejected rows. Each input row
/// lands in exactly one of the two lists.
pub fn classify<'a, I>(rows: I) -> Classified
where
    I: IntoIterator<Item = &'a (usize, RawRecord)>,
{
    let mut out = Classified::default();
    for (row_number, raw) in rows {
        match validate_record(raw) {
            Ok(record) => out.valid.push(record),
            Err(reason) => {
                tracing::debug!(row = row_number, %reason, "row rejected");
                out.rejected.push(RejectionEntry::new(*row_number, raw, reason));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowFailure;

    fn numbered(rows: &[(&str, &str, &str)]) -> Vec<(usize, RawRecord)> {
        rows.iter()
            .enumerate()
            .map(|(i, (category, amount, date))| {
                (
                    i + 2,
                    RawRecord {
                        category: Some(category.to_string()),
                        amount: Some(amount.to_string()),
                        details: Some(String::new()),
                        date: Some(date.to_string()),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_classify_partitions_every_row() {
        let rows = numbered(&[
            ("Food", "10.00", "01-01-2024"),
            ("", "5", "01-01-2024"),
            ("Rent", "900", "01-02-2024"),
            ("Bad", "x", "01-01-2024"),
            ("Fuel", "40", "2024-01-01"),
        ]);
        let result = classify(&rows);
        assert_eq!(result.total(), rows.len());
        assert_eq!(result.valid.len(), 2);
        assert_eq!(result.rejected.len(), 3);
    }

    #[test]
    fn test_classify_keeps_row_order_and_numbers() {
        let rows = numbered(&[
            ("", "5", "01-01-2024"),
            ("Food", "1", "01-01-2024"),
            ("Bad", "x", "01-01-2024"),
            ("Fuel", "40", ""),
        ]);
        let result = classify(&rows);
        let numbers: Vec<usize> = result.rejected.iter().map(|r| r.row_number).collect();
        assert_eq!(numbers, vec![2, 4, 5]);
        let reasons: Vec<RowFailure> = result.rejected.iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            vec![RowFailure::MissingCategory, RowFailure::InvalidAmount, RowFailure::MissingDate]
        );
        assert_eq!(result.valid[0].category, "Food");
    }

    #[test]
    fn test_classify_empty_batch() {
        let rows: Vec<(usize, RawRecord)> = Vec::new();
        let result = classify(&rows);
        assert!(result.valid.is_empty());
        assert!(result.rejected.is_empty());
    }
}
