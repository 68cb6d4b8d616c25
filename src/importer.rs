use std::path::Path;

use crate::error::{Result, TallyError};
use crate::models::RawRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row is row 1, so the first data row is row 2.
pub const FIRST_DATA_ROW: usize = 2;

// ---------------------------------------------------------------------------
// Column lookup
// ---------------------------------------------------------------------------

/// Positions of the named columns in the header row. Column order in the
/// file does not matter; a missing column stays `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Columns {
    category: Option<usize>,
    amount: Option<usize>,
    details: Option<usize>,
    date: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        // Last occurrence wins when a header name repeats.
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            category: find("Category"),
            amount: find("Amount"),
            details: find("Details"),
            date: find("Date"),
        }
    }

    fn extract(&self, record: &csv::StringRecord) -> RawRecord {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);
        RawRecord {
            category: field(self.category),
            amount: field(self.amount),
            details: field(self.details),
            date: field(self.date),
        }
    }
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Load the whole input table into memory, each record paired with its row
/// number. Fails before anything else happens if `path` does not exist.
pub fn read_records(path: &Path) -> Result<Vec<(usize, RawRecord)>> {
    if !path.exists() {
        return Err(TallyError::SourceNotFound(path.to_path_buf()));
    }
    let data = std::fs::read(path)?;
    let rows = parse_records(&data)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "read input");
    Ok(rows)
}

pub fn parse_records(data: &[u8]) -> Result<Vec<(usize, RawRecord)>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);
    let columns = Columns::from_headers(rdr.headers()?);
    if columns == Columns::default() {
        tracing::warn!("input has none of the Category, Amount, Details, Date columns");
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push((i + FIRST_DATA_ROW, columns.extract(&record)));
    }
    Ok(rows)
}
