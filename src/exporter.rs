use std::io::Write;
use std::path::Path;

use crate::aggregator::MonthlyReport;
use crate::error::Result;
use crate::models::RejectionEntry;

pub const SUMMARY_HEADER: &[&str] = &["Month", "Category", "TotalAmount"];
pub const REJECTED_HEADER: &[&str] = &["RowNumber", "Category", "Amount", "Details", "Date", "Reason"];

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

fn create_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(std::fs::File::create(path)?)
}

// ---------------------------------------------------------------------------
// Monthly summary
// ---------------------------------------------------------------------------

pub fn write_monthly_summary(writer: impl Write, report: &MonthlyReport) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(SUMMARY_HEADER)?;
    for row in report.summary_rows() {
        csv.write_record([&row.month, &row.category, &row.total])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_monthly_summary_file(path: &Path, report: &MonthlyReport) -> Result<()> {
    write_monthly_summary(create_file(path)?, report)?;
    tracing::info!(path = %path.display(), "wrote monthly summary");
    Ok(())
}

// ---------------------------------------------------------------------------
// Rejected rows
// ---------------------------------------------------------------------------

pub fn write_rejections(writer: impl Write, entries: &[RejectionEntry]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(REJECTED_HEADER)?;
    for entry in entries {
        csv.write_record([
            entry.row_number.to_string().as_str(),
            entry.category.as_str(),
            entry.amount.as_str(),
            entry.details.as_str(),
            entry.date.as_str(),
            entry.reason.reason(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// With no rejections the file must not exist afterwards: nothing is
/// written and a copy left by an earlier run is removed.
pub fn write_rejections_file(path: &Path, entries: &[RejectionEntry]) -> Result<()> {
    if entries.is_empty() {
        if path.exists() {
            std::fs::remove_file(path)?;
            tracing::warn!(path = %path.display(), "removed stale rejected rows file");
        }
        return Ok(());
    }
    write_rejections(create_file(path)?, entries)?;
    tracing::info!(path = %path.display(), rows = entries.len(), "wrote rejected rows");
    Ok(())
}
