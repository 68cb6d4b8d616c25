use crate::aggregator::MonthlyReport;
use crate::error::Result;
use crate::fmt::amount;

pub const NO_VALID_ROWS: &str = "No valid expense rows were found.";

/// Console rendering of the report: each month with its categories in
/// order, followed by the month total.
pub fn format_report(report: &MonthlyReport) -> Result<String> {
    if report.is_empty() {
        return Ok(format!("{NO_VALID_ROWS}\n"));
    }
    let mut out = String::from("Category-wise expenses by month:\n\n");
    for (month, categories) in report.months() {
        out.push_str(&format!("{month}\n"));
        for (category, total) in categories {
            out.push_str(&format!("{category}, {}\n", amount(*total)));
        }
        out.push_str(&format!("    Total: {}\n\n", amount(report.month_total(month)?)));
    }
    Ok(out)
}

pub fn exclusion_notice(count: usize, rejected_file: &str) -> String {
    format!("{count} row(s) were excluded. See '{rejected_file}' for details.")
}
