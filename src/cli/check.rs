use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::classifier::{classify, Classified};
use crate::error::Result;
use crate::fmt::rows;
use crate::importer::read_records;
use crate::settings::{load_settings, PathOverrides};

pub fn run(overrides: &PathOverrides) -> Result<()> {
    let paths = load_settings().resolve(overrides);
    let records = read_records(&paths.source)?;
    let classified = classify(&records);
    println!("{}", format_check(&classified));
    Ok(())
}

pub fn format_check(classified: &Classified) -> String {
    let counts = format!(
        "{} checked: {} valid, {} rejected",
        rows(classified.total()),
        classified.valid.len(),
        classified.rejected.len()
    );
    if classified.rejected.is_empty() {
        return format!("{counts}\n{}", "All rows are valid.".green());
    }

    let mut table = Table::new();
    table.set_header(vec!["Row", "Category", "Amount", "Details", "Date", "Reason"]);
    for entry in &classified.rejected {
        table.add_row(vec![
            Cell::new(entry.row_number),
            Cell::new(&entry.category),
            Cell::new(&entry.amount),
            Cell::new(&entry.details),
            Cell::new(&entry.date),
            Cell::new(entry.reason.reason()),
        ]);
    }
    format!("{counts}\nRejected rows\n{table}")
}
