use colored::Colorize;

use crate::aggregator::summarize_by_month;
use crate::classifier::classify;
use crate::cli::summary::{exclusion_notice, format_report};
use crate::error::Result;
use crate::exporter::{write_monthly_summary_file, write_rejections_file};
use crate::importer::read_records;
use crate::settings::{load_settings, PathOverrides};

pub fn run(overrides: &PathOverrides) -> Result<()> {
    let paths = load_settings().resolve(overrides);

    let rows = read_records(&paths.source)?;
    let classified = classify(&rows);
    tracing::info!(
        valid = classified.valid.len(),
        rejected = classified.rejected.len(),
        "classified rows"
    );

    let report = summarize_by_month(&classified.valid)?;
    let console = format_report(&report)?;
    write_monthly_summary_file(&paths.summary, &report)?;
    write_rejections_file(&paths.rejected, &classified.rejected)?;

    print!("{console}");
    if !classified.rejected.is_empty() {
        let name = paths
            .rejected
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| paths.rejected.display().to_string());
        println!();
        println!("{}", exclusion_notice(classified.rejected.len(), &name).as_str().yellow());
    }
    Ok(())
}
