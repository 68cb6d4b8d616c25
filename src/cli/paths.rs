use crate::error::Result;
use crate::settings::{load_settings, settings_path, PathOverrides};

pub fn run(overrides: &PathOverrides) -> Result<()> {
    let settings_file = settings_path();
    let paths = load_settings().resolve(overrides);

    let marker = if settings_file.exists() { "" } else { " (not found, using defaults)" };
    println!("Settings:   {}{marker}", settings_file.display());
    println!("Input:      {}", paths.source.display());
    println!("Summary:    {}", paths.summary.display());
    println!("Rejected:   {}", paths.rejected.display());
    Ok(())
}
