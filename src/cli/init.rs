use crate::error::Result;
use crate::settings::{load_settings, save_settings_to, settings_path, PathOverrides};

pub fn run(overrides: &PathOverrides) -> Result<()> {
    let path = settings_path();
    let mut settings = load_settings();
    settings.apply(overrides);
    save_settings_to(&path, &settings)?;

    println!("Saved settings to {}", path.display());
    let paths = settings.resolve(&PathOverrides::default());
    println!("Input:      {}", paths.source.display());
    println!("Summary:    {}", paths.summary.display());
    println!("Rejected:   {}", paths.rejected.display());
    Ok(())
}
