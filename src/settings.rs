use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_source_file")]
    pub source_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_rejected_file")]
    pub rejected_file: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_source_file() -> String {
    "expenses.csv".to_string()
}

fn default_summary_file() -> String {
    "monthly_expenses_summary.csv".to_string()
}

fn default_rejected_file() -> String {
    "invalid_expenses.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            source_file: default_source_file(),
            summary_file: default_summary_file(),
            rejected_file: default_rejected_file(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tally")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// A missing file gives the defaults; so does a broken one, with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| TallyError::Settings(e.to_string()))
        .and_then(|content| {
            serde_json::from_str(&content).map_err(|e| TallyError::Settings(e.to_string()))
        });
    match parsed {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TallyError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Resolved paths
// ---------------------------------------------------------------------------

/// Command-line overrides; any `Some` beats the settings file.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub data_dir: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub rejected: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunPaths {
    pub source: PathBuf,
    pub summary: PathBuf,
    pub rejected: PathBuf,
}

fn under(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

fn lossy(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl Settings {
    /// Fold overrides into the stored settings, for saving as new defaults.
    pub fn apply(&mut self, overrides: &PathOverrides) {
        if let Some(dir) = &overrides.data_dir {
            self.data_dir = lossy(dir);
        }
        if let Some(input) = &overrides.input {
            self.source_file = lossy(input);
        }
        if let Some(summary) = &overrides.summary {
            self.summary_file = lossy(summary);
        }
        if let Some(rejected) = &overrides.rejected {
            self.rejected_file = lossy(rejected);
        }
    }

    pub fn resolve(&self, overrides: &PathOverrides) -> RunPaths {
        let dir = overrides
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.data_dir));
        let pick = |o: &Option<PathBuf>, default: &str| {
            under(&dir, o.as_deref().unwrap_or_else(|| Path::new(default)))
        };
        RunPaths {
            source: pick(&overrides.input, &self.source_file),
            summary: pick(&overrides.summary, &self.summary_file),
            rejected: pick(&overrides.rejected, &self.rejected_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/books".to_string(),
            source_file: "march.csv".to_string(),
            ..Settings::default()
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"data_dir": "/srv/ledger"}"#).unwrap();
        let loaded = load_settings_from(&path);
        assert_eq!(loaded.data_dir, "/srv/ledger");
        assert_eq!(loaded.source_file, "expenses.csv");
        assert_eq!(loaded.rejected_file, "invalid_expenses.csv");
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
        assert_eq!(load_settings_from(&dir.path().join("absent.json")), Settings::default());
    }

    #[test]
    fn test_resolve_joins_data_dir() {
        let settings = Settings {
            data_dir: "/data".to_string(),
            ..Settings::default()
        };
        let paths = settings.resolve(&PathOverrides::default());
        assert_eq!(paths.source, PathBuf::from("/data/expenses.csv"));
        assert_eq!(paths.summary, PathBuf::from("/data/monthly_expenses_summary.csv"));
        assert_eq!(paths.rejected, PathBuf::from("/data/invalid_expenses.csv"));
    }

    #[test]
    fn test_apply_then_resolve_matches_overrides() {
        let overrides = PathOverrides {
            data_dir: Some(PathBuf::from("/books")),
            summary: Some(PathBuf::from("totals.csv")),
            ..PathOverrides::default()
        };
        let mut settings = Settings::default();
        settings.apply(&overrides);
        assert_eq!(settings.data_dir, "/books");
        assert_eq!(settings.summary_file, "totals.csv");
        assert_eq!(settings.source_file, "expenses.csv");
        assert_eq!(
            settings.resolve(&PathOverrides::default()),
            Settings::default().resolve(&overrides)
        );
    }

    #[test]
    fn test_resolve_overrides() {
        let overrides = PathOverrides {
            data_dir: Some(PathBuf::from("/work")),
            input: Some(PathBuf::from("/elsewhere/in.csv")),
            rejected: Some(PathBuf::from("bad.csv")),
            ..PathOverrides::default()
        };
        let paths = Settings::default().resolve(&overrides);
        assert_eq!(paths.source, PathBuf::from("/elsewhere/in.csv"));
        assert_eq!(paths.summary, PathBuf::from("/work/monthly_expenses_summary.csv"));
        assert_eq!(paths.rejected, PathBuf::from("/work/bad.csv"));
    }
}
