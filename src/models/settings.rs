use serde::{Deserialize, Serialize};

/// User preferences persisted between runs.
///
/// Loaded and saved as YAML by [`crate::config::SettingsStore`]. Everything
/// here is cosmetic convenience: absent or invalid settings fall back to the
/// defaults below without failing startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Interface language code, e.g. "en".
    pub language: String,

    /// Archive chosen in the previous session; restored into the archive
    /// field so its folder seeds the picker.
    pub last_archive_path: String,

    /// Directory the folder picker opens in when no output folder is set yet.
    pub last_output_dir: String,

    /// Initial state of the dry run checkbox.
    pub dry_run: bool,

    /// Initial state of the ignore-write-errors checkbox.
    pub ignore_write_errors: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            last_archive_path: String::new(),
            last_output_dir: String::new(),
            dry_run: false,
            ignore_write_errors: false,
        }
    }
}
