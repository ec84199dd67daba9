use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

use crate::models::UserSettings;

/// Loads and saves the user settings YAML file.
///
/// Settings live in a single file inside the data directory (e.g.
/// `ExtractWizard Data/ExtractWizard Settings.yaml`). A missing file is not an
/// error: defaults are returned and a warning is logged.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl SettingsStore {
    /// Create a new SettingsStore rooted at the given data directory.
    ///
    /// The directory is created if it does not exist yet.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join("ExtractWizard Settings.yaml"),
            config_dir,
        })
    }

    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }

    /// Load the user settings, falling back to defaults when the file is
    /// absent.
    pub fn load(&self) -> Result<UserSettings> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(UserSettings::default());
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: UserSettings = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!(
            "Loaded settings: language={}, last_archive_path={}, last_output_dir={}",
            settings.language,
            settings.last_archive_path,
            settings.last_output_dir
        );

        Ok(settings)
    }

    /// Persist the user settings.
    pub fn save(&self, settings: &UserSettings) -> Result<()> {
        let yaml = serde_yaml_ng::to_string(settings).context("Failed to serialize settings")?;

        fs::write(&self.settings_path, yaml)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::debug!("Settings saved to {}", self.settings_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        SettingsStore::new(path.join("ExtractWizard Data")).unwrap()
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let settings = store.load().unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut settings = UserSettings::default();
        settings.language = "de".to_string();
        settings.last_archive_path = "/backups/site.jpa".to_string();
        settings.dry_run = true;

        store.save(&settings).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn creates_config_directory() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.config_dir().exists());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.settings_path(), "language: [not: a: string").unwrap();

        assert!(store.load().is_err());
    }
}
