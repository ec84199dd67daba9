// Translation lookup boundary.
//
// The gateway consumes translations through the `TranslationCatalog` trait;
// how the strings got there (resource files, embedded tables) is the
// embedder's business. `StaticCatalog` carries the built-in English strings
// the wizard needs out of the box.

use indexmap::IndexMap;

/// Lookup from translation key to localized string.
///
/// A `None` result means the key is unknown; the gateway logs the miss and
/// leaves the affected caption untouched.
#[cfg_attr(test, mockall::automock)]
pub trait TranslationCatalog: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// In-memory catalog with insertion-ordered keys.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    strings: IndexMap<String, String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.strings.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// The built-in English strings for the wizard window.
    pub fn english() -> Self {
        let mut catalog = Self::new();

        catalog.insert("MAINFORM_GROUP_OPTIONS", "Extraction options");
        catalog.insert("MAINFORM_GROUP_PROGRESS", "Progress");
        catalog.insert("MAINFORM_LBL_BACKUP_ARCHIVE", "Backup archive");
        catalog.insert("MAINFORM_LBL_EXTRACT_TO_FOLDER", "Extract to folder");
        catalog.insert("MAINFORM_LBL_PASSWORD", "Password (JPS only)");
        catalog.insert("MAINFORM_CHK_DRY_RUN", "Dry run");
        catalog.insert("MAINFORM_CHK_IGNORE_ERRORS", "Ignore file write errors");
        catalog.insert("MAINFORM_BTN_BROWSE_ARCHIVE", "Browse...");
        catalog.insert("MAINFORM_BTN_BROWSE_FOLDER", "Browse...");
        catalog.insert("MAINFORM_BTN_HELP", "Help");
        catalog.insert("MAINFORM_BTN_EXTRACT", "Extract");
        catalog.insert("MAINFORM_BTN_CANCEL", "Cancel");

        catalog.insert("MAINFORM_PICK_ARCHIVE_TITLE", "Select a backup archive");
        catalog.insert("MAINFORM_PICK_FOLDER_TITLE", "Select the extraction folder");
        catalog.insert("MAINFORM_FILTER_JPA", "JPA archives");
        catalog.insert("MAINFORM_FILTER_JPS", "JPS encrypted archives");
        catalog.insert("MAINFORM_FILTER_ZIP", "ZIP archives");
        catalog.insert("MAINFORM_FILTER_ALL", "All files");
        catalog.insert("BTN_OK", "OK");
        catalog.insert("BTN_CANCEL", "Cancel");

        catalog.insert("MAINFORM_ERR_TITLE", "Cannot start extraction");
        catalog.insert(
            "MAINFORM_ERR_NO_ARCHIVE",
            "Please select a backup archive to extract.",
        );
        catalog.insert(
            "MAINFORM_ERR_NO_FOLDER",
            "Please select the folder to extract into.",
        );
        catalog.insert("MAINFORM_ENGINE_TITLE", "Extraction engine unavailable");
        catalog.insert(
            "MAINFORM_ENGINE_BODY",
            "This build ships the wizard front-end only; no extraction engine \
             is bundled.",
        );
        catalog.insert("MAINFORM_HELP_TITLE", "Extract Wizard help");
        catalog.insert(
            "MAINFORM_HELP_BODY",
            "Pick a backup archive (.jpa, .jps or .zip), choose where to \
             extract it, then press Extract. A dry run lists the archive \
             contents without writing any file.",
        );

        catalog
    }
}

impl TranslationCatalog for StaticCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}

/// Convenience for callers that want a literal fallback instead of a miss.
pub fn lookup_or(catalog: &dyn TranslationCatalog, key: &str, fallback: &str) -> String {
    catalog.lookup(key).unwrap_or_else(|| fallback.to_string())
}
