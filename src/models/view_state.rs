use indexmap::IndexMap;

use crate::models::control::{ControlId, OPTION_CONTROLS};

/// Single source of truth for everything the wizard window displays.
///
/// The state is owned by the view implementation the gateway fronts (the
/// headless double holds one directly; the Slint window projects the same
/// fields onto its properties). Nothing outside the gateway's marshaled
/// operations mutates it.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub window_title: String,

    // Field values
    pub archive_path: String,
    pub output_folder: String,
    pub password: String,

    // Option flags
    pub dry_run: bool,
    pub ignore_write_errors: bool,

    // Per-control captions and enabled flags, in declaration order
    pub captions: IndexMap<ControlId, String>,
    pub enabled: IndexMap<ControlId, bool>,

    /// Extraction progress percent. Invariant: always within `0..=100`;
    /// the gateway clamps before any value reaches this field.
    pub progress: i32,
    pub extracted_file: String,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut enabled = IndexMap::new();
        for control in OPTION_CONTROLS {
            enabled.insert(*control, true);
        }
        enabled.insert(ControlId::ExtractButton, true);

        Self {
            window_title: String::new(),
            archive_path: String::new(),
            output_folder: String::new(),
            password: String::new(),
            dry_run: false,
            ignore_write_errors: false,
            captions: IndexMap::new(),
            enabled,
            progress: 0,
            extracted_file: String::new(),
        }
    }
}

impl ViewState {
    /// Enabled flag for one control, defaulting to enabled for controls that
    /// were never toggled.
    pub fn is_enabled(&self, control: ControlId) -> bool {
        self.enabled.get(&control).copied().unwrap_or(true)
    }

    /// Caption for one control, empty until set.
    pub fn caption(&self, control: ControlId) -> &str {
        self.captions.get(&control).map(String::as_str).unwrap_or("")
    }
}
