// Control identifiers for the wizard window.
//
// The gateway addresses controls through these identifiers instead of toolkit
// handles, so a translation pass or an enable/disable sweep is expressed the
// same way against the real window and against the headless test double.

/// Identifies a single control of the wizard window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    OptionsGroup,
    ProgressGroup,
    ArchiveLabel,
    FolderLabel,
    PasswordLabel,
    ArchiveField,
    FolderField,
    PasswordField,
    DryRunCheck,
    IgnoreErrorsCheck,
    BrowseArchiveButton,
    BrowseFolderButton,
    HelpButton,
    ExtractButton,
    ExtractedFileLabel,
}

impl ControlId {
    /// Short stable name used in logs and the headless journal.
    pub fn name(self) -> &'static str {
        match self {
            ControlId::OptionsGroup => "options_group",
            ControlId::ProgressGroup => "progress_group",
            ControlId::ArchiveLabel => "archive_label",
            ControlId::FolderLabel => "folder_label",
            ControlId::PasswordLabel => "password_label",
            ControlId::ArchiveField => "archive_field",
            ControlId::FolderField => "folder_field",
            ControlId::PasswordField => "password_field",
            ControlId::DryRunCheck => "dry_run_check",
            ControlId::IgnoreErrorsCheck => "ignore_errors_check",
            ControlId::BrowseArchiveButton => "browse_archive_button",
            ControlId::BrowseFolderButton => "browse_folder_button",
            ControlId::HelpButton => "help_button",
            ControlId::ExtractButton => "extract_button",
            ControlId::ExtractedFileLabel => "extracted_file_label",
        }
    }
}

/// The user-interactive input group that is locked while an extraction runs.
///
/// The extract button is deliberately absent: it stays live so it can act as
/// the cancel action during a run.
pub const OPTION_CONTROLS: &[ControlId] = &[
    ControlId::ArchiveLabel,
    ControlId::FolderLabel,
    ControlId::PasswordLabel,
    ControlId::ArchiveField,
    ControlId::FolderField,
    ControlId::PasswordField,
    ControlId::DryRunCheck,
    ControlId::IgnoreErrorsCheck,
    ControlId::BrowseArchiveButton,
    ControlId::BrowseFolderButton,
    ControlId::HelpButton,
];

/// Pairs a control with the translation key that supplies its caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlBinding {
    pub control: ControlId,
    pub key: String,
}

impl ControlBinding {
    pub fn new(control: ControlId, key: impl Into<String>) -> Self {
        Self {
            control,
            key: key.into(),
        }
    }
}

/// The standard caption bindings for the wizard window.
///
/// Window title and extract button are excluded: the title is set directly and
/// the extract caption changes over the extraction lifecycle through
/// `set_extract_button_text`.
pub fn default_bindings() -> Vec<ControlBinding> {
    vec![
        ControlBinding::new(ControlId::OptionsGroup, "MAINFORM_GROUP_OPTIONS"),
        ControlBinding::new(ControlId::ProgressGroup, "MAINFORM_GROUP_PROGRESS"),
        ControlBinding::new(ControlId::ArchiveLabel, "MAINFORM_LBL_BACKUP_ARCHIVE"),
        ControlBinding::new(ControlId::FolderLabel, "MAINFORM_LBL_EXTRACT_TO_FOLDER"),
        ControlBinding::new(ControlId::PasswordLabel, "MAINFORM_LBL_PASSWORD"),
        ControlBinding::new(ControlId::DryRunCheck, "MAINFORM_CHK_DRY_RUN"),
        ControlBinding::new(ControlId::IgnoreErrorsCheck, "MAINFORM_CHK_IGNORE_ERRORS"),
        ControlBinding::new(ControlId::BrowseArchiveButton, "MAINFORM_BTN_BROWSE_ARCHIVE"),
        ControlBinding::new(ControlId::BrowseFolderButton, "MAINFORM_BTN_BROWSE_FOLDER"),
        ControlBinding::new(ControlId::HelpButton, "MAINFORM_BTN_HELP"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_group_excludes_extract_button() {
        assert!(!OPTION_CONTROLS.contains(&ControlId::ExtractButton));
    }

    #[test]
    fn default_bindings_cover_unique_controls() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for binding in &bindings {
            assert!(seen.insert(binding.control), "duplicate binding for {:?}", binding.control);
        }
        assert!(!bindings.iter().any(|b| b.control == ControlId::ExtractButton));
    }
}
