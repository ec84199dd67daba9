// Wizard controller - wires Slint callbacks to gateway operations
//
// The controller never touches a control directly: every read and write goes
// through the ViewGateway, exactly as an embedder's controller would. The
// extraction engine stays external; a validated request is handed to the
// embedder-supplied handler.

use std::sync::Arc;

use camino::Utf8PathBuf;
use slint::ComponentHandle;

use crate::i18n::{TranslationCatalog, lookup_or};
use crate::ui::dialogs::{FilePickRequest, FolderPickRequest};
use crate::ui::filters::FilterSpec;
use crate::ui::gateway::ViewGateway;
use crate::ui::slint_view::MainWindow;

/// Everything the extraction engine needs to start a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub archive: Utf8PathBuf,
    pub destination: Utf8PathBuf,
    pub password: String,
    pub dry_run: bool,
    pub ignore_write_errors: bool,
}

/// Callback receiving a validated extraction request.
pub type ExtractHandler = Box<dyn Fn(ExtractionRequest) + 'static>;

/// Wires the wizard window's callbacks to the gateway.
pub struct WizardController {
    window: MainWindow,
}

impl WizardController {
    pub fn new(
        window: MainWindow,
        gateway: Arc<dyn ViewGateway>,
        catalog: Arc<dyn TranslationCatalog>,
        on_extract: ExtractHandler,
    ) -> Self {
        Self::setup_callbacks(&window, &gateway, &catalog, on_extract);
        tracing::info!("wizard controller initialized");
        Self { window }
    }

    /// Run the GUI (blocks until the window is closed).
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        tracing::info!("starting GUI event loop");
        self.window.run()
    }

    fn setup_callbacks(
        window: &MainWindow,
        gateway: &Arc<dyn ViewGateway>,
        catalog: &Arc<dyn TranslationCatalog>,
        on_extract: ExtractHandler,
    ) {
        let gw = Arc::clone(gateway);
        let cat = Arc::clone(catalog);

        window.on_browse_archive(move || {
            tracing::debug!("browse archive clicked");

            let request = FilePickRequest {
                title: lookup_or(&*cat, "MAINFORM_PICK_ARCHIVE_TITLE", "Select a backup archive"),
                default_file: gw.backup_archive_path(),
                filters: archive_filters(&*cat),
                ok_label: lookup_or(&*cat, "BTN_OK", "OK"),
                cancel_label: lookup_or(&*cat, "BTN_CANCEL", "Cancel"),
            };

            match gw.pick_file(&request) {
                Ok(path) if path.is_empty() => tracing::debug!("archive selection cancelled"),
                Ok(path) => {
                    tracing::info!(%path, "archive selected");
                    gw.set_backup_archive_path(&path);
                }
                Err(e) => {
                    tracing::error!(error = %e, "archive picker failed");
                    gw.show_error_message(
                        &lookup_or(&*cat, "MAINFORM_ERR_TITLE", "Cannot start extraction"),
                        &e.to_string(),
                    );
                }
            }
        });

        let gw = Arc::clone(gateway);
        let cat = Arc::clone(catalog);

        window.on_browse_folder(move || {
            tracing::debug!("browse folder clicked");

            let request = FolderPickRequest {
                title: lookup_or(&*cat, "MAINFORM_PICK_FOLDER_TITLE", "Select the extraction folder"),
                default_folder: gw.output_folder_path(),
                ok_label: lookup_or(&*cat, "BTN_OK", "OK"),
                cancel_label: lookup_or(&*cat, "BTN_CANCEL", "Cancel"),
            };

            match gw.pick_folder(&request) {
                Ok(path) if path.is_empty() => tracing::debug!("folder selection cancelled"),
                Ok(path) => {
                    tracing::info!(%path, "extraction folder selected");
                    gw.set_output_folder_path(&path);
                }
                Err(e) => {
                    tracing::error!(error = %e, "folder picker failed");
                    gw.show_error_message(
                        &lookup_or(&*cat, "MAINFORM_ERR_TITLE", "Cannot start extraction"),
                        &e.to_string(),
                    );
                }
            }
        });

        let gw = Arc::clone(gateway);
        let cat = Arc::clone(catalog);

        window.on_help_requested(move || {
            tracing::debug!("help requested");
            gw.show_info_message(
                &lookup_or(&*cat, "MAINFORM_HELP_TITLE", "Extract Wizard help"),
                &lookup_or(&*cat, "MAINFORM_HELP_BODY", "Pick an archive, then press Extract."),
            );
        });

        let gw = Arc::clone(gateway);
        let cat = Arc::clone(catalog);

        window.on_extract_requested(move || {
            tracing::info!("extract button clicked");

            let archive = gw.backup_archive_path();
            let destination = gw.output_folder_path();

            if let Some(key) = validation_error(&archive, &destination) {
                gw.show_error_message(
                    &lookup_or(&*cat, "MAINFORM_ERR_TITLE", "Cannot start extraction"),
                    &lookup_or(&*cat, key, "Required input is missing."),
                );
                return;
            }

            on_extract(ExtractionRequest {
                archive: Utf8PathBuf::from(archive),
                destination: Utf8PathBuf::from(destination),
                password: gw.password(),
                dry_run: gw.dry_run(),
                ignore_write_errors: gw.ignore_file_write_errors(),
            });
        });

        tracing::debug!("UI callbacks configured");
    }
}

/// Archive type filters for the picker, in presentation order. The first
/// entry supplies the default extension.
fn archive_filters(catalog: &dyn TranslationCatalog) -> FilterSpec {
    FilterSpec::new(lookup_or(catalog, "MAINFORM_FILTER_JPA", "JPA archives"), "*.jpa")
        .with(lookup_or(catalog, "MAINFORM_FILTER_JPS", "JPS encrypted archives"), "*.jps")
        .with(lookup_or(catalog, "MAINFORM_FILTER_ZIP", "ZIP archives"), "*.zip")
        .with(lookup_or(catalog, "MAINFORM_FILTER_ALL", "All files"), "*.*")
}

/// Translation key of the first validation failure, if any.
fn validation_error(archive: &str, destination: &str) -> Option<&'static str> {
    if archive.is_empty() {
        return Some("MAINFORM_ERR_NO_ARCHIVE");
    }
    if destination.is_empty() {
        return Some("MAINFORM_ERR_NO_FOLDER");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::StaticCatalog;

    #[test]
    fn archive_filters_default_to_jpa() {
        let filters = archive_filters(&StaticCatalog::english());
        assert_eq!(filters.default_extension(), "jpa");
        assert_eq!(filters.entries().len(), 4);
        assert_eq!(filters.entries()[3].pattern, "*.*");
    }

    #[test]
    fn validation_requires_archive_then_folder() {
        assert_eq!(validation_error("", ""), Some("MAINFORM_ERR_NO_ARCHIVE"));
        assert_eq!(
            validation_error("/backups/site.jpa", ""),
            Some("MAINFORM_ERR_NO_FOLDER")
        );
        assert_eq!(validation_error("/backups/site.jpa", "/srv/www"), None);
    }
}
