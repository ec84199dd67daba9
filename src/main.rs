//! Extract Wizard - passive-view front-end for extracting backup archives
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! This binary crate provides the Slint frontend for the wizard. It
//! initializes:
//! - Logging infrastructure (file rotation + console output)
//! - User settings ([`SettingsStore`])
//! - The view gateway ([`MainViewGateway`] over the Slint window)
//! - The controller ([`WizardController`] - wires Slint callbacks to the gateway)
//!
//! The application uses a two-sided threading model:
//! - **Main thread**: runs the Slint event loop and owns every control
//! - **Worker threads**: an extraction engine reports progress through the
//!   gateway's marshaled setters; this build ships no engine and hands
//!   validated requests to a stub handler
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/extract-wizard.<date>
//! 2. Load user settings from `ExtractWizard Data/`
//! 3. Build the Slint window and the gateway stack
//!    (capabilities → dialogs → taskbar → marshaler → gateway)
//! 4. Apply translations and restore remembered field values
//! 5. Run the Slint event loop (blocks until the window closes)
//! 6. Persist settings read back through the gateway, log metrics

use std::sync::Arc;

use anyhow::{Context, Result};

use extract_wizard::i18n::lookup_or;
use extract_wizard::metrics::metrics;
use extract_wizard::ui::controller::{ExtractionRequest, WizardController};
use extract_wizard::ui::slint_view::{MainWindow, SlintLoop};
use extract_wizard::ui::taskbar::NullTaskbar;
use extract_wizard::ui::{
    MainViewGateway, NativeDialogs, PlatformCapabilities, TaskbarState, ViewGateway,
};
use extract_wizard::{
    APP_NAME, SettingsStore, StaticCatalog, TranslationCatalog, VERSION, default_bindings,
};

fn main() -> Result<()> {
    // Setup logging with both file and console output
    let _log_guard = extract_wizard::logging::setup_logging("logs", "extract-wizard", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Load user settings
    let settings_store = SettingsStore::new("ExtractWizard Data")?;
    let mut settings = settings_store.load()?;

    // Only the built-in English catalog ships with this build.
    if settings.language != "en" {
        tracing::warn!(
            language = %settings.language,
            "no catalog for configured language, falling back to English"
        );
    }
    let catalog = Arc::new(StaticCatalog::english());

    // Build the Slint window and the gateway stack
    let window = MainWindow::new().context("Failed to create Slint UI")?;
    let ui_loop = SlintLoop::new(&window);

    let gateway: Arc<dyn ViewGateway> = Arc::new(MainViewGateway::new(
        ui_loop.clone_handle(),
        Arc::new(NativeDialogs::new()),
        Arc::new(NullTaskbar),
        Arc::new(PlatformCapabilities::new()),
    ));

    // Initialize the window through the gateway, never directly
    gateway.set_window_title(&format!("Extract Wizard {VERSION}"));
    gateway.apply_translations(&*catalog, &default_bindings());
    gateway.set_extract_button_text(&*catalog, "MAINFORM_BTN_EXTRACT");
    gateway.set_taskbar_progress_state(TaskbarState::NoProgress);

    // Restore remembered inputs
    gateway.set_backup_archive_path(&settings.last_archive_path);
    gateway.set_output_folder_path(&settings.last_output_dir);
    gateway.set_dry_run(settings.dry_run);
    gateway.set_ignore_file_write_errors(settings.ignore_write_errors);

    // The extraction engine is an external collaborator; this build only
    // validates requests and tells the user so.
    // TODO: route the request to the unarchiver backend once its port lands.
    let handler_gateway = Arc::clone(&gateway);
    let handler_catalog = Arc::clone(&catalog);
    let on_extract = Box::new(move |request: ExtractionRequest| {
        tracing::info!(
            archive = %request.archive,
            destination = %request.destination,
            dry_run = request.dry_run,
            ignore_write_errors = request.ignore_write_errors,
            "extraction requested"
        );
        handler_gateway.show_info_message(
            &lookup_or(&*handler_catalog, "MAINFORM_ENGINE_TITLE", "Extraction engine unavailable"),
            &lookup_or(
                &*handler_catalog,
                "MAINFORM_ENGINE_BODY",
                "No extraction engine is bundled with this build.",
            ),
        );
    });

    let controller = WizardController::new(
        window,
        Arc::clone(&gateway),
        Arc::clone(&catalog) as Arc<dyn TranslationCatalog>,
        on_extract,
    );

    tracing::info!("wizard window initialized, launching");

    // Run the GUI (blocks until the window is closed)
    let result = controller.run();

    tracing::info!("GUI closed, shutting down");

    // Persist what the user left in the window; getters are legal here, the
    // main thread is the UI thread.
    settings.last_archive_path = gateway.backup_archive_path();
    settings.last_output_dir = gateway.output_folder_path();
    settings.dry_run = gateway.dry_run();
    settings.ignore_write_errors = gateway.ignore_file_write_errors();

    if let Err(e) = settings_store.save(&settings) {
        tracing::warn!(error = %e, "failed to persist settings");
    }

    metrics().log_summary();
    tracing::info!("Application shutdown complete");

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
