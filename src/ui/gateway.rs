// View gateway - the controller's only window into the UI
//
// The controller is only ever given a `dyn ViewGateway`. This abstracts the
// view interaction away from it: a headless double can stand in for the real
// window, and the UI toolkit can change without touching the controller.
//
// See:
// http://martinfowler.com/eaaCatalog/gateway.html
// http://martinfowler.com/eaaDev/PassiveScreen.html

use std::sync::Arc;

use crate::error::{GatewayError, MarshalError};
use crate::i18n::TranslationCatalog;
use crate::metrics::metrics;
use crate::models::{ControlBinding, ControlId};
use crate::ui::capability::PlatformCapabilities;
use crate::ui::dialogs::{DialogAdapter, FilePickRequest, FolderPickRequest};
use crate::ui::marshal::{UiLoop, UiMarshaler};
use crate::ui::taskbar::{TaskbarProgress, TaskbarState};
use crate::ui::view::ExtractView;

/// Toolkit-agnostic operation contract for the wizard window.
///
/// # Threading
///
/// Setters may be called from any thread; they marshal onto the UI thread and
/// return once the mutation has been applied. Getters and dialog operations
/// read or block on the live view and are **UI-thread-only**: calling them
/// from any other thread is a contract violation that logs an error and
/// panics rather than racing the UI.
pub trait ViewGateway: Send + Sync {
    /// Set the title of the UI window.
    fn set_window_title(&self, title: &str);

    /// Translate the captions of the bound controls.
    ///
    /// Each binding's key is resolved through the catalog; misses are logged
    /// as non-fatal [`GatewayError::TranslationMissing`] diagnostics and the
    /// affected caption keeps its prior text. All resolved captions are
    /// applied in one marshaled operation.
    fn apply_translations(&self, catalog: &dyn TranslationCatalog, bindings: &[ControlBinding]);

    fn set_backup_archive_path(&self, path: &str);
    /// UI-thread-only; reads the live field value.
    fn backup_archive_path(&self) -> String;

    fn set_output_folder_path(&self, path: &str);
    /// UI-thread-only; reads the live field value.
    fn output_folder_path(&self) -> String;

    fn set_password(&self, password: &str);
    /// UI-thread-only; reads the live field value.
    fn password(&self) -> String;

    fn set_ignore_file_write_errors(&self, checked: bool);
    /// UI-thread-only; reads the live checkbox value.
    fn ignore_file_write_errors(&self) -> bool;

    fn set_dry_run(&self, checked: bool);
    /// UI-thread-only; reads the live checkbox value.
    fn dry_run(&self) -> bool;

    /// Enable or disable the whole extraction-options input group as one
    /// marshaled operation. Used to lock the UI while an extraction runs.
    fn set_extraction_options_state(&self, enabled: bool);

    /// Resolve a translation key and set the primary action button's caption.
    /// A miss is logged and leaves the caption untouched.
    fn set_extract_button_text(&self, catalog: &dyn TranslationCatalog, key: &str);

    /// Report extraction progress. The value is clamped to `0..=100` before it
    /// is marshaled; out-of-range input never reaches the progress bar.
    fn set_extraction_progress(&self, percent: i32);

    /// Set the "current file" label text.
    fn set_extracted_file_name(&self, name: &str);

    /// Set the host taskbar progress state. A silent no-op on platforms
    /// without taskbar support; collaborator failures are swallowed.
    fn set_taskbar_progress_state(&self, state: TaskbarState);

    /// Set the host taskbar progress value (whole percentage points, 0-100).
    /// A silent no-op on platforms without taskbar support.
    fn set_taskbar_progress_value(&self, percent: i32);

    /// Present a modal error dialog. Blocks until dismissed. UI-thread-only.
    fn show_error_message(&self, title: &str, message: &str);

    /// Present a modal information dialog. Blocks until dismissed.
    /// UI-thread-only.
    fn show_info_message(&self, title: &str, message: &str);

    /// Open the archive picker. Returns the chosen absolute path, or `""` if
    /// the user cancelled. Blocks until the dialog closes. UI-thread-only.
    fn pick_file(&self, request: &FilePickRequest) -> Result<String, GatewayError>;

    /// Open the folder picker. Returns the chosen absolute path, or `""` if
    /// the user cancelled. Blocks until the dialog closes. UI-thread-only.
    fn pick_folder(&self, request: &FolderPickRequest) -> Result<String, GatewayError>;
}

/// The concrete gateway over any [`ExtractView`].
///
/// Aggregates the marshaler, the capability cache, the dialog adapter and the
/// taskbar collaborator. Generic over the view so the same logic fronts the
/// Slint window in production and the headless view in tests.
pub struct MainViewGateway<V> {
    marshal: UiMarshaler<V>,
    dialogs: Arc<dyn DialogAdapter>,
    taskbar: Arc<dyn TaskbarProgress>,
    capabilities: Arc<PlatformCapabilities>,
}

impl<V: ExtractView + 'static> MainViewGateway<V> {
    pub fn new(
        ui_loop: Arc<dyn UiLoop<V>>,
        dialogs: Arc<dyn DialogAdapter>,
        taskbar: Arc<dyn TaskbarProgress>,
        capabilities: Arc<PlatformCapabilities>,
    ) -> Self {
        Self {
            marshal: UiMarshaler::new(ui_loop),
            dialogs,
            taskbar,
            capabilities,
        }
    }

    /// Marshal a mutation; a closed event loop is logged, not propagated.
    fn mutate<F>(&self, what: &str, f: F)
    where
        F: FnOnce(&V) + Send + 'static,
    {
        if let Err(e) = self.marshal.run_sync(f) {
            metrics().record_marshal_failure();
            tracing::warn!(operation = what, error = %e, "view mutation dropped");
        }
    }

    /// Read the live view. Enforces the UI-thread-only getter contract.
    fn read_view<F, R>(&self, what: &str, f: F) -> R
    where
        F: FnOnce(&V) -> R + Send + 'static,
        R: Default + Send + 'static,
    {
        match self.marshal.read(f) {
            Ok(value) => value,
            Err(MarshalError::NotUiThread) => {
                tracing::error!(operation = what, "getter called off the UI thread");
                panic!("{what} must be called from the UI thread");
            }
            Err(e @ MarshalError::LoopClosed) => {
                tracing::warn!(operation = what, error = %e, "view read after shutdown");
                R::default()
            }
        }
    }

    /// Enforce the UI-thread-only contract for modal dialog operations.
    fn assert_ui_thread(&self, what: &str) {
        if !self.marshal.is_ui_thread() {
            tracing::error!(operation = what, "modal dialog requested off the UI thread");
            panic!("{what} must be called from the UI thread");
        }
    }

    fn resolve(
        &self,
        catalog: &dyn TranslationCatalog,
        key: &str,
    ) -> Result<String, GatewayError> {
        catalog.lookup(key).ok_or_else(|| GatewayError::TranslationMissing {
            key: key.to_string(),
        })
    }
}

impl<V: ExtractView + 'static> ViewGateway for MainViewGateway<V> {
    fn set_window_title(&self, title: &str) {
        let title = title.to_string();
        self.mutate("set_window_title", move |view| view.set_window_title(&title));
    }

    fn apply_translations(&self, catalog: &dyn TranslationCatalog, bindings: &[ControlBinding]) {
        // Resolution happens on the calling thread; only the application of
        // the resolved captions is marshaled, as a single operation.
        let mut resolved: Vec<(ControlId, String)> = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match self.resolve(catalog, &binding.key) {
                Ok(text) => resolved.push((binding.control, text)),
                Err(e) => {
                    metrics().record_translation_miss();
                    tracing::warn!(control = binding.control.name(), error = %e, "caption left untranslated");
                }
            }
        }

        if resolved.is_empty() {
            return;
        }
        self.mutate("apply_translations", move |view| {
            for (control, text) in &resolved {
                view.set_control_text(*control, text);
            }
        });
    }

    fn set_backup_archive_path(&self, path: &str) {
        let path = path.to_string();
        self.mutate("set_backup_archive_path", move |view| {
            view.set_archive_path(&path)
        });
    }

    fn backup_archive_path(&self) -> String {
        self.read_view("backup_archive_path", |view| view.archive_path())
    }

    fn set_output_folder_path(&self, path: &str) {
        let path = path.to_string();
        self.mutate("set_output_folder_path", move |view| {
            view.set_output_folder(&path)
        });
    }

    fn output_folder_path(&self) -> String {
        self.read_view("output_folder_path", |view| view.output_folder())
    }

    fn set_password(&self, password: &str) {
        let password = password.to_string();
        self.mutate("set_password", move |view| view.set_password(&password));
    }

    fn password(&self) -> String {
        self.read_view("password", |view| view.password())
    }

    fn set_ignore_file_write_errors(&self, checked: bool) {
        self.mutate("set_ignore_file_write_errors", move |view| {
            view.set_ignore_write_errors(checked)
        });
    }

    fn ignore_file_write_errors(&self) -> bool {
        self.read_view("ignore_file_write_errors", |view| view.ignore_write_errors())
    }

    fn set_dry_run(&self, checked: bool) {
        self.mutate("set_dry_run", move |view| view.set_dry_run(checked));
    }

    fn dry_run(&self) -> bool {
        self.read_view("dry_run", |view| view.dry_run())
    }

    fn set_extraction_options_state(&self, enabled: bool) {
        self.mutate("set_extraction_options_state", move |view| {
            view.set_options_enabled(enabled)
        });
    }

    fn set_extract_button_text(&self, catalog: &dyn TranslationCatalog, key: &str) {
        match self.resolve(catalog, key) {
            Ok(text) => self.mutate("set_extract_button_text", move |view| {
                view.set_control_text(ControlId::ExtractButton, &text)
            }),
            Err(e) => {
                metrics().record_translation_miss();
                tracing::warn!(error = %e, "extract button caption left untranslated");
            }
        }
    }

    fn set_extraction_progress(&self, percent: i32) {
        // Mandatory squash to 0-100; the view never sees the raw input.
        let percent = percent.clamp(0, 100);
        self.mutate("set_extraction_progress", move |view| {
            view.set_progress(percent)
        });
    }

    fn set_extracted_file_name(&self, name: &str) {
        let name = name.to_string();
        self.mutate("set_extracted_file_name", move |view| {
            view.set_extracted_file(&name)
        });
    }

    fn set_taskbar_progress_state(&self, state: TaskbarState) {
        if !self.capabilities.taskbar_supported() {
            metrics().record_taskbar_suppressed();
            return;
        }

        let taskbar = Arc::clone(&self.taskbar);
        self.mutate("set_taskbar_progress_state", move |_view| {
            // Cosmetic feature: failures are swallowed.
            if let Err(e) = taskbar.set_state(state) {
                tracing::debug!(error = %e, "taskbar state update failed");
            }
        });
    }

    fn set_taskbar_progress_value(&self, percent: i32) {
        if !self.capabilities.taskbar_supported() {
            metrics().record_taskbar_suppressed();
            return;
        }

        let taskbar = Arc::clone(&self.taskbar);
        self.mutate("set_taskbar_progress_value", move |_view| {
            if let Err(e) = taskbar.set_value(percent) {
                tracing::debug!(error = %e, "taskbar value update failed");
            }
        });
    }

    fn show_error_message(&self, title: &str, message: &str) {
        self.assert_ui_thread("show_error_message");
        self.dialogs.show_error(title, message);
    }

    fn show_info_message(&self, title: &str, message: &str) {
        self.assert_ui_thread("show_info_message");
        self.dialogs.show_info(title, message);
    }

    fn pick_file(&self, request: &FilePickRequest) -> Result<String, GatewayError> {
        self.assert_ui_thread("pick_file");
        self.dialogs.pick_file(request)
    }

    fn pick_folder(&self, request: &FolderPickRequest) -> Result<String, GatewayError> {
        self.assert_ui_thread("pick_folder");
        self.dialogs.pick_folder(request)
    }
}
