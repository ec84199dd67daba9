// Slint bindings for the wizard window.
//
// `MainWindow` is generated from ui/main_window.slint; this module projects
// the ExtractView surface onto its properties and adapts the Slint event loop
// as the marshaler's posting backend.

use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};

use slint::ComponentHandle;

use crate::error::MarshalError;
use crate::models::ControlId;
use crate::ui::marshal::{UiJob, UiLoop};
use crate::ui::view::ExtractView;

// Include the generated Slint code
slint::include_modules!();

impl ExtractView for MainWindow {
    fn set_window_title(&self, title: &str) {
        self.set_window_title(slint::SharedString::from(title));
    }

    fn set_control_text(&self, control: ControlId, text: &str) {
        let text = slint::SharedString::from(text);
        match control {
            ControlId::OptionsGroup => self.set_options_group_text(text),
            ControlId::ProgressGroup => self.set_progress_group_text(text),
            ControlId::ArchiveLabel => self.set_archive_label_text(text),
            ControlId::FolderLabel => self.set_folder_label_text(text),
            ControlId::PasswordLabel => self.set_password_label_text(text),
            ControlId::DryRunCheck => self.set_dry_run_text(text),
            ControlId::IgnoreErrorsCheck => self.set_ignore_errors_text(text),
            ControlId::BrowseArchiveButton => self.set_browse_archive_text(text),
            ControlId::BrowseFolderButton => self.set_browse_folder_text(text),
            ControlId::HelpButton => self.set_help_text(text),
            ControlId::ExtractButton => self.set_extract_text(text),
            // Fields and the live file label carry values, not captions.
            ControlId::ArchiveField
            | ControlId::FolderField
            | ControlId::PasswordField
            | ControlId::ExtractedFileLabel => {
                tracing::trace!(control = control.name(), "control has no caption, ignoring");
            }
        }
    }

    fn set_archive_path(&self, path: &str) {
        self.set_archive_path(slint::SharedString::from(path));
    }

    fn archive_path(&self) -> String {
        self.get_archive_path().to_string()
    }

    fn set_output_folder(&self, path: &str) {
        self.set_output_folder(slint::SharedString::from(path));
    }

    fn output_folder(&self) -> String {
        self.get_output_folder().to_string()
    }

    fn set_password(&self, value: &str) {
        self.set_password(slint::SharedString::from(value));
    }

    fn password(&self) -> String {
        self.get_password().to_string()
    }

    fn set_dry_run(&self, checked: bool) {
        self.set_dry_run(checked);
    }

    fn dry_run(&self) -> bool {
        self.get_dry_run()
    }

    fn set_ignore_write_errors(&self, checked: bool) {
        self.set_ignore_write_errors(checked);
    }

    fn ignore_write_errors(&self) -> bool {
        self.get_ignore_write_errors()
    }

    fn set_options_enabled(&self, enabled: bool) {
        self.set_options_enabled(enabled);
    }

    fn set_progress(&self, percent: i32) {
        self.set_progress(percent);
    }

    fn set_extracted_file(&self, name: &str) {
        self.set_extracted_file(slint::SharedString::from(name));
    }
}

/// Posting backend over the Slint event loop.
///
/// Created on the UI thread; worker posts go through
/// `Weak::upgrade_in_event_loop`, which queues the closure onto the event
/// loop. Direct execution upgrades the weak handle, which only succeeds on
/// the UI thread.
pub struct SlintLoop {
    // slint::Weak is Send but not Sync; the mutex makes sharing sound.
    weak: Mutex<slint::Weak<MainWindow>>,
    ui_thread: ThreadId,
}

impl SlintLoop {
    /// Must be called on the thread that created the window (the UI thread).
    pub fn new(window: &MainWindow) -> Arc<Self> {
        Arc::new(Self {
            weak: Mutex::new(window.as_weak()),
            ui_thread: thread::current().id(),
        })
    }

    pub fn clone_handle(self: &Arc<Self>) -> Arc<dyn UiLoop<MainWindow>> {
        Arc::clone(self) as Arc<dyn UiLoop<MainWindow>>
    }

    fn weak(&self) -> slint::Weak<MainWindow> {
        self.weak.lock().unwrap().clone()
    }
}

impl UiLoop<MainWindow> for SlintLoop {
    fn post(&self, job: UiJob<MainWindow>) -> Result<(), MarshalError> {
        self.weak()
            .upgrade_in_event_loop(move |window| job(&window))
            .map_err(|e| {
                tracing::warn!("failed to queue UI update to event loop: {e:?}");
                MarshalError::LoopClosed
            })
    }

    fn run_now(&self, job: UiJob<MainWindow>) -> Result<(), MarshalError> {
        if !self.is_ui_thread() {
            return Err(MarshalError::NotUiThread);
        }
        match self.weak().upgrade() {
            Some(window) => {
                job(&window);
                Ok(())
            }
            None => Err(MarshalError::LoopClosed),
        }
    }

    fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.ui_thread
    }
}
