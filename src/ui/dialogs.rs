// Native dialog boundary.
//
// The gateway never talks to a dialog toolkit directly; it hands a request to
// a `DialogAdapter` and gets back either an absolute path or the empty-string
// sentinel for cancellation. Cancellation is not an error. The production
// adapter uses the `rfd` crate; tests script their own adapter.

use camino::Utf8PathBuf;
use std::path::Path;

use crate::error::GatewayError;
use crate::metrics::metrics;
use crate::ui::filters::FilterSpec;

/// Parameters for an open-file dialog.
#[derive(Clone, Debug)]
pub struct FilePickRequest {
    pub title: String,
    /// Pre-selected file. When non-empty, its containing directory becomes the
    /// initial directory.
    pub default_file: String,
    pub filters: FilterSpec,
    /// Confirm button caption, honored where the host toolkit supports it.
    pub ok_label: String,
    /// Cancel button caption, honored where the host toolkit supports it.
    pub cancel_label: String,
}

/// Parameters for a folder-browse dialog.
#[derive(Clone, Debug)]
pub struct FolderPickRequest {
    pub title: String,
    /// Pre-selected folder; empty means the user documents location.
    pub default_folder: String,
    pub ok_label: String,
    pub cancel_label: String,
}

/// Wraps the host's modal interactions behind toolkit-agnostic calls.
///
/// All methods block the calling thread until the user responds; they must be
/// invoked from the UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait DialogAdapter: Send + Sync {
    /// Returns the chosen absolute path, or `""` if the user cancelled.
    fn pick_file(&self, request: &FilePickRequest) -> Result<String, GatewayError>;

    /// Returns the chosen absolute path, or `""` if the user cancelled.
    fn pick_folder(&self, request: &FolderPickRequest) -> Result<String, GatewayError>;

    fn show_error(&self, title: &str, message: &str);

    fn show_info(&self, title: &str, message: &str);
}

/// Initial directory for a file picker: the default file's parent when one is
/// supplied, otherwise the user documents location.
fn initial_directory(default_file: &str) -> Option<Utf8PathBuf> {
    if !default_file.is_empty() {
        let path = Utf8PathBuf::from(default_file);
        match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => {
                return Some(parent.to_path_buf());
            }
            _ => {}
        }
    }
    dirs::document_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
}

fn file_name_of(default_file: &str) -> Option<String> {
    Utf8PathBuf::from(default_file)
        .file_name()
        .map(str::to_string)
}

fn utf8_path(path: std::path::PathBuf) -> Result<String, GatewayError> {
    Utf8PathBuf::from_path_buf(path)
        .map(Utf8PathBuf::into_string)
        .map_err(|path| GatewayError::NonUtf8Path { path })
}

/// `rfd`-backed adapter for the host's native dialogs.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    pub fn new() -> Self {
        Self
    }
}

impl DialogAdapter for NativeDialogs {
    fn pick_file(&self, request: &FilePickRequest) -> Result<String, GatewayError> {
        metrics().record_dialog_shown();
        tracing::debug!(
            title = %request.title,
            filter = %request.filters.serialize(),
            default_ext = %request.filters.default_extension(),
            "opening file picker"
        );

        let mut dialog = rfd::FileDialog::new().set_title(&request.title);

        if let Some(dir) = initial_directory(&request.default_file) {
            dialog = dialog.set_directory(dir.as_std_path());
        }
        if let Some(name) = file_name_of(&request.default_file) {
            dialog = dialog.set_file_name(name);
        }
        for entry in request.filters.entries() {
            dialog = dialog.add_filter(&entry.label, &FilterSpec::extensions(entry));
        }

        match dialog.pick_file() {
            Some(path) => utf8_path(path),
            None => {
                metrics().record_dialog_cancelled();
                tracing::debug!("file picker cancelled");
                Ok(String::new())
            }
        }
    }

    fn pick_folder(&self, request: &FolderPickRequest) -> Result<String, GatewayError> {
        metrics().record_dialog_shown();
        tracing::debug!(title = %request.title, "opening folder picker");

        let mut dialog = rfd::FileDialog::new().set_title(&request.title);

        if !request.default_folder.is_empty() {
            dialog = dialog.set_directory(Path::new(&request.default_folder));
        } else if let Some(docs) = dirs::document_dir() {
            dialog = dialog.set_directory(&docs);
        }

        match dialog.pick_folder() {
            Some(path) => utf8_path(path),
            None => {
                metrics().record_dialog_cancelled();
                tracing::debug!("folder picker cancelled");
                Ok(String::new())
            }
        }
    }

    fn show_error(&self, title: &str, message: &str) {
        metrics().record_dialog_shown();
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn show_info(&self, title: &str, message: &str) {
        metrics().record_dialog_shown();
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
