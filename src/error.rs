use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the view gateway and its collaborators.
///
/// Expected conditions never take this shape: a cancelled dialog is the
/// empty-string sentinel, an unsupported taskbar is a silent no-op, and an
/// out-of-range progress value is clamped. Only translation misses (non-fatal,
/// logged) and genuine dialog subsystem faults appear here.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The translation catalog has no entry for a requested key. Non-fatal:
    /// the affected caption keeps its prior text.
    #[error("no translation for key `{key}`")]
    TranslationMissing { key: String },

    /// The native dialog returned a path that is not valid UTF-8.
    #[error("selected path is not valid UTF-8: {path:?}")]
    NonUtf8Path { path: PathBuf },

    /// The OS dialog subsystem itself failed.
    #[error("native dialog failure: {0}")]
    Dialog(String),

    #[error(transparent)]
    Marshal(#[from] MarshalError),
}

/// Failures of the UI-thread hand-off.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MarshalError {
    /// The UI event loop has stopped; queued work can no longer run.
    #[error("UI event loop is no longer running")]
    LoopClosed,

    /// The operation is only valid on the UI thread.
    #[error("operation requires the UI thread")]
    NotUiThread,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_miss_names_the_key() {
        let err = GatewayError::TranslationMissing {
            key: "MAINFORM_BTN_HELP".to_string(),
        };
        assert!(err.to_string().contains("MAINFORM_BTN_HELP"));
    }

    #[test]
    fn marshal_error_converts() {
        let err: GatewayError = MarshalError::LoopClosed.into();
        assert!(matches!(err, GatewayError::Marshal(MarshalError::LoopClosed)));
    }
}
