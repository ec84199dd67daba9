//! Host taskbar progress boundary.
//!
//! Taskbar progress is cosmetic: the gateway consults the capability probe
//! before calling, and any failure from the collaborator is swallowed with a
//! diagnostic. The OS-level implementation (ITaskbarList3 on Windows) lives
//! with the host shell, behind this trait.

use crate::error::GatewayError;

/// Taskbar progress display state, mirroring the extraction lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarState {
    /// No progress shown.
    NoProgress,
    /// Activity without a known percentage.
    Indeterminate,
    /// Normal progress display.
    Normal,
    /// Progress halted by an error.
    Error,
    /// Progress paused.
    Paused,
}

/// Host taskbar integration collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait TaskbarProgress: Send + Sync {
    fn set_state(&self, state: TaskbarState) -> Result<(), GatewayError>;
    fn set_value(&self, percent: i32) -> Result<(), GatewayError>;
}

/// Default collaborator for hosts without a taskbar integration: logs at
/// trace level and succeeds.
#[derive(Debug, Default)]
pub struct NullTaskbar;

impl TaskbarProgress for NullTaskbar {
    fn set_state(&self, state: TaskbarState) -> Result<(), GatewayError> {
        tracing::trace!(?state, "taskbar state (null backend)");
        Ok(())
    }

    fn set_value(&self, percent: i32) -> Result<(), GatewayError> {
        tracing::trace!(percent, "taskbar value (null backend)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_taskbar_always_succeeds() {
        let taskbar = NullTaskbar;
        assert!(taskbar.set_state(TaskbarState::Normal).is_ok());
        assert!(taskbar.set_value(50).is_ok());
    }
}
