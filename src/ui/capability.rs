//! Platform capability detection for taskbar progress.
//!
//! The host taskbar progress API exists only on Windows. The probe runs once
//! per process and the result is cached for the process lifetime; the host OS
//! identity cannot change within a run, so there is no invalidation path.

use std::sync::Mutex;

/// Cached probe result for "host taskbar progress available".
///
/// `Unknown` only exists before the first probe; callers never observe it
/// through [`PlatformCapabilities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarSupport {
    Unknown,
    Supported,
    Unsupported,
}

type ProbeFn = dyn Fn() -> TaskbarSupport + Send + Sync;

/// One-shot capability cache.
pub struct PlatformCapabilities {
    taskbar: Mutex<TaskbarSupport>,
    probe: Box<ProbeFn>,
}

impl std::fmt::Debug for PlatformCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformCapabilities")
            .field("taskbar", &*self.taskbar.lock().unwrap())
            .finish()
    }
}

impl PlatformCapabilities {
    pub fn new() -> Self {
        Self::with_probe(detect_taskbar_support)
    }

    /// Build with a custom probe. Test seam; production uses [`Self::new`].
    pub fn with_probe<F>(probe: F) -> Self
    where
        F: Fn() -> TaskbarSupport + Send + Sync + 'static,
    {
        Self {
            taskbar: Mutex::new(TaskbarSupport::Unknown),
            probe: Box::new(probe),
        }
    }

    /// Resolved taskbar support. The probe runs on the first call; every
    /// subsequent call returns the cached value.
    pub fn taskbar(&self) -> TaskbarSupport {
        let mut cached = self.taskbar.lock().unwrap();
        if *cached == TaskbarSupport::Unknown {
            let probed = (self.probe)();
            *cached = if probed == TaskbarSupport::Unknown {
                tracing::warn!("taskbar probe returned Unknown, treating as unsupported");
                TaskbarSupport::Unsupported
            } else {
                probed
            };
            tracing::debug!(support = ?*cached, "taskbar capability resolved");
        }
        *cached
    }

    pub fn taskbar_supported(&self) -> bool {
        self.taskbar() == TaskbarSupport::Supported
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe the host OS identity for taskbar progress support.
pub fn detect_taskbar_support() -> TaskbarSupport {
    if std::env::consts::OS == "windows" {
        TaskbarSupport::Supported
    } else {
        TaskbarSupport::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn probe_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let caps = PlatformCapabilities::with_probe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TaskbarSupport::Supported
        });

        assert!(caps.taskbar_supported());
        assert!(caps.taskbar_supported());
        assert!(caps.taskbar_supported());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolved_value_is_stable() {
        let caps = PlatformCapabilities::with_probe(|| TaskbarSupport::Unsupported);
        let first = caps.taskbar();
        for _ in 0..10 {
            assert_eq!(caps.taskbar(), first);
        }
    }

    #[test]
    fn unknown_probe_result_degrades_to_unsupported() {
        let caps = PlatformCapabilities::with_probe(|| TaskbarSupport::Unknown);
        assert_eq!(caps.taskbar(), TaskbarSupport::Unsupported);
    }

    #[test]
    fn default_probe_matches_host_os() {
        let expected = cfg!(target_os = "windows");
        assert_eq!(detect_taskbar_support() == TaskbarSupport::Supported, expected);
    }
}
