// Performance metrics module
//
// Lightweight counters for the gateway's marshal traffic and dialog outcomes.
// Uses atomic operations for thread-safe tracking without locks; the summary
// is logged once on shutdown.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub struct Metrics {
    /// Marshaled operations executed in place on the UI thread
    pub ui_updates_inline: AtomicU64,

    /// Marshaled operations posted from a worker thread
    pub ui_updates_posted: AtomicU64,

    /// Marshal attempts that failed because the event loop had stopped
    pub marshal_failures: AtomicU64,

    /// Translation keys that could not be resolved
    pub translation_misses: AtomicU64,

    /// Modal dialogs presented
    pub dialogs_shown: AtomicU64,

    /// Picker dialogs the user cancelled
    pub dialogs_cancelled: AtomicU64,

    /// Taskbar calls suppressed because the platform lacks support
    pub taskbar_suppressed: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ui_updates_inline: AtomicU64::new(0),
            ui_updates_posted: AtomicU64::new(0),
            marshal_failures: AtomicU64::new(0),
            translation_misses: AtomicU64::new(0),
            dialogs_shown: AtomicU64::new(0),
            dialogs_cancelled: AtomicU64::new(0),
            taskbar_suppressed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_inline_update(&self) {
        self.ui_updates_inline.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_posted_update(&self) {
        self.ui_updates_posted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_marshal_failure(&self) {
        self.marshal_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_miss(&self) {
        self.translation_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dialog_shown(&self) {
        self.dialogs_shown.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dialog_cancelled(&self) {
        self.dialogs_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_taskbar_suppressed(&self) {
        self.taskbar_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Log a one-line summary of everything counted so far.
    pub fn log_summary(&self) {
        tracing::info!(
            uptime_secs = self.start_time.elapsed().as_secs(),
            ui_updates_inline = self.ui_updates_inline.load(Ordering::Relaxed),
            ui_updates_posted = self.ui_updates_posted.load(Ordering::Relaxed),
            marshal_failures = self.marshal_failures.load(Ordering::Relaxed),
            translation_misses = self.translation_misses.load(Ordering::Relaxed),
            dialogs_shown = self.dialogs_shown.load(Ordering::Relaxed),
            dialogs_cancelled = self.dialogs_cancelled.load(Ordering::Relaxed),
            taskbar_suppressed = self.taskbar_suppressed.load(Ordering::Relaxed),
            "gateway metrics"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide metrics instance.
pub fn metrics() -> &'static Metrics {
    static METRICS: OnceLock<Metrics> = OnceLock::new();
    METRICS.get_or_init(Metrics::new)
}
