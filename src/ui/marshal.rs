// UiMarshaler - routes view mutations onto the UI thread
//
// The wizard runs two kinds of threads: the toolkit's single UI thread and the
// extraction worker reporting progress. Every mutation of view state funnels
// through here so the worker never touches a control directly.
//
// The hand-off is synchronous by contract: a caller already on the UI thread
// executes in place; any other caller enqueues the closure on the UI loop and
// blocks until it has run. That is what makes sequential setter calls from one
// worker observe the view in issue order, with no overlapping partial updates.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::error::MarshalError;
use crate::metrics::metrics;

/// A boxed view mutation executed on the UI thread.
pub type UiJob<V> = Box<dyn FnOnce(&V) + Send>;

/// Posting backend for one UI event loop.
///
/// Production uses the Slint event loop ([`crate::ui::slint_view::SlintLoop`]);
/// tests use [`crate::ui::headless::HeadlessLoop`], which lets the test thread
/// play the role of the UI thread and pump jobs deterministically.
pub trait UiLoop<V>: Send + Sync {
    /// Queue a job for execution on the UI thread. May be called from any
    /// thread; jobs posted from one thread run in posting order.
    fn post(&self, job: UiJob<V>) -> Result<(), MarshalError>;

    /// Execute a job immediately against the live view. Only valid on the UI
    /// thread; other callers get [`MarshalError::NotUiThread`].
    fn run_now(&self, job: UiJob<V>) -> Result<(), MarshalError>;

    /// Whether the current thread is the UI thread this loop belongs to.
    fn is_ui_thread(&self) -> bool;
}

/// Synchronous dispatcher over a [`UiLoop`].
pub struct UiMarshaler<V> {
    ui_loop: Arc<dyn UiLoop<V>>,
}

impl<V> Clone for UiMarshaler<V> {
    fn clone(&self) -> Self {
        Self {
            ui_loop: Arc::clone(&self.ui_loop),
        }
    }
}

impl<V: 'static> UiMarshaler<V> {
    pub fn new(ui_loop: Arc<dyn UiLoop<V>>) -> Self {
        Self { ui_loop }
    }

    pub fn is_ui_thread(&self) -> bool {
        self.ui_loop.is_ui_thread()
    }

    /// Run a view mutation on the UI thread and return once it has executed.
    ///
    /// Calls issued sequentially by one thread execute on the UI thread in the
    /// same order. No ordering is guaranteed across different calling threads;
    /// the last write to a shared field wins.
    pub fn run_sync<F>(&self, f: F) -> Result<(), MarshalError>
    where
        F: FnOnce(&V) + Send + 'static,
    {
        if self.ui_loop.is_ui_thread() {
            metrics().record_inline_update();
            return self.ui_loop.run_now(Box::new(f));
        }

        metrics().record_posted_update();

        // Rendezvous: capacity 1 so the UI thread never blocks on the ack.
        let (done_tx, done_rx) = mpsc::sync_channel::<()>(1);
        self.ui_loop.post(Box::new(move |view| {
            f(view);
            let _ = done_tx.send(());
        }))?;

        // A dropped sender means the loop discarded the job while shutting down.
        done_rx.recv().map_err(|_| MarshalError::LoopClosed)
    }

    /// Read from the live view on the calling thread.
    ///
    /// This does NOT marshal: it is only valid on the UI thread, mirroring the
    /// gateway's getter contract. Off-thread callers get
    /// [`MarshalError::NotUiThread`].
    pub fn read<F, R>(&self, f: F) -> Result<R, MarshalError>
    where
        F: FnOnce(&V) -> R + Send + 'static,
        R: Send + 'static,
    {
        let slot = Arc::new(Mutex::new(None));
        let out = Arc::clone(&slot);
        self.ui_loop.run_now(Box::new(move |view| {
            *out.lock().unwrap() = Some(f(view));
        }))?;

        let value = slot.lock().unwrap().take();
        value.ok_or(MarshalError::LoopClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::headless::HeadlessLoop;
    use crate::ui::view::ExtractView;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn ui_thread_caller_executes_in_place() {
        let ui = HeadlessLoop::new();
        let marshal = UiMarshaler::new(ui.clone_handle());

        // No pump is running; only an in-place execution can complete this.
        marshal.run_sync(|view| view.set_extracted_file("inline.txt")).unwrap();

        assert_eq!(ui.view().snapshot().extracted_file, "inline.txt");
    }

    #[test]
    fn worker_caller_blocks_until_the_job_ran() {
        let ui = HeadlessLoop::new();
        let marshal = UiMarshaler::new(ui.clone_handle());

        let worker = thread::spawn(move || {
            marshal.run_sync(|view| view.set_progress(42)).unwrap();
        });

        while !worker.is_finished() {
            ui.pump_for(Duration::from_millis(10));
        }
        worker.join().unwrap();

        assert_eq!(ui.view().snapshot().progress, 42);
    }

    #[test]
    fn read_off_the_ui_thread_is_rejected() {
        let ui = HeadlessLoop::new();
        let marshal = UiMarshaler::new(ui.clone_handle());

        let worker = thread::spawn(move || marshal.read(|view| view.snapshot().progress));
        let result = worker.join().unwrap();

        assert_eq!(result.unwrap_err(), MarshalError::NotUiThread);
    }

    #[test]
    fn read_on_the_ui_thread_sees_live_state() {
        let ui = HeadlessLoop::new();
        let marshal = UiMarshaler::new(ui.clone_handle());

        marshal.run_sync(|view| view.set_archive_path("/tmp/site.jpa")).unwrap();
        let path = marshal.read(|view| view.snapshot().archive_path).unwrap();

        assert_eq!(path, "/tmp/site.jpa");
    }

    #[test]
    fn posting_to_a_closed_loop_fails() {
        let ui = HeadlessLoop::new();
        let marshal = UiMarshaler::new(ui.clone_handle());
        ui.close();

        let worker = thread::spawn(move || marshal.run_sync(|view| view.set_progress(1)));
        assert_eq!(worker.join().unwrap().unwrap_err(), MarshalError::LoopClosed);
    }
}
