// Headless view and event loop.
//
// The non-UI stand-in for the wizard window: `HeadlessView` owns a ViewState
// and journals every mutation; `HeadlessLoop` lets the calling thread play the
// UI thread and pump posted jobs deterministically. Integration tests drive
// the real gateway against these exactly as the binary drives it against the
// Slint window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use crate::error::MarshalError;
use crate::models::{ControlId, OPTION_CONTROLS, ViewState};
use crate::ui::marshal::{UiJob, UiLoop};
use crate::ui::view::ExtractView;

/// In-memory wizard window.
///
/// State is only ever touched from the loop's UI thread, so a plain mutex with
/// uncontended locking is all the synchronization needed.
#[derive(Debug, Default)]
pub struct HeadlessView {
    state: Mutex<ViewState>,
    journal: Mutex<Vec<String>>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }

    /// Ordered record of every mutation applied so far.
    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

impl ExtractView for HeadlessView {
    fn set_window_title(&self, title: &str) {
        self.record(format!("title={title}"));
        self.state.lock().unwrap().window_title = title.to_string();
    }

    fn set_control_text(&self, control: ControlId, text: &str) {
        self.record(format!("text:{}={text}", control.name()));
        self.state
            .lock()
            .unwrap()
            .captions
            .insert(control, text.to_string());
    }

    fn set_archive_path(&self, path: &str) {
        self.record(format!("archive={path}"));
        self.state.lock().unwrap().archive_path = path.to_string();
    }

    fn archive_path(&self) -> String {
        self.state.lock().unwrap().archive_path.clone()
    }

    fn set_output_folder(&self, path: &str) {
        self.record(format!("folder={path}"));
        self.state.lock().unwrap().output_folder = path.to_string();
    }

    fn output_folder(&self) -> String {
        self.state.lock().unwrap().output_folder.clone()
    }

    fn set_password(&self, value: &str) {
        self.record("password=***".to_string());
        self.state.lock().unwrap().password = value.to_string();
    }

    fn password(&self) -> String {
        self.state.lock().unwrap().password.clone()
    }

    fn set_dry_run(&self, checked: bool) {
        self.record(format!("dry_run={checked}"));
        self.state.lock().unwrap().dry_run = checked;
    }

    fn dry_run(&self) -> bool {
        self.state.lock().unwrap().dry_run
    }

    fn set_ignore_write_errors(&self, checked: bool) {
        self.record(format!("ignore_errors={checked}"));
        self.state.lock().unwrap().ignore_write_errors = checked;
    }

    fn ignore_write_errors(&self) -> bool {
        self.state.lock().unwrap().ignore_write_errors
    }

    fn set_options_enabled(&self, enabled: bool) {
        self.record(format!("options_enabled={enabled}"));
        let mut state = self.state.lock().unwrap();
        for control in OPTION_CONTROLS {
            state.enabled.insert(*control, enabled);
        }
    }

    fn set_progress(&self, percent: i32) {
        self.record(format!("progress={percent}"));
        self.state.lock().unwrap().progress = percent;
    }

    fn set_extracted_file(&self, name: &str) {
        self.record(format!("file={name}"));
        self.state.lock().unwrap().extracted_file = name.to_string();
    }
}

/// Simulated UI event loop owned by the thread that created it.
///
/// Worker threads post jobs; the creating thread pumps them. `run_now` refuses
/// any other thread, which is what lets tests observe getter contract
/// violations instead of silently passing them.
pub struct HeadlessLoop {
    view: HeadlessView,
    tx: Sender<UiJob<HeadlessView>>,
    rx: Mutex<Receiver<UiJob<HeadlessView>>>,
    ui_thread: ThreadId,
    closed: AtomicBool,
}

impl HeadlessLoop {
    /// Create a loop whose UI thread is the current thread.
    pub fn new() -> Arc<Self> {
        let (tx, rx) = channel();
        Arc::new(Self {
            view: HeadlessView::new(),
            tx,
            rx: Mutex::new(rx),
            ui_thread: thread::current().id(),
            closed: AtomicBool::new(false),
        })
    }

    /// Type-erased handle for building a marshaler.
    pub fn clone_handle(self: &Arc<Self>) -> Arc<dyn UiLoop<HeadlessView>> {
        Arc::clone(self) as Arc<dyn UiLoop<HeadlessView>>
    }

    /// Direct access to the view. UI thread only.
    ///
    /// # Panics
    /// If called from any other thread.
    pub fn view(&self) -> &HeadlessView {
        assert!(
            thread::current().id() == self.ui_thread,
            "HeadlessLoop::view is UI-thread-only"
        );
        &self.view
    }

    /// Run queued jobs without blocking. Returns how many ran.
    pub fn pump(&self) -> usize {
        assert!(
            thread::current().id() == self.ui_thread,
            "HeadlessLoop::pump is UI-thread-only"
        );
        let mut ran = 0;
        loop {
            // Take the job out before running it so the channel lock is never
            // held across view mutations.
            let job = self.rx.lock().unwrap().try_recv();
            match job {
                Ok(job) => {
                    job(&self.view);
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        ran
    }

    /// Wait up to `timeout` for one job, then drain whatever else is queued.
    /// Returns how many jobs ran.
    pub fn pump_for(&self, timeout: Duration) -> usize {
        assert!(
            thread::current().id() == self.ui_thread,
            "HeadlessLoop::pump_for is UI-thread-only"
        );
        let first = {
            let rx = self.rx.lock().unwrap();
            match rx.recv_timeout(timeout) {
                Ok(job) => Some(job),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
            }
        };
        match first {
            Some(job) => {
                job(&self.view);
                1 + self.pump()
            }
            None => 0,
        }
    }

    /// Keep pumping until `done` reports true. Test convenience for joining a
    /// worker that issues synchronous setter calls.
    pub fn pump_until<F: Fn() -> bool>(&self, done: F) {
        while !done() {
            self.pump_for(Duration::from_millis(5));
        }
        // Drain anything the worker posted right before finishing.
        self.pump();
    }

    /// Simulate event loop shutdown: subsequently posted jobs are rejected and
    /// pending jobs are discarded.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        // Drop pending jobs so blocked posters observe the closed loop.
        while self.rx.lock().unwrap().try_recv().is_ok() {}
    }
}

impl UiLoop<HeadlessView> for HeadlessLoop {
    fn post(&self, job: UiJob<HeadlessView>) -> Result<(), MarshalError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(MarshalError::LoopClosed);
        }
        self.tx.send(job).map_err(|_| MarshalError::LoopClosed)
    }

    fn run_now(&self, job: UiJob<HeadlessView>) -> Result<(), MarshalError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(MarshalError::LoopClosed);
        }
        if !self.is_ui_thread() {
            return Err(MarshalError::NotUiThread);
        }
        job(&self.view);
        Ok(())
    }

    fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.ui_thread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pump_runs_posted_jobs_in_order() {
        let ui = HeadlessLoop::new();
        ui.post(Box::new(|v| v.set_archive_path("first.jpa"))).unwrap();
        ui.post(Box::new(|v| v.set_archive_path("second.jpa"))).unwrap();

        assert_eq!(ui.pump(), 2);
        assert_eq!(ui.view().snapshot().archive_path, "second.jpa");
        assert_eq!(
            ui.view().journal(),
            vec!["archive=first.jpa".to_string(), "archive=second.jpa".to_string()]
        );
    }

    #[test]
    fn run_now_rejects_foreign_threads() {
        let ui = HeadlessLoop::new();
        let handle = ui.clone_handle();

        let result = thread::spawn(move || handle.run_now(Box::new(|_| {})))
            .join()
            .unwrap();
        assert_eq!(result.unwrap_err(), MarshalError::NotUiThread);
    }

    #[test]
    fn closed_loop_rejects_posts() {
        let ui = HeadlessLoop::new();
        ui.close();
        let err = ui.post(Box::new(|_| {})).unwrap_err();
        assert_eq!(err, MarshalError::LoopClosed);
    }

    #[test]
    fn options_toggle_touches_every_option_control() {
        let view = HeadlessView::new();
        view.set_options_enabled(false);
        let state = view.snapshot();
        for control in OPTION_CONTROLS {
            assert!(!state.is_enabled(*control));
        }
        // The extract button stays live so it can act as cancel.
        assert!(state.is_enabled(ControlId::ExtractButton));
    }
}
