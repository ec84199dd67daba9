// Integration tests for the view gateway over the headless harness.
//
// The test thread plays the UI thread: it owns a HeadlessLoop and pumps
// marshaled jobs, while spawned workers act as the extraction engine reporting
// progress through the gateway exactly as the real controller contract
// prescribes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use proptest::prelude::*;

use extract_wizard::error::GatewayError;
use extract_wizard::models::{ControlId, OPTION_CONTROLS};
use extract_wizard::ui::capability::TaskbarSupport;
use extract_wizard::ui::dialogs::{DialogAdapter, FilePickRequest, FolderPickRequest};
use extract_wizard::ui::headless::{HeadlessLoop, HeadlessView};
use extract_wizard::ui::taskbar::{TaskbarProgress, TaskbarState};
use extract_wizard::ui::{FilterSpec, MainViewGateway, PlatformCapabilities, ViewGateway};

/// Dialog adapter whose answers are scripted up front. `None` simulates the
/// user cancelling.
#[derive(Default)]
struct ScriptedDialogs {
    files: Mutex<VecDeque<Option<String>>>,
    folders: Mutex<VecDeque<Option<String>>>,
}

impl ScriptedDialogs {
    fn with_file_answers(answers: Vec<Option<&str>>) -> Self {
        Self {
            files: Mutex::new(answers.into_iter().map(|a| a.map(String::from)).collect()),
            folders: Mutex::new(VecDeque::new()),
        }
    }

    fn with_folder_answers(answers: Vec<Option<&str>>) -> Self {
        Self {
            files: Mutex::new(VecDeque::new()),
            folders: Mutex::new(answers.into_iter().map(|a| a.map(String::from)).collect()),
        }
    }
}

impl DialogAdapter for ScriptedDialogs {
    fn pick_file(&self, _request: &FilePickRequest) -> Result<String, GatewayError> {
        match self.files.lock().unwrap().pop_front().flatten() {
            Some(path) => Ok(path),
            None => Ok(String::new()),
        }
    }

    fn pick_folder(&self, _request: &FolderPickRequest) -> Result<String, GatewayError> {
        match self.folders.lock().unwrap().pop_front().flatten() {
            Some(path) => Ok(path),
            None => Ok(String::new()),
        }
    }

    fn show_error(&self, _title: &str, _message: &str) {}

    fn show_info(&self, _title: &str, _message: &str) {}
}

/// Taskbar collaborator that counts calls and can be told to fail.
#[derive(Default)]
struct CountingTaskbar {
    calls: AtomicUsize,
    fail: bool,
}

impl TaskbarProgress for CountingTaskbar {
    fn set_state(&self, _state: TaskbarState) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(GatewayError::Dialog("shell gone".to_string()))
        } else {
            Ok(())
        }
    }

    fn set_value(&self, _percent: i32) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(GatewayError::Dialog("shell gone".to_string()))
        } else {
            Ok(())
        }
    }
}

fn gateway_with(
    ui: &Arc<HeadlessLoop>,
    dialogs: Arc<dyn DialogAdapter>,
    taskbar: Arc<dyn TaskbarProgress>,
    capabilities: Arc<PlatformCapabilities>,
) -> Arc<MainViewGateway<HeadlessView>> {
    Arc::new(MainViewGateway::new(
        ui.clone_handle(),
        dialogs,
        taskbar,
        capabilities,
    ))
}

fn simple_gateway(ui: &Arc<HeadlessLoop>) -> Arc<MainViewGateway<HeadlessView>> {
    gateway_with(
        ui,
        Arc::new(ScriptedDialogs::default()),
        Arc::new(CountingTaskbar::default()),
        Arc::new(PlatformCapabilities::with_probe(|| {
            TaskbarSupport::Unsupported
        })),
    )
}

#[test]
fn worker_setter_sequence_applies_in_issue_order() {
    let ui = HeadlessLoop::new();
    let gateway = simple_gateway(&ui);

    let worker_gateway = Arc::clone(&gateway);
    let worker = thread::spawn(move || {
        worker_gateway.set_extraction_options_state(false);
        for percent in [10, 20, 30, 40, 50] {
            worker_gateway.set_extraction_progress(percent);
            worker_gateway.set_extracted_file_name(&format!("file-{percent}.php"));
        }
        worker_gateway.set_extraction_options_state(true);
    });

    ui.pump_until(|| worker.is_finished());
    worker.join().unwrap();

    let state = ui.view().snapshot();
    assert_eq!(state.progress, 50);
    assert_eq!(state.extracted_file, "file-50.php");

    // No reordering and no lost update: the journal is exactly the issued
    // sequence.
    let journal = ui.view().journal();
    let expected = vec![
        "options_enabled=false".to_string(),
        "progress=10".to_string(),
        "file=file-10.php".to_string(),
        "progress=20".to_string(),
        "file=file-20.php".to_string(),
        "progress=30".to_string(),
        "file=file-30.php".to_string(),
        "progress=40".to_string(),
        "file=file-40.php".to_string(),
        "progress=50".to_string(),
        "file=file-50.php".to_string(),
        "options_enabled=true".to_string(),
    ];
    assert_eq!(journal, expected);
}

#[test]
fn options_toggle_round_trip_restores_every_control() {
    let ui = HeadlessLoop::new();
    let gateway = simple_gateway(&ui);

    let before = ui.view().snapshot();

    gateway.set_extraction_options_state(false);
    let locked = ui.view().snapshot();
    for control in OPTION_CONTROLS {
        assert!(!locked.is_enabled(*control), "{control:?} should be locked");
    }
    assert!(locked.is_enabled(ControlId::ExtractButton));

    gateway.set_extraction_options_state(true);
    let after = ui.view().snapshot();
    for control in OPTION_CONTROLS {
        assert_eq!(
            after.is_enabled(*control),
            before.is_enabled(*control),
            "{control:?} should be restored"
        );
    }
}

#[test]
fn cancelled_pickers_return_the_empty_sentinel() {
    let ui = HeadlessLoop::new();
    let gateway = gateway_with(
        &ui,
        Arc::new(ScriptedDialogs::with_file_answers(vec![
            None,
            Some("/backups/site.jpa"),
        ])),
        Arc::new(CountingTaskbar::default()),
        Arc::new(PlatformCapabilities::with_probe(|| {
            TaskbarSupport::Unsupported
        })),
    );

    let request = FilePickRequest {
        title: "Select a backup archive".to_string(),
        default_file: String::new(),
        filters: FilterSpec::new("JPA archives", "*.jpa").with("All files", "*.*"),
        ok_label: "OK".to_string(),
        cancel_label: "Cancel".to_string(),
    };

    // Cancellation: exactly the empty string, not an error.
    assert_eq!(gateway.pick_file(&request).unwrap(), "");
    // Selection: the exact chosen path.
    assert_eq!(gateway.pick_file(&request).unwrap(), "/backups/site.jpa");
}

#[test]
fn cancelled_folder_picker_returns_the_empty_sentinel() {
    let ui = HeadlessLoop::new();
    let gateway = gateway_with(
        &ui,
        Arc::new(ScriptedDialogs::with_folder_answers(vec![
            None,
            Some("/srv/www"),
        ])),
        Arc::new(CountingTaskbar::default()),
        Arc::new(PlatformCapabilities::with_probe(|| {
            TaskbarSupport::Unsupported
        })),
    );

    let request = FolderPickRequest {
        title: "Select the extraction folder".to_string(),
        default_folder: String::new(),
        ok_label: "OK".to_string(),
        cancel_label: "Cancel".to_string(),
    };

    assert_eq!(gateway.pick_folder(&request).unwrap(), "");
    assert_eq!(gateway.pick_folder(&request).unwrap(), "/srv/www");
}

#[test]
fn capability_probe_is_stable_across_taskbar_failures() {
    let probes = Arc::new(AtomicUsize::new(0));
    let probe_counter = Arc::clone(&probes);

    let ui = HeadlessLoop::new();
    let taskbar = Arc::new(CountingTaskbar {
        calls: AtomicUsize::new(0),
        fail: true,
    });
    let gateway = gateway_with(
        &ui,
        Arc::new(ScriptedDialogs::default()),
        Arc::clone(&taskbar) as Arc<dyn TaskbarProgress>,
        Arc::new(PlatformCapabilities::with_probe(move || {
            probe_counter.fetch_add(1, Ordering::SeqCst);
            TaskbarSupport::Supported
        })),
    );

    // Every call fails inside the collaborator; the gateway swallows each one
    // and keeps consulting the same cached capability.
    for percent in 0..5 {
        gateway.set_taskbar_progress_state(TaskbarState::Normal);
        gateway.set_taskbar_progress_value(percent * 20);
    }

    assert_eq!(probes.load(Ordering::SeqCst), 1, "probe must run exactly once");
    assert_eq!(taskbar.calls.load(Ordering::SeqCst), 10);
}

#[test]
fn unsupported_platform_suppresses_taskbar_calls() {
    let ui = HeadlessLoop::new();
    let taskbar = Arc::new(CountingTaskbar::default());
    let gateway = gateway_with(
        &ui,
        Arc::new(ScriptedDialogs::default()),
        Arc::clone(&taskbar) as Arc<dyn TaskbarProgress>,
        Arc::new(PlatformCapabilities::with_probe(|| {
            TaskbarSupport::Unsupported
        })),
    );

    gateway.set_taskbar_progress_state(TaskbarState::Indeterminate);
    gateway.set_taskbar_progress_value(50);

    assert_eq!(taskbar.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn off_ui_thread_getter_is_flagged_as_contract_violation() {
    let ui = HeadlessLoop::new();
    let gateway = simple_gateway(&ui);
    gateway.set_backup_archive_path("/backups/site.jpa");

    let worker_gateway = Arc::clone(&gateway);
    let result = thread::spawn(move || worker_gateway.backup_archive_path()).join();

    assert!(result.is_err(), "off-thread getter must not silently pass");
}

#[test]
fn off_ui_thread_dialog_is_flagged_as_contract_violation() {
    let ui = HeadlessLoop::new();
    let gateway = simple_gateway(&ui);

    let worker_gateway = Arc::clone(&gateway);
    let result = thread::spawn(move || {
        worker_gateway.show_info_message("title", "message");
    })
    .join();

    assert!(result.is_err());
}

#[test]
fn window_title_and_field_round_trip() {
    let ui = HeadlessLoop::new();
    let gateway = simple_gateway(&ui);

    gateway.set_window_title("Extract Wizard 0.1.0");
    gateway.set_password("hunter2");

    let state = ui.view().snapshot();
    assert_eq!(state.window_title, "Extract Wizard 0.1.0");
    assert_eq!(state.password, "hunter2");
    assert_eq!(gateway.password(), "hunter2");
}

proptest! {
    /// For every input, the displayed progress equals clamp(p, 0, 100).
    #[test]
    fn progress_is_always_clamped(percent in any::<i32>()) {
        let ui = HeadlessLoop::new();
        let gateway = simple_gateway(&ui);

        gateway.set_extraction_progress(percent);

        let shown = ui.view().snapshot().progress;
        prop_assert_eq!(shown, percent.clamp(0, 100));
        prop_assert!((0..=100).contains(&shown));
    }
}
