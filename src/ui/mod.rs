// UI module
//
// The gateway core and its collaborators. Everything except `slint_view` and
// `controller` is toolkit-free; the headless pieces exist so the whole gateway
// can run without a display.

pub mod capability;
pub mod controller;
pub mod dialogs;
pub mod filters;
pub mod gateway;
pub mod headless;
pub mod marshal;
pub mod slint_view;
pub mod taskbar;
pub mod view;

pub use capability::{PlatformCapabilities, TaskbarSupport};
pub use controller::{ExtractHandler, ExtractionRequest, WizardController};
pub use dialogs::{DialogAdapter, FilePickRequest, FolderPickRequest, NativeDialogs};
pub use filters::{FilterEntry, FilterSpec};
pub use gateway::{MainViewGateway, ViewGateway};
pub use headless::{HeadlessLoop, HeadlessView};
pub use marshal::{UiLoop, UiMarshaler};
pub use taskbar::{NullTaskbar, TaskbarProgress, TaskbarState};
pub use view::ExtractView;
