// Extract Wizard - passive-view front-end for extracting backup archives
//
// This is the library crate containing the view gateway and its collaborators.
// The binary crate (main.rs) provides the GUI entry point.

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::SettingsStore;
pub use error::{GatewayError, MarshalError};
pub use i18n::{StaticCatalog, TranslationCatalog};
pub use models::{ControlBinding, ControlId, UserSettings, ViewState, default_bindings};
pub use ui::{
    FilePickRequest, FilterSpec, FolderPickRequest, MainViewGateway, PlatformCapabilities,
    TaskbarState, ViewGateway,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
