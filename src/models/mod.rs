// Data model module
//
// Plain data types shared across the gateway, the views and the binary:
// control identities, the owned view state, and persisted user settings.

pub mod control;
pub mod settings;
pub mod view_state;

pub use control::{ControlBinding, ControlId, OPTION_CONTROLS, default_bindings};
pub use settings::UserSettings;
pub use view_state::ViewState;
