// The Passive View surface.
//
// `ExtractView` is everything the gateway knows about the window: dumb field
// accessors, no behavior. The Slint window implements it by projecting onto
// its properties; the headless double implements it over an owned ViewState.
// Because the gateway is generic over this trait, every piece of gateway logic
// runs unmodified against either.

use crate::models::ControlId;

/// Field-level surface of the wizard window.
///
/// All methods are called on the UI thread only; the marshaler guarantees that
/// for mutations and the gateway's getter contract guarantees it for reads.
pub trait ExtractView {
    fn set_window_title(&self, title: &str);

    /// Set the caption of a single control. Controls without a caption (text
    /// fields) ignore the call.
    fn set_control_text(&self, control: ControlId, text: &str);

    fn set_archive_path(&self, path: &str);
    fn archive_path(&self) -> String;

    fn set_output_folder(&self, path: &str);
    fn output_folder(&self) -> String;

    fn set_password(&self, value: &str);
    fn password(&self) -> String;

    fn set_dry_run(&self, checked: bool);
    fn dry_run(&self) -> bool;

    fn set_ignore_write_errors(&self, checked: bool);
    fn ignore_write_errors(&self) -> bool;

    /// Toggle the entire extraction-options input group in one step.
    fn set_options_enabled(&self, enabled: bool);

    /// Display an extraction progress percent. The gateway clamps before
    /// calling; implementations may assume `0..=100`.
    fn set_progress(&self, percent: i32);

    fn set_extracted_file(&self, name: &str);
}
