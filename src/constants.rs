//! Constants used throughout the crate
//!
//! This module centralizes the built-in dialog defaults, CSS class names and
//! error texts so the settings layer, the builder and the renderers agree.

// Dialog defaults
pub const DEFAULT_TITLE: &str = "Are you sure?";
pub const DEFAULT_COMMIT: &str = "Confirm";
pub const DEFAULT_COMMIT_CLASS: &str = "btn-danger";
pub const DEFAULT_CANCEL: &str = "Cancel";
pub const DEFAULT_CANCEL_CLASS: &str = "btn-default";
pub const DEFAULT_VERIFY_CLASS: &str = "form-control";
pub const DEFAULT_FADE: bool = true;
pub const DEFAULT_SHOW: bool = true;
/// Base stacking value; the first dialog is stacked one above it
pub const DEFAULT_Z_INDEX: i32 = 1050;
pub const DEFAULT_ELEMENTS: [&str; 3] = [
    "a[data-confirm]",
    "button[data-confirm]",
    "input[type=submit][data-confirm]",
];
pub const DEFAULT_MODAL_CLOSE_CONTENT: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="24" height="24" viewBox="0 0 24 24">"##,
    r##"<defs><path id="a" d="M17.033 22.17a.75.75 0 1 1-1.5 0v-4.677h-4.676a.75.75 0 0 1 0-1.5h4.677v-4.677a.75.75 0 0 1 1.5 0v4.677h4.676a.75.75 0 0 1 0 1.5h-4.677v4.677zm-.94 5.845c6.194 0 11.215-5.021 11.215-11.215S22.287 5.585 16.093 5.585 4.878 10.606 4.878 16.8s5.021 11.215 11.215 11.215zm0-1.5c-5.365 0-9.715-4.35-9.715-9.715 0-5.366 4.35-9.715 9.715-9.715 5.366 0 9.715 4.35 9.715 9.715s-4.35 9.715-9.715 9.715z"/></defs>"##,
    r##"<use fill="#1E1E1E" fill-rule="evenodd" transform="rotate(-45 8.057 19.128)" xlink:href="#a"/></svg>"##
);

// Markup class names
pub const CLASS_MODAL: &str = "modal";
pub const CLASS_FADE: &str = "fade";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_COMMIT: &str = "commit";
pub const CLASS_CANCEL: &str = "cancel";
pub const CLASS_BACKDROP: &str = "modal-backdrop";

/// Prefix of every generated dialog id
pub const DIALOG_ID_PREFIX: &str = "confirm-modal-";

/// HTTP verb hint that moves default focus to the cancel control
pub const METHOD_DELETE: &str = "delete";

// Widget detection errors
pub const ERROR_WIDGET_MISSING: &str = "The bootstrap modal plugin does not appear to be loaded.";
pub const ERROR_WIDGET_CONSTRUCTOR_MISSING: &str = "The bootstrap modal plugin does not have a Constructor ?!?";
pub const ERROR_WIDGET_VERSION_MISSING: &str = "The bootstrap modal plugin does not have its version defined ?!?";

// Configuration
pub const CONFIG_FILE_NAME: &str = "confirm-modal.toml";
pub const CONFIG_DIR_NAME: &str = "confirm-modal";
pub const LOG_FILE_NAME: &str = "confirm-modal.log";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DEFAULT_LOG_LEVEL: &str = "info";
