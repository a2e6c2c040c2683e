//! Terminal presentation of the dialogs in a [`Document`](crate::document::Document).
//!
//! - [`dialog_view`] - drawing dialogs with ratatui, stacked by z-index
//! - [`keys`] - mapping crossterm key events to dialog interactions
//! - [`layout`] - centered and cascaded placement

pub mod dialog_view;
pub mod keys;
pub mod layout;

pub use dialog_view::{render_document, DialogView};
pub use keys::{interaction_for_key, topmost};
