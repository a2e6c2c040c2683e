//! Dialog defaults and their override lifecycle.
//!
//! [`Settings`] is always fully populated. [`SettingsStore::set_defaults`]
//! merges a [`SettingsPatch`] onto the current values and
//! [`SettingsStore::restore_defaults`] puts the built-in record back.

use crate::constants::{
    DEFAULT_CANCEL, DEFAULT_CANCEL_CLASS, DEFAULT_COMMIT, DEFAULT_COMMIT_CLASS, DEFAULT_ELEMENTS, DEFAULT_FADE,
    DEFAULT_MODAL_CLOSE_CONTENT, DEFAULT_SHOW, DEFAULT_TITLE, DEFAULT_VERIFY_CLASS, DEFAULT_Z_INDEX,
};
use crate::options::Focus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defaults applied to every dialog that does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dialog title
    pub title: String,
    /// Commit button label
    pub commit: String,
    /// Extra CSS class for the commit button
    pub commit_class: String,
    /// Cancel button label
    pub cancel: String,
    /// Extra CSS class for the cancel button
    pub cancel_class: String,
    /// Animate show/hide transitions
    pub fade: bool,
    /// CSS class of the verification input
    pub verify_class: String,
    /// Selectors of elements whose confirm event is intercepted
    pub elements: Vec<String>,
    /// Control focused once the dialog is shown
    pub focus: Focus,
    /// Base stacking value
    pub z_index: i32,
    /// Extra CSS class for the dialog container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_class: Option<String>,
    /// Markup of the close button (trusted, inserted verbatim)
    pub modal_close_content: String,
    /// Whether the widget shows the dialog on spawn
    pub show: bool,
    /// Keys without a meaning here; kept so callers can round-trip them
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            commit: DEFAULT_COMMIT.to_string(),
            commit_class: DEFAULT_COMMIT_CLASS.to_string(),
            cancel: DEFAULT_CANCEL.to_string(),
            cancel_class: DEFAULT_CANCEL_CLASS.to_string(),
            fade: DEFAULT_FADE,
            verify_class: DEFAULT_VERIFY_CLASS.to_string(),
            elements: DEFAULT_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            focus: Focus::Commit,
            z_index: DEFAULT_Z_INDEX,
            modal_class: None,
            modal_close_content: DEFAULT_MODAL_CLOSE_CONTENT.to_string(),
            show: DEFAULT_SHOW,
            extra: BTreeMap::new(),
        }
    }
}

/// Partial settings. Absent keys leave the current value untouched.
///
/// Accepts both snake_case keys and the camelCase names used by browser-side
/// configuration snippets (`commitClass`, `zIndex`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub title: Option<String>,
    pub commit: Option<String>,
    #[serde(alias = "commitClass")]
    pub commit_class: Option<String>,
    pub cancel: Option<String>,
    #[serde(alias = "cancelClass")]
    pub cancel_class: Option<String>,
    pub fade: Option<bool>,
    #[serde(alias = "verifyClass")]
    pub verify_class: Option<String>,
    pub elements: Option<Vec<String>>,
    pub focus: Option<Focus>,
    #[serde(alias = "zIndex")]
    pub z_index: Option<i32>,
    #[serde(alias = "modalClass")]
    pub modal_class: Option<String>,
    #[serde(alias = "modalCloseContent")]
    pub modal_close_content: Option<String>,
    pub show: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Settings {
    /// Shallow merge: every key present in `patch` replaces the current value
    pub fn merge(&mut self, patch: SettingsPatch) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut self.title, patch.title);
        set(&mut self.commit, patch.commit);
        set(&mut self.commit_class, patch.commit_class);
        set(&mut self.cancel, patch.cancel);
        set(&mut self.cancel_class, patch.cancel_class);
        set(&mut self.fade, patch.fade);
        set(&mut self.verify_class, patch.verify_class);
        set(&mut self.elements, patch.elements);
        set(&mut self.focus, patch.focus);
        set(&mut self.z_index, patch.z_index);
        set(&mut self.modal_close_content, patch.modal_close_content);
        set(&mut self.show, patch.show);
        if let Some(modal_class) = patch.modal_class {
            self.modal_class = Some(modal_class).filter(|class| !class.is_empty());
        }
        self.extra.extend(patch.extra);
    }
}

/// Owner of the current [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit record instead of the built-in defaults
    pub fn with_settings(settings: Settings) -> Self {
        Self { current: settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.current
    }

    pub fn set_defaults(&mut self, patch: SettingsPatch) {
        log::debug!("Merging settings patch: {:?}", patch);
        self.current.merge(patch);
    }

    pub fn restore_defaults(&mut self) {
        log::debug!("Restoring built-in settings");
        self.current = Settings::default();
    }
}
