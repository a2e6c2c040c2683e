//! Per-build dialog options.
//!
//! [`DialogOptions`] is either filled in by a caller of the programmatic
//! confirm path or derived from an element's `data-*` attributes with
//! [`DialogOptions::from_element`]. Every field is optional; the builder
//! falls back to the current settings for anything left unset.

use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Control that receives focus once the dialog is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Commit,
    Cancel,
}

impl FromStr for Focus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commit" => Ok(Focus::Commit),
            "cancel" => Ok(Focus::Cancel),
            other => Err(format!("unknown focus target '{other}'")),
        }
    }
}

/// Backdrop behavior handed to the dialog widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    /// Backdrop shown, clicking it dismisses the dialog
    Enabled,
    /// No backdrop
    Disabled,
    /// Backdrop shown, clicking it does nothing
    Static,
}

impl Backdrop {
    fn from_data(value: &str) -> Option<Self> {
        match value.trim() {
            "static" => Some(Backdrop::Static),
            "true" => Some(Backdrop::Enabled),
            "false" => Some(Backdrop::Disabled),
            _ => None,
        }
    }
}

/// Caller-supplied hook for the programmatic confirm path
pub struct Callback(Box<dyn FnMut()>);

impl Callback {
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn call(&mut self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Options for a single dialog build
#[derive(Debug, Default)]
pub struct DialogOptions {
    pub title: Option<String>,
    /// Body text; paragraphs are separated by a blank line. Trusted markup.
    pub text: Option<String>,
    pub focus: Option<Focus>,
    /// HTTP verb hint of the triggering action
    pub method: Option<String>,
    pub modal_class: Option<String>,
    /// Close button markup. Trusted markup.
    pub modal_close_content: Option<String>,
    pub commit: Option<String>,
    pub commit_class: Option<String>,
    pub cancel: Option<String>,
    pub cancel_class: Option<String>,
    /// Action completes asynchronously; commit also dismisses the dialog
    pub remote: bool,
    /// Literal the user must type before commit is enabled
    pub verify: Option<String>,
    /// Pattern the input must match before commit is enabled; wins over `verify`
    pub verify_regexp: Option<String>,
    pub verify_regexp_case_insensitive: bool,
    /// Paragraph shown above the verification input
    pub verify_label: Option<String>,
    /// Compare the literal against the input with punctuation removed
    pub strip_alpha: bool,
    pub backdrop: Option<Backdrop>,
    pub keyboard: Option<bool>,
    pub show: Option<bool>,
    pub on_confirm: Option<Callback>,
    pub on_cancel: Option<Callback>,
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a plain confirmation with the given body text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn on_confirm(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_confirm = Some(Callback::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Callback::new(f));
        self
    }

    /// Reads every recognized attribute off `element`.
    ///
    /// The title falls back from `data-title` to the `title` attribute to
    /// `data-original-title`. Unrecognized focus values are ignored.
    pub fn from_element(element: &Element) -> Self {
        let text_of = |key: &str| element.data(key).filter(|v| !v.is_empty()).map(str::to_string);

        let title = text_of("title")
            .or_else(|| element.attr("title").filter(|v| !v.is_empty()).map(str::to_string))
            .or_else(|| text_of("original-title"));

        let focus = element.data("focus").and_then(|value| match value.parse() {
            Ok(focus) => Some(focus),
            Err(e) => {
                log::warn!("Element '{}': {}", element.id, e);
                None
            }
        });

        Self {
            title,
            text: element.confirm_text().map(str::to_string),
            focus,
            method: text_of("method"),
            modal_class: text_of("modal-class"),
            modal_close_content: text_of("modal-close-content"),
            commit: text_of("commit"),
            commit_class: text_of("commit-class"),
            cancel: text_of("cancel"),
            cancel_class: text_of("cancel-class"),
            remote: element.data("remote").is_some_and(is_truthy),
            verify: text_of("verify"),
            verify_regexp: text_of("verify-regexp"),
            verify_regexp_case_insensitive: element.data("verify-regexp-caseinsensitive").is_some_and(is_truthy),
            verify_label: text_of("verify-text"),
            strip_alpha: false,
            backdrop: element.data("backdrop").and_then(Backdrop::from_data),
            keyboard: element.data("keyboard").and_then(parse_flag),
            show: element.data("show").and_then(parse_flag),
            on_confirm: None,
            on_cancel: None,
        }
    }

    /// Whether a verification input gates the commit control
    pub fn requires_verification(&self) -> bool {
        self.verify.as_deref().is_some_and(|v| !v.is_empty())
            || self.verify_regexp.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Truthiness of a data attribute value: empty, `false`, `null` and `0` are false
fn is_truthy(value: &str) -> bool {
    !matches!(value.trim(), "" | "false" | "null" | "0")
}

/// Explicit boolean data attribute; anything else leaves the widget default
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
