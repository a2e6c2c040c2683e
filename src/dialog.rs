//! The dialog descriptor: everything a renderer needs to draw a confirmation
//! dialog, plus the small amount of live state (visibility, verification
//! input, focus) that changes while it is on screen.

use crate::constants::{CLASS_FADE, CLASS_MODAL, CLASS_SHOW, DIALOG_ID_PREFIX};
use crate::element::ElementId;
use crate::options::Focus;
use crate::verification::VerificationGate;
use crate::widget::ShowConfig;
use std::fmt;
use uuid::Uuid;

/// Random opaque dialog identifier, also used as the markup id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(String);

impl DialogId {
    pub fn generate() -> Self {
        Self(format!("{}{}", DIALOG_ID_PREFIX, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markup supplied by the caller and inserted without escaping.
///
/// Confirmation text and the close icon are a trust boundary: whoever sets
/// them controls the dialog's markup. Nothing here sanitizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Commit or cancel button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub class: String,
    pub disabled: bool,
    /// Clicking also asks the widget to dismiss the dialog
    pub dismiss: bool,
}

/// Clickable controls of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Commit,
    Cancel,
    /// Header close button
    Close,
}

/// Widget-side visibility of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    /// Show requested, shown transition not finished yet
    Showing,
    Shown,
    /// Hide requested, hidden transition not finished yet
    Hiding,
}

/// Element inside the dialog currently holding focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Commit,
    Cancel,
    Verification,
}

impl From<Focus> for FocusTarget {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Commit => FocusTarget::Commit,
            Focus::Cancel => FocusTarget::Cancel,
        }
    }
}

/// Verification input and its gate
#[derive(Debug, Clone)]
pub struct Verification {
    pub gate: VerificationGate,
    pub label: Option<String>,
    pub class: String,
}

/// Who the dialog belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOrigin {
    /// Cached for a triggering element
    Element(ElementId),
    /// One-off programmatic confirmation, dropped once hidden
    Ephemeral,
}

#[derive(Debug, Clone)]
pub struct Dialog {
    pub id: DialogId,
    pub origin: DialogOrigin,
    pub title: String,
    pub paragraphs: Vec<TrustedHtml>,
    pub modal_class: Option<String>,
    pub fade: bool,
    pub close_content: TrustedHtml,
    pub commit: Button,
    pub cancel: Button,
    pub verification: Option<Verification>,
    /// Stacking value assigned at build time
    pub z_index: i32,
    /// Control to focus once shown
    pub focus: Focus,
    pub show_config: ShowConfig,
    pub visibility: Visibility,
    pub focused: Option<FocusTarget>,
}

impl Dialog {
    /// Shown or on its way to being shown
    pub fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Showing | Visibility::Shown)
    }

    pub fn is_ephemeral(&self) -> bool {
        self.origin == DialogOrigin::Ephemeral
    }

    pub fn element(&self) -> Option<&ElementId> {
        match &self.origin {
            DialogOrigin::Element(id) => Some(id),
            DialogOrigin::Ephemeral => None,
        }
    }

    /// Container classes in markup order
    pub fn classes(&self) -> Vec<&str> {
        let mut classes = vec![CLASS_MODAL];
        if let Some(class) = self.modal_class.as_deref() {
            classes.push(class);
        }
        if self.fade {
            classes.push(CLASS_FADE);
        }
        if self.is_visible() {
            classes.push(CLASS_SHOW);
        }
        classes
    }

    /// Whether clicking `control` also dismisses the dialog through the widget
    pub fn dismisses(&self, control: Control) -> bool {
        match control {
            Control::Commit => self.commit.dismiss,
            Control::Cancel => self.cancel.dismiss,
            Control::Close => true,
        }
    }

    pub fn verification_input(&self) -> Option<&str> {
        self.verification.as_ref().map(|v| v.gate.input())
    }

    /// Feed the verification input; returns whether commit is now enabled
    pub fn set_verification_input(&mut self, value: &str) -> bool {
        let Some(verification) = self.verification.as_mut() else {
            return !self.commit.disabled;
        };
        let enabled = verification.gate.update(value);
        self.commit.disabled = !enabled;
        enabled
    }

    /// Empty the verification input, disabling commit again
    pub fn reset_verification(&mut self) {
        if let Some(verification) = self.verification.as_mut() {
            verification.gate.reset();
            self.commit.disabled = true;
        }
    }

    fn can_focus(&self, target: FocusTarget) -> bool {
        match target {
            FocusTarget::Commit => !self.commit.disabled,
            FocusTarget::Cancel => true,
            FocusTarget::Verification => self.verification.is_some(),
        }
    }

    /// Focus handling at the end of the shown transition: the verification
    /// input first, then the configured control if it can take focus.
    pub fn apply_initial_focus(&mut self) {
        if self.verification.is_some() {
            self.focused = Some(FocusTarget::Verification);
        }
        let target = FocusTarget::from(self.focus);
        if self.can_focus(target) {
            self.focused = Some(target);
        }
    }

    /// Move focus to the next focusable element in tab order
    pub fn focus_next(&mut self) {
        let order = [FocusTarget::Verification, FocusTarget::Cancel, FocusTarget::Commit];
        let start = self
            .focused
            .and_then(|current| order.iter().position(|t| *t == current))
            .map_or(0, |index| index + 1);

        self.focused = (0..order.len())
            .map(|offset| order[(start + offset) % order.len()])
            .find(|target| self.can_focus(*target))
            .or(self.focused);
    }
}
