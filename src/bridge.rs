//! Types of the integration with the host's action framework.
//!
//! The framework raises a cancelable confirm event before running a
//! qualifying element's default action, then consults its native confirm
//! prompt. The decision logic lives in [`crate::modal::ConfirmModal`]; this
//! module holds the protocol types and the guarded native-confirm override.

use crate::dialog::DialogId;
use crate::element::Element;

/// Answer to the framework's confirm event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    /// Dialog spawned; the framework must not run the default action
    Suppress,
    /// The dialog was confirmed; let the framework's flow continue
    Proceed,
    /// Element is not confirmable through a dialog; framework default applies
    NotHandled,
}

/// Where an element's dialog stands in the confirm protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Shown,
    /// Commit clicked, override active until the dialog is hidden
    ConfirmedOnce,
}

/// Host-side action framework
pub trait ActionFramework {
    /// Run the element's default action (follow, submit, remote request)
    fn perform(&mut self, element: &Element);
}

/// Claims on the native-confirm override.
///
/// Every dialog in [`BridgeState::ConfirmedOnce`] holds one claim. The
/// override stays active until the last claim is released, so nested dialogs
/// cannot restore the original prompt from under each other.
#[derive(Debug, Default)]
pub struct ConfirmOverride {
    holders: Vec<DialogId>,
}

impl ConfirmOverride {
    /// Returns false if `owner` already held a claim
    pub fn arm(&mut self, owner: &DialogId) -> bool {
        if self.is_held_by(owner) {
            return false;
        }
        self.holders.push(owner.clone());
        true
    }

    /// Returns false if `owner` held no claim
    pub fn release(&mut self, owner: &DialogId) -> bool {
        match self.holders.iter().rposition(|holder| holder == owner) {
            Some(index) => {
                self.holders.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn is_held_by(&self, owner: &DialogId) -> bool {
        self.holders.contains(owner)
    }

    pub fn holders(&self) -> &[DialogId] {
        &self.holders
    }
}

/// Native confirm prompt of the host
pub type NativePrompt = Box<dyn FnMut(&str) -> bool>;

/// The framework's native-confirm lookup, answering affirmatively while the override is armed
pub struct NativeConfirm {
    original: NativePrompt,
    guard: ConfirmOverride,
}

impl NativeConfirm {
    pub fn new(original: NativePrompt) -> Self {
        Self {
            original,
            guard: ConfirmOverride::default(),
        }
    }

    pub fn confirm(&mut self, message: &str) -> bool {
        if self.guard.is_active() {
            log::debug!("Native confirm overridden by {:?}", self.guard.holders());
            return true;
        }
        (self.original)(message)
    }

    pub fn set_original(&mut self, original: NativePrompt) {
        self.original = original;
    }

    pub fn guard(&self) -> &ConfirmOverride {
        &self.guard
    }

    pub fn guard_mut(&mut self) -> &mut ConfirmOverride {
        &mut self.guard
    }
}

impl Default for NativeConfirm {
    /// Without a host prompt nothing is confirmed natively
    fn default() -> Self {
        Self::new(Box::new(|_| false))
    }
}

impl std::fmt::Debug for NativeConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeConfirm").field("guard", &self.guard).finish_non_exhaustive()
    }
}
