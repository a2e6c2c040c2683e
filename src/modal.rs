//! The confirmation dialog service.
//!
//! [`ConfirmModal`] owns the settings, the page model, the per-element cache
//! and the native-confirm override, and drives the widget. It answers the
//! action framework's confirm event, reacts to clicks and verification input,
//! and runs the cleanup that must follow every hidden transition whichever
//! control started it.

use crate::bridge::{ActionFramework, BridgeState, ConfirmDecision, ConfirmOverride, NativeConfirm, NativePrompt};
use crate::builder::ModalBuilder;
use crate::cache::ElementModalCache;
use crate::dialog::{Control, Dialog, DialogId, DialogOrigin, Visibility};
use crate::document::Document;
use crate::element::{self, Element, ElementId};
use crate::error::InitError;
use crate::options::{Callback, DialogOptions};
use crate::settings::{Settings, SettingsPatch, SettingsStore};
use crate::widget::DialogWidget;
use std::collections::HashMap;

/// End of an asynchronous widget transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Shown(DialogId),
    Hidden(DialogId),
}

/// User interaction with an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Click(Control),
    /// New value of the verification input
    Input(String),
    FocusNext,
}

#[derive(Debug, Default)]
struct EphemeralCallbacks {
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

pub struct ConfirmModal<W: DialogWidget> {
    settings: SettingsStore,
    document: Document,
    widget: W,
    widget_major: u32,
    cache: ElementModalCache,
    native: NativeConfirm,
    callbacks: HashMap<DialogId, EphemeralCallbacks>,
}

impl<W: DialogWidget> ConfirmModal<W> {
    /// Set up with the built-in defaults. Fails if the widget cannot be detected.
    pub fn new(widget: W) -> Result<Self, InitError> {
        Self::with_settings(widget, Settings::default())
    }

    pub fn with_settings(widget: W, settings: Settings) -> Result<Self, InitError> {
        let widget_major = widget.probe().major_version()?;
        log::info!("Dialog widget detected, major version {}", widget_major);

        Ok(Self {
            settings: SettingsStore::with_settings(settings),
            document: Document::new(),
            widget,
            widget_major,
            cache: ElementModalCache::new(),
            native: NativeConfirm::default(),
            callbacks: HashMap::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }

    pub fn set_defaults(&mut self, patch: SettingsPatch) {
        self.settings.set_defaults(patch);
    }

    pub fn restore_defaults(&mut self) {
        self.settings.restore_defaults();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn dialog(&self, id: &DialogId) -> Option<&Dialog> {
        self.document.dialog(id)
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn widget_major_version(&self) -> u32 {
        self.widget_major
    }

    pub fn cache(&self) -> &ElementModalCache {
        &self.cache
    }

    /// Install the host's native confirm prompt
    pub fn set_native_prompt(&mut self, prompt: NativePrompt) {
        self.native.set_original(prompt);
    }

    pub fn native_override(&self) -> &ConfirmOverride {
        self.native.guard()
    }

    fn append_built(settings: &Settings, document: &mut Document, options: &DialogOptions, origin: DialogOrigin) -> DialogId {
        let dialog = ModalBuilder::new(settings).build(options, origin, document);
        let id = dialog.id.clone();
        document.append(dialog);
        id
    }

    /// Ask the widget to show a dialog. No-op if it is already visible.
    pub fn spawn(&mut self, id: &DialogId) -> bool {
        let Some(dialog) = self.document.dialog_mut(id) else {
            log::warn!("Cannot spawn unknown dialog {}", id);
            return false;
        };
        if dialog.is_visible() {
            log::debug!("Dialog {} is already visible", id);
            return true;
        }
        if dialog.visibility == Visibility::Hiding {
            // The pending hidden event will not reset a dialog shown again
            dialog.reset_verification();
        }
        let config = dialog.show_config;
        if config.show != Some(false) {
            dialog.visibility = Visibility::Showing;
        }
        log::debug!("Spawning dialog {} with {:?}", id, config);
        self.widget.show(&mut self.document, id, &config);
        true
    }

    /// Ask the widget to hide a dialog. No-op unless it is visible.
    pub fn hide(&mut self, id: &DialogId) {
        let Some(dialog) = self.document.dialog_mut(id) else {
            return;
        };
        if !dialog.is_visible() {
            return;
        }
        dialog.visibility = Visibility::Hiding;
        dialog.focused = None;
        log::debug!("Hiding dialog {}", id);
        self.widget.hide(&mut self.document, id);
    }

    /// Spawn a one-off dialog. Outcome is reported through the option callbacks only.
    pub fn confirm(&mut self, mut options: DialogOptions) -> DialogId {
        let callbacks = EphemeralCallbacks {
            on_confirm: options.on_confirm.take(),
            on_cancel: options.on_cancel.take(),
        };
        let id = Self::append_built(self.settings.settings(), &mut self.document, &options, DialogOrigin::Ephemeral);
        self.callbacks.insert(id.clone(), callbacks);
        self.spawn(&id);
        id
    }

    /// Dialog cached for `element`, built from its attributes on first use
    pub fn get_confirm_modal(&mut self, element: &Element) -> DialogId {
        let settings = self.settings.settings();
        let document = &mut self.document;
        self.cache.get_or_build(element, |element| {
            let options = DialogOptions::from_element(element);
            Self::append_built(settings, document, &options, DialogOrigin::Element(element.id.clone()))
        })
    }

    /// Get or build the element's dialog and spawn it
    pub fn confirm_modal(&mut self, element: &Element) -> DialogId {
        let id = self.get_confirm_modal(element);
        self.spawn(&id);
        id
    }

    /// Whether the element matches one of the confirmable selectors
    pub fn is_confirmable(&self, element: &Element) -> bool {
        element::matches_any(&self.settings.settings().elements, element)
    }

    /// Handler for the framework's confirm event.
    ///
    /// A hidden dialog is spawned and the default action suppressed. A visible
    /// dialog means its commit control re-raised the event: the native prompt
    /// is overridden until the dialog is hidden and the action proceeds.
    pub fn on_confirm_event(&mut self, element: &Element) -> ConfirmDecision {
        if !self.is_confirmable(element) {
            return ConfirmDecision::NotHandled;
        }

        let id = self.get_confirm_modal(element);
        let visible = self.document.dialog(&id).is_some_and(Dialog::is_visible);

        if !visible {
            self.spawn(&id);
            let shown = self.document.dialog(&id).is_some_and(Dialog::is_visible);
            if shown && self.document.backdrops().is_empty() {
                self.document.insert_backdrop(Some(&id), true);
            }
            log::info!("Confirmation requested for '{}', default action suppressed", element.id);
            ConfirmDecision::Suppress
        } else {
            if self.native.guard_mut().arm(&id) {
                log::debug!("Native confirm overridden until dialog {} is hidden", id);
            }
            log::info!("Confirmation granted for '{}'", element.id);
            ConfirmDecision::Proceed
        }
    }

    /// The framework's native confirm lookup
    pub fn native_confirm(&mut self, message: &str) -> bool {
        self.native.confirm(message)
    }

    /// Run the framework's activation flow for `element`: confirm event, native
    /// confirm, then the default action. Returns whether the action ran.
    pub fn activate<F: ActionFramework + ?Sized>(&mut self, element: &Element, framework: &mut F) -> bool {
        let proceed = match self.on_confirm_event(element) {
            ConfirmDecision::Suppress => false,
            ConfirmDecision::Proceed => self.native_confirm(element.confirm_text().unwrap_or_default()),
            ConfirmDecision::NotHandled => match element.confirm_text() {
                Some(message) => self.native_confirm(message),
                None => true,
            },
        };

        if proceed {
            framework.perform(element);
        }
        proceed
    }

    /// Click a control of a visible dialog
    pub fn click<F: ActionFramework + ?Sized>(&mut self, id: &DialogId, control: Control, framework: &mut F) {
        let Some(dialog) = self.document.dialog(id) else {
            log::warn!("Click on unknown dialog {}", id);
            return;
        };
        if !dialog.is_visible() {
            log::debug!("Ignoring click on dialog {} that is not visible", id);
            return;
        }
        if control == Control::Commit && dialog.commit.disabled {
            log::debug!("Commit of dialog {} is disabled", id);
            return;
        }
        let origin = dialog.origin.clone();
        let dismisses = dialog.dismisses(control);

        match (origin, control) {
            (DialogOrigin::Element(element_id), Control::Commit) => {
                let element = self.cache.get(&element_id).map(|entry| entry.element.clone());
                if let Some(element) = element {
                    self.activate(&element, framework);
                }
                self.hide(id);
            }
            (DialogOrigin::Ephemeral, Control::Commit) => {
                self.run_callback(id, Control::Commit);
                self.hide(id);
            }
            (DialogOrigin::Ephemeral, Control::Cancel) => {
                self.run_callback(id, Control::Cancel);
                self.hide(id);
            }
            _ => {}
        }

        if dismisses {
            self.dismiss(id);
        }
    }

    fn run_callback(&mut self, id: &DialogId, control: Control) {
        let Some(callbacks) = self.callbacks.get_mut(id) else {
            return;
        };
        let callback = match control {
            Control::Commit => callbacks.on_confirm.as_mut(),
            Control::Cancel => callbacks.on_cancel.as_mut(),
            Control::Close => None,
        };
        if let Some(callback) = callback {
            log::debug!("Running {:?} callback of dialog {}", control, id);
            callback.call();
        }
    }

    /// Widget-driven dismissal. The widget loses track of nested backdrops,
    /// so one is dropped here while other dialogs stay open.
    fn dismiss(&mut self, id: &DialogId) {
        self.hide(id);
        if self.document.any_visible_except(id) && !self.document.is_modal_open() {
            if let Some(backdrop) = self.document.remove_last_backdrop() {
                log::debug!("Removed stale backdrop {:?}", backdrop.id);
            }
        }
    }

    /// Replace the verification input value; returns whether commit is enabled
    pub fn input(&mut self, id: &DialogId, value: &str) -> bool {
        match self.document.dialog_mut(id) {
            Some(dialog) => dialog.set_verification_input(value),
            None => false,
        }
    }

    pub fn interact<F: ActionFramework + ?Sized>(&mut self, id: &DialogId, interaction: Interaction, framework: &mut F) {
        match interaction {
            Interaction::Click(control) => self.click(id, control, framework),
            Interaction::Input(value) => {
                self.input(id, &value);
            }
            Interaction::FocusNext => {
                if let Some(dialog) = self.document.dialog_mut(id) {
                    dialog.focus_next();
                }
            }
        }
    }

    /// Completion of a widget transition
    pub fn dispatch(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Shown(id) => self.on_shown(&id),
            LifecycleEvent::Hidden(id) => self.on_hidden(&id),
        }
    }

    fn on_shown(&mut self, id: &DialogId) {
        let Some(dialog) = self.document.dialog_mut(id) else {
            log::debug!("Shown event for unknown dialog {}", id);
            return;
        };
        if dialog.visibility != Visibility::Showing {
            return;
        }
        dialog.visibility = Visibility::Shown;
        dialog.apply_initial_focus();
        log::debug!("Dialog {} shown, focus on {:?}", id, dialog.focused);
    }

    fn on_hidden(&mut self, id: &DialogId) {
        let Some(dialog) = self.document.dialog_mut(id) else {
            log::debug!("Hidden event for unknown dialog {}", id);
            return;
        };
        let respawned = dialog.is_visible();
        if respawned {
            log::debug!("Stale hidden event for dialog {} shown again", id);
        } else {
            dialog.visibility = Visibility::Hidden;
            dialog.focused = None;
            dialog.reset_verification();
        }
        let ephemeral = dialog.is_ephemeral() && !respawned;

        if self.document.restore_modal_open() {
            log::debug!("Body kept in modal-open state for remaining dialogs");
        }
        if self.native.guard_mut().release(id) {
            log::debug!("Native confirm claim of dialog {} released", id);
        }
        if ephemeral {
            self.document.remove(id);
            self.callbacks.remove(id);
            log::debug!("Ephemeral dialog {} removed", id);
        }
    }

    /// Protocol state of an element's cached dialog
    pub fn bridge_state(&self, element: &ElementId) -> BridgeState {
        let Some(id) = self.cache.dialog_for(element) else {
            return BridgeState::Idle;
        };
        if self.native.guard().is_held_by(id) {
            BridgeState::ConfirmedOnce
        } else if self.document.dialog(id).is_some_and(Dialog::is_visible) {
            BridgeState::Shown
        } else {
            BridgeState::Idle
        }
    }

    /// Forget an element leaving the page: hide and drop its dialog.
    /// Returns false if nothing was cached for it.
    pub fn evict(&mut self, element: &ElementId) -> bool {
        let Some(entry) = self.cache.evict(element) else {
            return false;
        };
        self.hide(&entry.dialog);
        self.native.guard_mut().release(&entry.dialog);
        self.document.remove(&entry.dialog);
        log::debug!("Evicted dialog {} of element '{}'", entry.dialog, element);
        true
    }
}
