//! In-memory model of the page body as far as dialogs are concerned:
//! appended dialogs in insertion order, backdrop elements, and the body's
//! "modal open" state.

use crate::dialog::{Dialog, DialogId};

/// Identity of a backdrop element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackdropId(u64);

/// Backdrop element dimming the page behind a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackdropElement {
    pub id: BackdropId,
    pub fade: bool,
    /// Dialog the backdrop was inserted after, if any
    pub after: Option<DialogId>,
}

#[derive(Debug, Default)]
pub struct Document {
    dialogs: Vec<Dialog>,
    backdrops: Vec<BackdropElement>,
    modal_open: bool,
    next_backdrop: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dialog to the body
    pub fn append(&mut self, dialog: Dialog) {
        self.dialogs.push(dialog);
    }

    /// Remove a dialog from the body entirely
    pub fn remove(&mut self, id: &DialogId) -> Option<Dialog> {
        let index = self.dialogs.iter().position(|d| d.id == *id)?;
        Some(self.dialogs.remove(index))
    }

    pub fn dialog(&self, id: &DialogId) -> Option<&Dialog> {
        self.dialogs.iter().find(|d| d.id == *id)
    }

    pub fn dialog_mut(&mut self, id: &DialogId) -> Option<&mut Dialog> {
        self.dialogs.iter_mut().find(|d| d.id == *id)
    }

    pub fn contains(&self, id: &DialogId) -> bool {
        self.dialog(id).is_some()
    }

    /// All appended dialogs in insertion order
    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    pub fn visible_dialogs(&self) -> impl Iterator<Item = &Dialog> {
        self.dialogs.iter().filter(|d| d.is_visible())
    }

    /// Whether a dialog other than `id` is visible
    pub fn any_visible_except(&self, id: &DialogId) -> bool {
        self.visible_dialogs().any(|d| d.id != *id)
    }

    pub fn backdrops(&self) -> &[BackdropElement] {
        &self.backdrops
    }

    pub fn insert_backdrop(&mut self, after: Option<&DialogId>, fade: bool) -> BackdropId {
        let id = BackdropId(self.next_backdrop);
        self.next_backdrop += 1;
        self.backdrops.push(BackdropElement {
            id,
            fade,
            after: after.cloned(),
        });
        id
    }

    /// Remove the most recently inserted backdrop
    pub fn remove_last_backdrop(&mut self) -> Option<BackdropElement> {
        self.backdrops.pop()
    }

    pub fn remove_backdrop(&mut self, id: BackdropId) -> Option<BackdropElement> {
        let index = self.backdrops.iter().position(|b| b.id == id)?;
        Some(self.backdrops.remove(index))
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    /// Put the body back into the modal-open state if some dialog is still
    /// visible. Returns whether the state had to be restored.
    pub fn restore_modal_open(&mut self) -> bool {
        if !self.modal_open && self.visible_dialogs().next().is_some() {
            self.modal_open = true;
            return true;
        }
        false
    }
}
