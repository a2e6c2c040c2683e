//! Stacking order across simultaneously visible dialogs.

use crate::dialog::DialogId;
use crate::document::Document;

/// Assigns each newly built dialog a stacking value above every visible one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndexArbiter {
    base: i32,
}

impl ZIndexArbiter {
    pub fn new(base: i32) -> Self {
        Self { base }
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    /// One above the highest of the base and every visible dialog but `excluding`
    pub fn compute(&self, document: &Document, excluding: &DialogId) -> i32 {
        let highest = document
            .visible_dialogs()
            .filter(|dialog| dialog.id != *excluding)
            .map(|dialog| dialog.z_index)
            .fold(self.base, i32::max);

        highest.saturating_add(1)
    }
}
