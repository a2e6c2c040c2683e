//! Per-element dialog cache.
//!
//! A dialog is built the first time its element triggers and reused for the
//! rest of the element's life. Attributes changed after that first build have
//! no effect; the element snapshot taken then is what the commit control
//! re-activates.

use crate::dialog::DialogId;
use crate::element::{Element, ElementId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Element as it looked when its dialog was built
    pub element: Element,
    pub dialog: DialogId,
}

#[derive(Debug, Default)]
pub struct ElementModalCache {
    entries: HashMap<ElementId, CacheEntry>,
}

impl ElementModalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached dialog for `element`, building it with `build` on first use
    pub fn get_or_build(&mut self, element: &Element, build: impl FnOnce(&Element) -> DialogId) -> DialogId {
        if let Some(entry) = self.entries.get(&element.id) {
            return entry.dialog.clone();
        }

        let dialog = build(element);
        log::debug!("Caching dialog {} for element '{}'", dialog, element.id);
        self.entries.insert(
            element.id.clone(),
            CacheEntry {
                element: element.clone(),
                dialog: dialog.clone(),
            },
        );
        dialog
    }

    pub fn get(&self, element: &ElementId) -> Option<&CacheEntry> {
        self.entries.get(element)
    }

    pub fn dialog_for(&self, element: &ElementId) -> Option<&DialogId> {
        self.entries.get(element).map(|entry| &entry.dialog)
    }

    /// Drop the entry for an element leaving the page
    pub fn evict(&mut self, element: &ElementId) -> Option<CacheEntry> {
        self.entries.remove(element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
