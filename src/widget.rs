//! Interface to the dialog widget that actually shows and hides dialogs.
//!
//! The widget owns the visual side effects of a transition: it inserts and
//! removes backdrops and toggles the body "modal open" state on the
//! [`Document`]. Transitions are asynchronous; the host reports their end
//! through [`crate::modal::ConfirmModal::dispatch`].

use crate::dialog::DialogId;
use crate::document::Document;
use crate::error::InitError;
use crate::options::Backdrop;
use once_cell::sync::Lazy;
use regex::Regex;

static MAJOR_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d)\.").expect("valid version regex"));

/// Toggles passed to the widget on spawn. `None` keeps the widget's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowConfig {
    pub backdrop: Option<Backdrop>,
    pub keyboard: Option<bool>,
    pub show: Option<bool>,
}

/// What the host could detect about the widget at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProbe {
    pub loaded: bool,
    pub constructor: bool,
    pub version: Option<String>,
}

impl WidgetProbe {
    /// Probe result for a fully present widget of the given version
    pub fn available(version: impl Into<String>) -> Self {
        Self {
            loaded: true,
            constructor: true,
            version: Some(version.into()),
        }
    }

    /// Major version of the widget, or the load-time failure that prevents using it
    pub fn major_version(&self) -> Result<u32, InitError> {
        if !self.loaded {
            return Err(InitError::WidgetMissing);
        }
        if !self.constructor {
            return Err(InitError::ConstructorMissing);
        }
        let version = self.version.as_deref().ok_or(InitError::VersionMissing)?;

        MAJOR_VERSION
            .captures(version)
            .and_then(|caps| caps[1].parse().ok())
            .ok_or_else(|| InitError::UnrecognizedVersion(version.to_string()))
    }
}

/// Dialog show/hide capability
pub trait DialogWidget {
    fn probe(&self) -> WidgetProbe;

    /// Start showing `dialog`. Completion is reported as a shown lifecycle event.
    fn show(&mut self, document: &mut Document, dialog: &DialogId, config: &ShowConfig);

    /// Start hiding `dialog`. Completion is reported as a hidden lifecycle event.
    fn hide(&mut self, document: &mut Document, dialog: &DialogId);
}
