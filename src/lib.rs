//! confirm-modal - templated confirmation dialogs for flagged actions
//!
//! This library intercepts the confirm step of an action framework for
//! elements flagged as needing confirmation and replaces the native prompt
//! with a configurable dialog: per-element text and labels, an optional typed
//! verification, stacking across open dialogs, and a one-shot hand-back to the
//! framework once the user commits.
//!
//! # Modules
//!
//! * [`modal`] - The [`ConfirmModal`] service tying everything together
//! * [`settings`] - Dialog defaults and their override lifecycle
//! * [`builder`] - Dialog construction from options and settings
//! * [`verification`] - Typed-confirmation gate for the commit control
//! * [`bridge`] - Action framework protocol and native-confirm override
//! * [`ui`] - Terminal rendering and key handling

/// Dialog construction
pub mod builder;

/// Action framework protocol types
pub mod bridge;

/// Per-element dialog cache
pub mod cache;

/// Configuration module for loading settings from files
pub mod config;

/// Built-in defaults and markup names
pub mod constants;

/// Dialog descriptor and live state
pub mod dialog;

/// Page model holding dialogs and backdrops
pub mod document;

/// Triggering elements and selectors
pub mod element;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// HTML rendering
pub mod markup;

/// Dialog service
pub mod modal;

/// Per-build dialog options
pub mod options;

/// Settings store
pub mod settings;

/// Stacking order
pub mod stacking;

/// Terminal user interface rendering
pub mod ui;

/// Verification gate
pub mod verification;

/// Dialog widget interface
pub mod widget;

pub use bridge::{ActionFramework, BridgeState, ConfirmDecision};
pub use dialog::{Control, Dialog, DialogId};
pub use element::{Element, ElementId};
pub use error::InitError;
pub use modal::{ConfirmModal, Interaction, LifecycleEvent};
pub use options::DialogOptions;
pub use settings::{Settings, SettingsPatch};
pub use widget::{DialogWidget, ShowConfig, WidgetProbe};
