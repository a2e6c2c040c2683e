//! Error types for widget detection and selector parsing.

use crate::constants::{ERROR_WIDGET_CONSTRUCTOR_MISSING, ERROR_WIDGET_MISSING, ERROR_WIDGET_VERSION_MISSING};

/// Load-time failures. Any of these means the dialog widget cannot be driven at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("{}", ERROR_WIDGET_MISSING)]
    WidgetMissing,

    #[error("{}", ERROR_WIDGET_CONSTRUCTOR_MISSING)]
    ConstructorMissing,

    #[error("{}", ERROR_WIDGET_VERSION_MISSING)]
    VersionMissing,

    #[error("Cannot identify Bootstrap version. Version string: {0}")]
    UnrecognizedVersion(String),
}

/// Errors raised while parsing a confirmable-element selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unterminated attribute filter in selector '{0}'")]
    Unterminated(String),

    #[error("Invalid attribute filter '{filter}' in selector '{selector}'")]
    InvalidFilter { selector: String, filter: String },
}
