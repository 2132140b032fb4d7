//! Typed errors for values that come from outside the process: CLI arguments,
//! stored preferences and navigation paths.

use thiserror::Error;

/// A closed-set value could not be parsed from its string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown language code: {0}")]
    Language(String),

    #[error("unknown theme: {0} (expected \"dark\" or \"light\")")]
    Theme(String),

    #[error("unknown font size: {0} (expected \"sm\", \"base\" or \"lg\")")]
    FontSize(String),

    #[error("unknown share platform: {0}")]
    Platform(String),

    #[error("unknown detail section: {0}")]
    Section(String),
}

/// A navigation path did not match any known view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("path must start with '/': {0}")]
    NotAbsolute(String),

    #[error("no view is registered for path {0}")]
    UnknownPath(String),

    #[error("project path is missing an id: {0}")]
    MissingId(String),
}
