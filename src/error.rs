//! Error types for the style engine.

use thiserror::Error;

/// Errors raised by the configuration model and the editing session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Loading the configuration failed for a reason unrelated to line syntax.
    ///
    /// The session drops its model and keeps the raw text for display.
    #[error("failed to load style configuration: {0}")]
    Load(String),

    /// A fully-qualified key named a section that is not one of the four.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// A fully-qualified key was not of the form `Section.Key`.
    #[error("malformed key '{0}', expected Section.Key")]
    MalformedKey(String),

    /// An edit was attempted while no model is loaded.
    #[error("no style configuration is loaded")]
    NoModel,
}

/// Errors from the palette generation collaborator.
///
/// These never touch the session model; they are shown inside the palette
/// dialog only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("please enter a description for the theme")]
    EmptyPrompt,

    #[error("palette response was not a JSON object of strings: {0}")]
    InvalidResponse(String),

    #[error("palette generation failed: {0}")]
    Generator(String),

    /// The palette arrived while the session had no model to merge it into.
    #[error("no style configuration is loaded to apply the palette to")]
    NoModel,
}
