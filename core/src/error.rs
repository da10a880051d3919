//! Conditions that halt the inspection pipeline.

use thiserror::Error;

/// Errors raised while tokenizing, resolving, or checking a command line.
///
/// Each variant is a user-facing condition rather than a crash: the pipeline
/// stops at the first one and nothing is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The command text was empty or whitespace-only.
    #[error("no command found in the supplied text")]
    NoCommandFound,
    /// The resolver has no metadata for the command.
    #[error("command not found: {0}")]
    CommandNotFound(String),
    /// Validation was requested but the text contains no `-Name` tokens.
    #[error("no parameters found in command text: {0}")]
    NoParametersFound(String),
}

/// Convenience alias for results with [`SyntaxError`].
pub type Result<T> = std::result::Result<T, SyntaxError>;
