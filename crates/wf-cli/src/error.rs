//! Console error types

use wf_core::ControllerError;

/// Errors raised while running a console session
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("wrong number of arguments")]
    Usage,

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("'{0}' is not a valid index")]
    InvalidIndex(String),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

impl CliError {
    /// Whether the session must stop; every other error is reported and skipped
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io(_))
    }
}
