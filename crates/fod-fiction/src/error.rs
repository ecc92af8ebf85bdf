//! Error types for the fiction driver.

use fod_core::CoreError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while driving the story or the shop.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A command needed a numeric index and got something else.
    #[error("usage: {verb} <index> (got '{arg}')")]
    InvalidIndexFormat {
        /// The command verb.
        verb: String,
        /// The argument that failed to parse, empty when missing.
        arg: String,
    },

    /// A save or load callback failed.
    #[error("{0}")]
    HandlerFailure(String),

    /// Input that is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Standard input was closed.
    #[error("end of input")]
    EndOfInput,

    /// A console reported that the player interrupted it.
    #[error("interrupted")]
    Interrupted,

    /// The terminal could not be read or written.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// Shop or persistence error.
    #[error("{0}")]
    Core(#[from] CoreError),
}

impl FictionError {
    /// Whether this error should end the session rather than be reported.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, Self::EndOfInput | Self::Interrupted)
    }
}
