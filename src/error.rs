use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefangError {
    #[error("Cannot read source file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file {} is not valid UTF-8 text", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Interpreter '{command}' could not be started: {source}")]
    InterpreterUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interpreter execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Interpreter '{command}' produced output that is not valid UTF-8 text")]
    InvalidOutput { command: String },

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),
}

/// Coarse grouping of [`DefangError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InputAccess,
    OutputWrite,
    Interpreter,
    Usage,
}

impl DefangError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DefangError::SourceUnreadable { .. } | DefangError::InvalidEncoding { .. } => {
                ErrorCategory::InputAccess
            }
            DefangError::WriteFailed { .. } => ErrorCategory::OutputWrite,
            DefangError::InterpreterUnavailable { .. }
            | DefangError::ExecutionFailed(_)
            | DefangError::InvalidOutput { .. } => ErrorCategory::Interpreter,
            DefangError::InvalidArguments(_) => ErrorCategory::Usage,
        }
    }
}
