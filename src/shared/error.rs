use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed diagnostic printed to stdout when either output file cannot be opened.
pub const OPEN_FAILURE_DIAGNOSTIC: &str = "error: could not open output files";

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Both files written and the read-back reported
    Success = 0,
    /// At least one output file could not be opened; nothing was written
    OpenFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Any other failure (write, seek, read, config, working directory)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<DemoError>() {
            Some(DemoError::OpenAborted { .. }) => ExitCode::OpenFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OpenFailed => write!(f, "Open Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while running the write/rewind/read sequence.
///
/// Each I/O variant names the file involved so the user can tell which
/// step failed on which path.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to open file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    Open { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}")]
    Write { path: PathBuf, details: String },

    #[error("Failed to rewind file: {path}\nDetails: {details}")]
    Seek { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable")]
    Read { path: PathBuf, details: String },

    /// Raised when either open fails; no writes have happened.
    #[error("Aborted before writing: {count} of 2 output file(s) could not be opened\n{details}")]
    OpenAborted { count: usize, details: String },

    #[error("Invalid working directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --dir")]
    InvalidWorkingDir { path: PathBuf, reason: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
