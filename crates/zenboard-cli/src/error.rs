//! CLI-specific error types and mappings.
//!
//! Errors from the library crates are folded into [`CliError`], which knows
//! its process exit code.

use rustyline::error::ReadlineError;
use thiserror::Error;
use zenboard_core::{CoachError, SettingsError};
use zenboard_genai::GenAiError;
use zenboard_voice::ExerciseError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure inside the application core.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Terminal IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<ExerciseError> for CliError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::InvalidTimeline(e) => Self::Arguments(e.to_string()),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<CoachError> for CliError {
    fn from(err: CoachError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<GenAiError> for CliError {
    fn from(err: GenAiError) -> Self {
        Self::Config(format!("Gemini client: {err}"))
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
