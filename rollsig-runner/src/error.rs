//! Run-level error type composed from the core module errors.

use thiserror::Error;

use rollsig_core::{ConfigError, LoadError, SignalError, ValidationError};

/// Errors from the runner. Display strings are the messages written to the
/// error record, so every variant forwards its source's message unchanged.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Signal(#[from] SignalError),
    #[error("Failed to write output: {0}")]
    Output(String),
}

/// Failure taxonomy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigNotFound,
    ConfigParseError,
    ConfigFieldMissing,
    InputNotFound,
    EmptyInput,
    MissingColumn,
    ParseError,
    InvalidWindow,
    OutputWriteError,
}

impl RunError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::Config(ConfigError::NotFound { .. }) => ErrorKind::ConfigNotFound,
            RunError::Config(ConfigError::Parse(_)) => ErrorKind::ConfigParseError,
            RunError::Config(ConfigError::FieldMissing(_)) => ErrorKind::ConfigFieldMissing,
            RunError::Load(LoadError::NotFound { .. }) => ErrorKind::InputNotFound,
            RunError::Load(LoadError::Parse(_)) => ErrorKind::ParseError,
            RunError::Validation(ValidationError::EmptyInput) => ErrorKind::EmptyInput,
            RunError::Validation(ValidationError::MissingColumn(_)) => ErrorKind::MissingColumn,
            RunError::Validation(ValidationError::NonNumericColumn(_)) => ErrorKind::ParseError,
            RunError::Signal(SignalError::InvalidWindow(_)) => ErrorKind::InvalidWindow,
            RunError::Output(_) => ErrorKind::OutputWriteError,
        }
    }
}
