use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The optimizer core only ever raises `InvalidInput` and `UnknownTool`; the
/// remaining variants belong to loading the tool registry and lexicon files.
#[derive(Debug, Error)]
pub enum AppError {
    /// The prompt was empty or whitespace-only.
    #[error("Invalid input: prompt must not be empty")]
    InvalidInput,

    /// No strategy is registered under the requested tool identifier.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Represents configuration-related errors (e.g., a malformed registry file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid tool limits).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::InvalidInput => AppError::InvalidInput,
            AppError::UnknownTool(s) => AppError::UnknownTool(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
