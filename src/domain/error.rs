use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for modprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The modules directory does not exist.
    #[error("Modules directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Single-module lookup failed.
    #[error("Module '{0}' not found")]
    ModuleNotFound(String),

    /// Reading or writing a specific file failed.
    #[error("I/O failure at {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Starter modules would overwrite an existing modules directory.
    #[error("Modules directory already exists and is not empty: {}", .0.display())]
    ModulesDirectoryExists(PathBuf),

    /// Configuration value rejected by validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Caller supplied a selection that cannot be resolved.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Text-generation API request failed.
    ///
    /// `status` is the HTTP status when the service answered; `retry_after`
    /// carries the service's own backoff hint.
    #[error("Generation API error: {message}")]
    GenerationApi { message: String, status: Option<u16>, retry_after: Option<Duration> },

    /// The generation service could not be reached (timeout or refused connection).
    #[error("Generation service unreachable: {0}")]
    GenerationUnavailable(String),
}

impl AppError {
    pub fn io_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::IoFailure { path: path.into(), source }
    }

    pub fn generation(message: impl Into<String>, status: Option<u16>) -> Self {
        AppError::GenerationApi { message: message.into(), status, retry_after: None }
    }

    /// Whether a generation failure may succeed when sent again.
    ///
    /// True for an unreachable service and for 408, 429 and 5xx answers.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::GenerationUnavailable(_) => true,
            AppError::GenerationApi { status: Some(code), .. } => {
                matches!(*code, 408 | 429) || *code >= 500
            }
            _ => false,
        }
    }
}
