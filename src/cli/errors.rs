//! CLI-specific error types
//!
//! Every variant ends the process with a nonzero exit code; the message
//! is what the user sees on stderr.

use thiserror::Error;

use crate::schema::ValidationError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Form input failed schema validation before submission
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ValidationError),

    /// Category outside the fixed option set offered by the UI
    #[error("unknown category '{0}' (expected one of: {1})")]
    UnknownCategory(String, String),

    /// A store operation ended with its error field set
    #[error("{0}")]
    Operation(String),
}
