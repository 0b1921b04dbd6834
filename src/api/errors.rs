//! # API Errors
//!
//! Error types for the collaborator client.
//!
//! Two kinds are distinguished at this boundary:
//! - `Application`: the collaborator replied, and its reply carried a
//!   message explaining the failure. Surfaced to the user verbatim.
//! - `Transport`: the call itself failed (connection refused, body not an
//!   envelope, error status with no message). The store replaces this
//!   with a per-operation fallback string; the detail only reaches logs.

use thiserror::Error;

/// Result type for collaborator calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of a collaborator call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The collaborator responded with a failure envelope carrying a message
    #[error("{0}")]
    Application(String),

    /// The call failed before a usable envelope came back
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns true for transport-level failures
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_displays_message_only() {
        let err = ApiError::Application("Serial number already exists".into());
        assert_eq!(format!("{}", err), "Serial number already exists");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_error_is_prefixed() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(format!("{}", err), "transport failure: connection refused");
        assert!(err.is_transport());
    }
}
