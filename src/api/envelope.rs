//! Response envelope
//!
//! Every collaborator response is expected to follow the shape
//! `{ statusCode: number, data: T, message?: string }`. `data` stays an
//! untyped [`Value`] here; the store validates it before anything enters
//! state.

use serde::Deserialize;
use serde_json::Value;

/// The collaborator's response wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Application-level status, distinct from the HTTP status
    pub status_code: u16,
    /// Payload; JSON null when the collaborator sends none
    #[serde(default)]
    pub data: Value,
    /// Human-readable message, usually present on failures
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Returns true if the envelope signals the expected success code
    pub fn is_success(&self, expected: u16) -> bool {
        self.status_code == expected
    }

    /// The collaborator-supplied message, or the given fallback
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}
