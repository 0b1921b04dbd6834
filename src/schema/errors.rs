//! Schema validation error types
//!
//! A failed validation reports every failing field, not just the first,
//! so a form can surface all problems in one pass.

use std::fmt;

/// Result type for schema validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One failing field with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire-format field name (e.g. "productSerialNumber")
    pub field: String,
    /// Reason the field failed (e.g. "Stock must be at least 1")
    pub reason: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// A candidate failed shape or range checks.
///
/// Holds at least one [`FieldIssue`]; `Display` joins them so the whole
/// error reads as a single message when folded into the store's error
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create a validation error from collected issues.
    ///
    /// Callers must pass a non-empty list; an issue-free candidate is a
    /// success, not an empty error.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// A single-issue error for candidates that are not objects at all
    pub fn not_an_object(actual: &str) -> Self {
        Self::new(vec![FieldIssue::new(
            "$root",
            format!("Expected an object, got {}", actual),
        )])
    }

    /// Every failing field, in declaration order
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns true if some issue names the given field
    pub fn names_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
