//! Schema Validator subsystem for stockdesk
//!
//! Defines the Product shape and validates untyped data in both directions:
//! form input before submission, and API payloads before acceptance into
//! store state.
//!
//! # Design Principles
//!
//! - Validation gates every entry into store state
//! - No coercion, no defaults: a JSON string "5" is not a number
//! - All failing fields are reported at once, not just the first
//! - Deterministic, pure validation with no side effects

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, ValidationError, ValidationResult};
pub use types::{Product, ProductPatch};
pub use validator::validate;
