//! stockdesk - a typed client-side store for a product-management API
//!
//! The crate mediates between user input and a remote product API:
//! candidates are schema-validated before submission, collaborator
//! payloads are schema-validated before they enter store state, and every
//! failure is folded into the store's error field instead of propagating.

pub mod api;
pub mod cli;
pub mod schema;
pub mod store;

pub use api::{ApiConfig, HttpApi, ProductApi};
pub use schema::{validate, Product, ProductPatch, ValidationError};
pub use store::ProductStore;
