//! Remote collaborator interface
//!
//! The product API is consumed through the [`ProductApi`] trait so the
//! store can be exercised with a scripted collaborator in tests. The
//! production implementation is [`HttpApi`], a reqwest client speaking the
//! collaborator's `{statusCode, data, message}` envelope protocol.
//!
//! The client deliberately does not interpret the envelope: checking
//! `statusCode` and validating `data` is the store's job, so unvalidated
//! data never travels past the API boundary unnoticed.

mod client;
mod config;
mod envelope;
mod errors;

pub use client::HttpApi;
pub use config::ApiConfig;
pub use envelope::Envelope;
pub use errors::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::schema::{Product, ProductPatch};

/// The remote collaborator, seen as four operations.
///
/// Implementations return the raw response envelope on any reply the
/// collaborator actually produced, and [`ApiError`] only when no usable
/// envelope came back.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// GET the full product collection
    async fn fetch_all(&self) -> ApiResult<Envelope>;

    /// POST a new product for creation
    async fn create(&self, product: &Product) -> ApiResult<Envelope>;

    /// PUT a partial update for the product with the given serial number
    async fn update(&self, serial: &str, patch: &ProductPatch) -> ApiResult<Envelope>;

    /// DELETE the product with the given serial number
    async fn delete(&self, serial: &str) -> ApiResult<Envelope>;
}
