//! Client-side product state and its four operations
//!
//! Each operation sets `loading = true, error = None`, awaits the
//! collaborator once, and sets `loading = false` before returning. None of
//! them return `Err`; validation, application, and transport failures all
//! land in the `error` field for the caller to present.
//!
//! Operations take `&mut self`: the store is built for one logical thread
//! of execution and provides no mutual exclusion. Callers that want
//! overlapping operations must serialize them (the CLI runs one operation
//! per invocation; a UI is expected to disable submission while `loading`
//! is set).

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{ApiError, Envelope, ProductApi};
use crate::schema::{validate, Product, ProductPatch};

const FAILED_LOAD: &str = "Failed to load products";
const FAILED_ADD: &str = "Failed to add product";
const FAILED_UPDATE: &str = "Failed to update product";
const FAILED_DELETE: &str = "Failed to delete product";

/// Client-side store holding the known products.
///
/// Generic over the collaborator so tests can script responses without a
/// network.
#[derive(Debug)]
pub struct ProductStore<A: ProductApi> {
    api: A,
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

impl<A: ProductApi> ProductStore<A> {
    /// Create an empty store backed by the given collaborator
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// The collaborator behind this store
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The validated products, in collaborator order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True while an operation is awaiting the collaborator
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed operation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the full collection and replaces `products` wholesale.
    ///
    /// On a non-200 envelope, a validation failure, or a transport
    /// failure, `products` is left untouched and `error` is set.
    pub async fn load(&mut self) {
        self.begin();
        let outcome = self.api.fetch_all().await;
        match outcome {
            Ok(envelope) if envelope.is_success(200) => {
                match decode_collection(&envelope.data) {
                    Ok(products) => {
                        debug!(count = products.len(), "loaded product collection");
                        self.products = products;
                    }
                    Err(message) => self.error = Some(message),
                }
            }
            Ok(envelope) => self.fail_envelope(&envelope, FAILED_LOAD),
            Err(err) => self.fail_transport(err, FAILED_LOAD),
        }
        self.loading = false;
    }

    /// Sends a candidate for creation; on a 201 envelope, validates the
    /// returned representation and appends it to `products`.
    pub async fn add(&mut self, candidate: Product) {
        self.begin();
        let outcome = self.api.create(&candidate).await;
        match outcome {
            Ok(envelope) if envelope.is_success(201) => match validate(&envelope.data) {
                Ok(product) => {
                    debug!(serial = %product.product_serial_number, "product added");
                    self.products.push(product);
                }
                Err(err) => self.error = Some(err.to_string()),
            },
            Ok(envelope) => self.fail_envelope(&envelope, FAILED_ADD),
            Err(err) => self.fail_transport(err, FAILED_ADD),
        }
        self.loading = false;
    }

    /// Sends a partial update keyed by serial number; on a 200 envelope,
    /// validates the returned full representation and replaces, in place,
    /// the element whose serial equals `id`.
    ///
    /// When no element matches `id`, nothing is replaced and the
    /// operation still counts as a success. Inherited behavior; pinned by
    /// `update_without_matching_serial_is_a_noop` rather than changed.
    pub async fn update(&mut self, id: &str, patch: ProductPatch) {
        self.begin();
        let outcome = self.api.update(id, &patch).await;
        match outcome {
            Ok(envelope) if envelope.is_success(200) => match validate(&envelope.data) {
                Ok(product) => {
                    debug!(serial = %id, "product updated");
                    if let Some(slot) = self
                        .products
                        .iter_mut()
                        .find(|p| p.product_serial_number == id)
                    {
                        *slot = product;
                    }
                }
                Err(err) => self.error = Some(err.to_string()),
            },
            Ok(envelope) => self.fail_envelope(&envelope, FAILED_UPDATE),
            Err(err) => self.fail_transport(err, FAILED_UPDATE),
        }
        self.loading = false;
    }

    /// Requests deletion by serial number; on a 200 envelope, removes
    /// every element with that serial. The envelope's `data` is ignored.
    pub async fn delete(&mut self, id: &str) {
        self.begin();
        let outcome = self.api.delete(id).await;
        match outcome {
            Ok(envelope) if envelope.is_success(200) => {
                debug!(serial = %id, "product deleted");
                self.products.retain(|p| p.product_serial_number != id);
            }
            Ok(envelope) => self.fail_envelope(&envelope, FAILED_DELETE),
            Err(err) => self.fail_transport(err, FAILED_DELETE),
        }
        self.loading = false;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Collaborator replied, but its envelope signals failure
    fn fail_envelope(&mut self, envelope: &Envelope, fallback: &str) {
        self.error = Some(envelope.message_or(fallback).to_string());
    }

    /// The call itself failed; the transport detail goes to the log, the
    /// user sees either the collaborator's message or the generic fallback
    fn fail_transport(&mut self, err: ApiError, fallback: &str) {
        match err {
            ApiError::Application(message) => self.error = Some(message),
            ApiError::Transport(detail) => {
                warn!(%detail, "collaborator call failed");
                self.error = Some(fallback.to_string());
            }
        }
    }
}

/// Validates every element of a collection payload.
///
/// Any failing element rejects the whole collection; partially validated
/// loads never reach store state.
fn decode_collection(data: &Value) -> Result<Vec<Product>, String> {
    let items = data
        .as_array()
        .ok_or_else(|| "Expected an array of products".to_string())?;

    let mut products = Vec::with_capacity(items.len());
    for item in items {
        products.push(validate(item).map_err(|err| err.to_string())?);
    }
    Ok(products)
}
