//! reqwest-based collaborator client
//!
//! Endpoint table:
//!
//! | operation | method | path                     |
//! |-----------|--------|--------------------------|
//! | fetch_all | GET    | /api/products            |
//! | create    | POST   | /api/products/create     |
//! | update    | PUT    | /api/products/{id}       |
//! | delete    | DELETE | /api/products/{id}       |
//!
//! No retries, no timeout, no cancellation: an in-flight call awaits the
//! collaborator for as long as the transport allows.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::schema::{Product, ProductPatch};

use super::config::ApiConfig;
use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use super::ProductApi;

/// HTTP implementation of [`ProductApi`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    /// Create a client against the given configuration
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Decode a response into the collaborator's envelope.
    ///
    /// A 2xx response must carry a well-formed envelope. On an error
    /// status, a decodable envelope with a message becomes
    /// [`ApiError::Application`]; everything else is a transport failure.
    async fn decode(response: reqwest::Response) -> ApiResult<Envelope> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|err| {
                warn!(%status, %err, "response body is not an envelope");
                ApiError::Transport(format!("malformed envelope: {}", err))
            });
        }

        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => match envelope.message {
                Some(message) => Err(ApiError::Application(message)),
                None => Err(ApiError::Transport(format!("HTTP {}", status))),
            },
            Err(_) => Err(ApiError::Transport(format!("HTTP {}", status))),
        }
    }
}

#[async_trait]
impl ProductApi for HttpApi {
    async fn fetch_all(&self) -> ApiResult<Envelope> {
        let url = self.config.endpoint("/api/products");
        debug!(%url, "GET product collection");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, product: &Product) -> ApiResult<Envelope> {
        let url = self.config.endpoint("/api/products/create");
        debug!(%url, serial = %product.product_serial_number, "POST new product");
        let response = self.client.post(&url).json(product).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, serial: &str, patch: &ProductPatch) -> ApiResult<Envelope> {
        let url = self.config.endpoint(&format!("/api/products/{}", serial));
        debug!(%url, %serial, "PUT product update");
        let response = self.client.put(&url).json(patch).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, serial: &str) -> ApiResult<Envelope> {
        let url = self.config.endpoint(&format!("/api/products/{}", serial));
        debug!(%url, %serial, "DELETE product");
        let response = self.client.delete(&url).send().await?;
        Self::decode(response).await
    }
}
