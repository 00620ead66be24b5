//! RPC client for the product service.
//!
//! Posts a [`ProductCall`] to the service endpoint using [`reqwest`] and
//! hands back the raw response body. Parsing is left to the caller so a
//! body that fails to convert can still be preserved verbatim.

use catalog_core::rpc::ProductCall;

/// Errors from the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Product service error ({status}): {body}")]
    Rpc {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for a single product service endpoint.
pub struct CatalogClient {
    client: reqwest::Client,
    service_url: String,
}

impl CatalogClient {
    /// Create a client for the endpoint at `service_url`,
    /// e.g. `http://host:3000/ProductService.svc`.
    pub fn new(service_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            service_url,
        }
    }

    /// Endpoint this client posts to.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Call `GetAllProducts` and return the raw response body.
    pub async fn get_all_products(&self) -> Result<String, ClientError> {
        self.invoke(&ProductCall::GetAllProducts).await
    }

    /// Send one call and return the body of a successful response.
    pub async fn invoke(&self, call: &ProductCall) -> Result<String, ClientError> {
        let response = self.client.post(&self.service_url).json(call).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Rpc {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
