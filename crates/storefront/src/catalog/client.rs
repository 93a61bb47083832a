//! HTTP client for the remote product catalog.
//!
//! One read operation: GET the products resource. Success means a 2xx
//! response whose body parses as the product schema; anything else is a
//! [`CatalogError`]. There is no retry policy — a failed load is terminal
//! for that attempt and the caller re-invokes the load to recover.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use papershop_core::Product;

use crate::config::StorefrontConfig;

/// Errors from a catalog load attempt.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure (connection, TLS, timeout).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog responded with status {0}")]
    Status(u16),

    /// The response body did not parse as the product schema.
    #[error("catalog response did not parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the remote product catalog.
///
/// Cheaply cloneable via `Arc`. Requests carry the configured timeout so a
/// hung catalog cannot stall the app indefinitely.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

#[derive(Debug)]
struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.catalog_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.catalog_url.as_str().to_owned(),
            }),
        })
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-2xx status, or a
    /// body that does not parse as the product schema.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.inner.client.get(&self.inner.endpoint).send().await?;

        let status = response.status();

        // Read the body as text first for better parse diagnostics.
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|err| {
            tracing::error!(
                error = %err,
                body = %body.chars().take(200).collect::<String>(),
                "failed to parse catalog response"
            );
            err
        })?;

        tracing::debug!(count = products.len(), "catalog fetch complete");
        Ok(products)
    }
}
