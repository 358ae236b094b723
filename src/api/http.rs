//! # HTTP API
//!
//! [`StorefrontApi`] over `reqwest`. Each call is a single request with no retries;
//! a non-success status is turned into [`ApiError::Status`] before the body is read.

use crate::api::{ApiError, StorefrontApi};
use crate::config::Config;
use crate::model::{MenuItem, OrderReceipt, OrderSubmission, Restaurant, RestaurantId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Header carrying the client-generated key for order deduplication.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Creates a client for the backend at `base_url` (e.g. `http://localhost:8000`).
    ///
    /// `timeout` bounds every request end to end; `None` waits indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::transport("client setup", e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.backend_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The id goes in as a single percent-encoded path segment.
    fn menu_url(&self, restaurant_id: &RestaurantId) -> Result<Url, ApiError> {
        let endpoint = "GET /api/restaurants/{id}/menu";
        let mut url = Url::parse(&self.url("/api/restaurants"))
            .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::transport(endpoint, "base URL cannot carry a path"))?
            .push(restaurant_id.as_str())
            .push("menu");
        Ok(url)
    }

    async fn send(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;

        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "Response");
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ApiError::Decode {
                    endpoint: endpoint.to_string(),
                    message: e.to_string(),
                }
            } else {
                ApiError::transport(endpoint, e.to_string())
            }
        })
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    #[instrument(skip(self))]
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let endpoint = "GET /api/restaurants";
        let response = self
            .send(endpoint, self.client.get(self.url("/api/restaurants")))
            .await?;
        let restaurants: Option<Vec<Restaurant>> = Self::decode(endpoint, response).await?;
        Ok(restaurants.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn seed(&self) -> Result<(), ApiError> {
        self.send("POST /api/seed", self.client.post(self.url("/api/seed")))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self), fields(%restaurant_id))]
    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuItem>, ApiError> {
        let endpoint = "GET /api/restaurants/{id}/menu";
        let url = self.menu_url(restaurant_id)?;
        let response = self.send(endpoint, self.client.get(url)).await?;
        let items: Option<Vec<MenuItem>> = Self::decode(endpoint, response).await?;
        Ok(items.unwrap_or_default())
    }

    #[instrument(skip(self, submission), fields(key = %submission.idempotency_key))]
    async fn place_order(&self, submission: &OrderSubmission) -> Result<OrderReceipt, ApiError> {
        let endpoint = "POST /api/orders";
        debug!(request = ?submission.request, "Submitting order");
        let request = self
            .client
            .post(self.url("/api/orders"))
            .header(
                IDEMPOTENCY_KEY_HEADER,
                submission.idempotency_key.to_string(),
            )
            .json(&submission.request);
        let response = self.send(endpoint, request).await?;
        Self::decode(endpoint, response).await
    }
}
