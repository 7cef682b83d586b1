use crate::api::error::ApiError;
use crate::api::traits::BookingApi;
use crate::api::types::ClientConfig;
use crate::models::{CartItem, CartItemRequest, Offer, SearchCriteria};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-backed Booking API client
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map the status uniformly, then decode the JSON body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable response body: {}", e);
            ApiError::InvalidResponse(e.to_string())
        })
    }

    /// Non-2xx means failure, whatever the exact status
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Backend returned {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Offer>, ApiError> {
        debug!("POST /search/ for {}", criteria.city);
        let response = self
            .client
            .post(self.url("/search/"))
            .json(criteria)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        debug!("GET /cart/");
        let response = self.client.get(self.url("/cart/")).send().await?;
        Self::decode(response).await
    }

    async fn add_to_cart(&self, item: &CartItemRequest) -> Result<CartItem, ApiError> {
        debug!("POST /cart/add for hotel {}", item.hotel_id);
        let response = self
            .client
            .post(self.url("/cart/add"))
            .json(item)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn remove_item(&self, item_id: i64) -> Result<(), ApiError> {
        debug!("DELETE /cart/{}", item_id);
        let response = self
            .client
            .delete(self.url(&format!("/cart/{}", item_id)))
            .send()
            .await?;
        // 204, body is empty
        Self::check_status(response).await?;
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), ApiError> {
        debug!("DELETE /cart/");
        let response = self.client.delete(self.url("/cart/")).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
