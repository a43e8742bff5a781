use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};

pub struct PricingClient {
    http: Client,
    endpoint: String,
}

impl PricingClient {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        Ok(Self {
            http: Client::builder().timeout(config.timeout).build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the model listing and decode the body as generic JSON.
    pub async fn fetch_models(&self) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, "fetching model listing");
        let resp = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        tracing::info!(endpoint = %self.endpoint, status = status.as_u16(), "model listing response");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
