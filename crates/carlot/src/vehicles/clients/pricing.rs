use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::vehicles::domain::VehicleId;

/// Quote payload served by the pricing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub currency: String,
    pub price: f64,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: u64,
}

/// Outbound price lookup, behind a trait so the service can be exercised
/// against a stub.
#[async_trait]
pub trait PriceGateway: Send + Sync {
    /// Current quote for the vehicle, formatted for display.
    async fn price(&self, id: VehicleId) -> Result<String, PricingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("price lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("price lookup responded with status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("price lookup payload invalid: {0}")]
    Payload(#[from] serde_json::Error),
}

/// HTTP client for the pricing collaborator's `/services/price` endpoint.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: reqwest::Client,
    base_url: String,
}

impl PricingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }
}

#[async_trait]
impl PriceGateway for PricingClient {
    async fn price(&self, id: VehicleId) -> Result<String, PricingError> {
        let url = format!("{}/services/price", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("vehicleId", id.0)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::Status { status });
        }

        let body = response.bytes().await?;
        let quote: PriceQuote = serde_json::from_slice(&body)?;
        Ok(format!("{} {:.2}", quote.currency, quote.price))
    }
}
