use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::vehicles::domain::Location;

/// Address payload served by the maps collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Outbound coordinate-to-address resolution, behind a trait so the service
/// can be exercised against a stub.
#[async_trait]
pub trait MapsGateway: Send + Sync {
    /// The input coordinate with a freshly resolved descriptive address.
    async fn resolve(&self, location: &Location) -> Result<Location, MapsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    #[error("address lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("address lookup responded with status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("address lookup payload invalid: {0}")]
    Payload(#[from] serde_json::Error),
}

/// HTTP client for the maps collaborator's `/maps` endpoint.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MapsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }
}

#[async_trait]
impl MapsGateway for MapsClient {
    async fn resolve(&self, location: &Location) -> Result<Location, MapsError> {
        let url = format!("{}/maps", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("lat", location.lat), ("lon", location.lon)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapsError::Status { status });
        }

        let body = response.bytes().await?;
        let address: Address = serde_json::from_slice(&body)?;
        Ok(Location {
            lat: location.lat,
            lon: location.lon,
            address: Some(address.address),
            city: Some(address.city),
            state: Some(address.state),
            zip: Some(address.zip),
        })
    }
}
