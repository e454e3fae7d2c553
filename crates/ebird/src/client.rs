//! HTTP client for the eBird v2 REST API.
//!
//! Wraps the endpoints this product consumes using [`reqwest`]. Every
//! request carries the `X-eBirdApiToken` header. The key is optional at
//! construction so that a deployment without one still starts; the first
//! provider call then fails with [`EbirdError::MissingApiKey`].

use crate::csv_feed::parse_hotspot_csv;
use crate::records::{HotspotCsvRecord, HotspotInfo, RecentObservation};

/// Default API base.
pub const EBIRD_BASE_URL: &str = "https://api.ebird.org/v2";

/// Header eBird uses for API-key auth.
const API_TOKEN_HEADER: &str = "X-eBirdApiToken";

/// Client for a single eBird API deployment.
#[derive(Debug, Clone)]
pub struct EbirdClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Errors from the eBird client layer.
#[derive(Debug, thiserror::Error)]
pub enum EbirdError {
    /// `EBIRD_API_KEY` was not configured.
    #[error("eBird API key is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// eBird returned a non-2xx status code.
    #[error("eBird API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response body did not match the expected schema.
    #[error("Failed to decode eBird response: {0}")]
    Decode(String),

    /// The hotspot CSV feed was malformed.
    #[error("Failed to parse hotspot CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl EbirdClient {
    /// Create a client with an explicit base URL and optional API key.
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create a client from the `EBIRD_API_KEY` environment variable.
    ///
    /// An absent or empty key is not an error here; provider calls will
    /// fail individually with [`EbirdError::MissingApiKey`].
    pub fn from_env() -> Self {
        let api_key = std::env::var("EBIRD_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Self::new(EBIRD_BASE_URL.to_string(), api_key)
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Species codes recorded in a region (`GET /product/spplist/{region}`).
    pub async fn species_list(&self, region: &str) -> Result<Vec<String>, EbirdError> {
        let url = format!("{}/product/spplist/{region}", self.base_url);
        let response = self.get(&url).await?;
        Self::parse_json(response).await
    }

    /// Recent observations in a region over the given lookback window
    /// (`GET /data/obs/{region}/recent?back={days}`).
    pub async fn recent_observations(
        &self,
        region: &str,
        back_days: u32,
    ) -> Result<Vec<RecentObservation>, EbirdError> {
        let url = format!(
            "{}/data/obs/{region}/recent?back={back_days}",
            self.base_url
        );
        let response = self.get(&url).await?;
        Self::parse_json(response).await
    }

    /// Raw hotspot reference CSV for a region (`GET /ref/hotspot/{region}`).
    ///
    /// Returned verbatim so callers can persist the snapshot before (or
    /// instead of) parsing it.
    pub async fn hotspot_csv(&self, region: &str) -> Result<String, EbirdError> {
        let url = format!("{}/ref/hotspot/{region}", self.base_url);
        let response = self.get(&url).await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    /// Hotspot reference feed parsed into typed records.
    pub async fn hotspot_records(&self, region: &str) -> Result<Vec<HotspotCsvRecord>, EbirdError> {
        let text = self.hotspot_csv(region).await?;
        parse_hotspot_csv(&text)
    }

    /// Detail record for one hotspot (`GET /ref/hotspot/info/{locId}`).
    pub async fn hotspot_details(&self, loc_id: &str) -> Result<HotspotInfo, EbirdError> {
        let url = format!("{}/ref/hotspot/info/{loc_id}", self.base_url);
        let response = self.get(&url).await?;
        Self::parse_json(response).await
    }

    // ---- private helpers ----

    /// Issue an authenticated GET.
    async fn get(&self, url: &str) -> Result<reqwest::Response, EbirdError> {
        let key = self.api_key.as_deref().ok_or(EbirdError::MissingApiKey)?;
        tracing::debug!(%url, "eBird API request");
        let response = self
            .client
            .get(url)
            .header(API_TOKEN_HEADER, key)
            .send()
            .await?;
        Ok(response)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`EbirdError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, EbirdError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EbirdError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    ///
    /// Schema mismatches surface as [`EbirdError::Decode`] rather than a
    /// generic request error, so callers can tell a provider contract
    /// break apart from a network failure.
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, EbirdError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| EbirdError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_at_call_time() {
        let client = EbirdClient::new(EBIRD_BASE_URL.to_string(), None);
        assert!(!client.has_api_key());

        let err = client.species_list("SG").await.unwrap_err();
        assert!(matches!(err, EbirdError::MissingApiKey));
    }

    #[test]
    fn from_env_tolerates_absent_key() {
        // Construction must never fail; only calls do.
        let client = EbirdClient::new(EBIRD_BASE_URL.to_string(), Some("k".into()));
        assert!(client.has_api_key());
    }
}
