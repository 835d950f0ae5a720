use crate::nea::endpoint::{Endpoint, DEFAULT_BASE_URL};
use crate::nea::error::NeaError;
use crate::nea::schema::{FourDayForecast, StationReadings, TwentyFourHourForecast};
use crate::nea::snapshot::NeaSnapshot;
use futures_util::future::try_join4;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Fetches the NEA environment endpoints.
#[derive(Debug, Clone)]
pub struct NeaClient {
    client: Client,
    base_url: String,
}

impl NeaClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests all four endpoints concurrently.
    ///
    /// Fails with the first error any of the requests produces; a partial snapshot is never
    /// returned.
    pub async fn fetch_snapshot(&self) -> Result<NeaSnapshot, NeaError> {
        let (twenty_four_hour, four_day, air_temperature, rainfall) = try_join4(
            self.fetch::<TwentyFourHourForecast>(Endpoint::TwentyFourHourForecast),
            self.fetch::<FourDayForecast>(Endpoint::FourDayForecast),
            self.fetch::<StationReadings>(Endpoint::AirTemperature),
            self.fetch::<StationReadings>(Endpoint::Rainfall),
        )
        .await?;

        Ok(NeaSnapshot {
            twenty_four_hour,
            four_day,
            air_temperature,
            rainfall,
        })
    }

    /// Downloads one endpoint and deserializes its body.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, NeaError> {
        let url = endpoint.url(&self.base_url);
        info!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NeaError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    NeaError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    NeaError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| NeaError::NetworkRequest(url.clone(), e))?;
        info!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| NeaError::JsonParse(url, e))
    }
}

impl Default for NeaClient {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_BASE_URL)
    }
}
