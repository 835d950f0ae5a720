use crate::nea::endpoint::Endpoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeaError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON data from {0}")]
    JsonParse(String, #[source] serde_json::Error),

    #[error("No forecast items in the {0} response")]
    MissingForecast(Endpoint),
}
