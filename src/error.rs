use crate::nea::error::NeaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShoreSquadError {
    #[error(transparent)]
    Nea(#[from] NeaError),

    #[error("Failed to build the HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
