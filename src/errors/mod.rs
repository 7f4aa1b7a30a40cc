use reqwest::StatusCode;
use thiserror::Error;

/// A Lounge API call that did not produce usable player details
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Lounge API returned status: {0}")]
    Status(StatusCode),
    #[error("Failed to reach Lounge API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to parse player details: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Player name required")]
    Validation,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
