use thiserror::Error;

/// Failure of a class search. Screens do not distinguish between kinds.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server responded with status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}
