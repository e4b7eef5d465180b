use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failures and non-success statuses.
    #[error("country request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed country payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
