use reqwest::StatusCode;
use thiserror::Error;

/// Storage failures. Never surfaced to a client: callers log and keep the
/// in-memory copy authoritative for the rest of the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encode: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Quote-service failures. Any variant means "use the local fallback pool".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("empty or malformed payload")]
    MalformedPayload,
}
