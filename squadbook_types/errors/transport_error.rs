use thiserror::Error;

/// Errors from the remote player collection. A missing id is not a distinct
/// kind: the remote resource answers with a generic error status, which ends
/// up as `Http` here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Malformed remote payload: {0}")]
    Decode(String),
}
