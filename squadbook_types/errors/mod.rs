mod persistence_error;
mod transport_error;

pub use persistence_error::PersistenceError;
pub use transport_error::TransportError;

use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Top level error for the whole client.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
