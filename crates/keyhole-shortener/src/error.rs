use keyhole_core::StorageError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    #[error("invalid long url: {0}")]
    InvalidLongUrl(String),
    #[error("identifier already taken: {0}")]
    IdCollision(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
