use thiserror::Error;

use crate::auth::AuthError;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Unknown variation \"{key}\" for card {card_id}")]
    VariationNotFound { card_id: String, key: String },

    #[error("Failed to load catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CardzError>;
