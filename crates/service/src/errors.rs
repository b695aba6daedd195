use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<sled::Error> for ServiceError {
    fn from(e: sled::Error) -> Self {
        Self::Storage(e.to_string())
    }
}
