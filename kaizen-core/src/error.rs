use kaizen_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid product: {0}")]
    Validation(#[from] ModelError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Lookup miss surfaced to API callers.
    pub fn product_not_found() -> Self {
        CatalogError::NotFound("Product not found".to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
