use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("invalid slug '{0}': use lowercase letters, digits and dashes")]
    InvalidSlug(String),

    #[error("invalid image url '{url}': {reason}")]
    InvalidImageUrl { url: String, reason: String },

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
