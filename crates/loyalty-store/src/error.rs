//! Error types for the store layer

use crate::key::RuleSetKey;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No rule set persisted under the key
    #[error("Rule set not found: {key}")]
    NotFound { key: RuleSetKey },

    /// A key component is not usable by the backend
    #[error("Invalid key component: {component}")]
    InvalidKey { component: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Failed to parse rule set document: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Generic error
    #[error("Store error: {0}")]
    Other(String),
}
