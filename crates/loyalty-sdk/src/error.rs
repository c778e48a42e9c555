//! SDK error types

use loyalty_engine::ValidationError;
use loyalty_store::StoreError;
use thiserror::Error;

/// SDK error
#[derive(Error, Debug)]
pub enum SdkError {
    /// Store failure while loading or saving a rule set
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The rule set failed authoring-time validation
    #[error("Rule set validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
