//! Error types for Loyalty Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Fact already declared: {0}")]
    DuplicateFact(String),

    #[error("Fact not declared: {0}")]
    UnknownFact(String),

    #[error("Fact is referenced by a decision and cannot be removed: {0}")]
    FactInUse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
