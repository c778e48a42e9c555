//! Loyalty SDK
//!
//! High-level API tying the rule set store and the evaluator together:
//! load the rule set for a (program, transaction-type) key, evaluate a
//! transaction's facts against it, and gate rule set saves behind
//! authoring-time validation.

pub mod builder;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::LoyaltyEngineBuilder;
pub use engine::LoyaltyEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use loyalty_core::{RuleSet, Value};
pub use loyalty_engine::{EvaluationResult, FactMap};
pub use loyalty_store::RuleSetKey;
