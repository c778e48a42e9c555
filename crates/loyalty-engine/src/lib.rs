//! Loyalty Engine - Rule evaluation for loyalty point awards
//!
//! This crate provides the pure, synchronous evaluator that runs a rule
//! set against one fact map: operator semantics, condition and group
//! evaluation, decision evaluation, and additive point aggregation.
//!
//! The evaluator never fails for data-shape problems. Malformed rule
//! content (unknown operator, undeclared fact, unparseable points) fails
//! closed per decision and is surfaced as [`EngineWarning`]s in the
//! result, so one broken rule degrades to zero points instead of aborting
//! the run.

pub mod engine;
pub mod evaluator;
pub mod facts;
pub mod operators;
pub mod result;
pub mod validation;

// Re-export main types
pub use engine::Engine;
pub use evaluator::DecisionOutcome;
pub use facts::FactMap;
pub use result::{EngineWarning, EvaluationResult, MatchedRule};
pub use validation::{normalize_rule_set, validate_rule_set, ValidationError};
