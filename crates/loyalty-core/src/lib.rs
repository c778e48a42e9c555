//! Loyalty Core - Core types for the loyalty rules engine
//!
//! This crate provides the fundamental types used across the workspace:
//! - Value types for runtime fact data
//! - Rule set definitions (conditions, decisions, events)
//! - Fact registry and attribute types
//! - Error types

pub mod error;
pub mod ruleset;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use ruleset::{Condition, ConditionGroup, Decision, EventParams, Operator, RuleEvent, RuleSet};
pub use types::{FactAttribute, FactRegistry, FactType, Value};
