//! Rule set definitions
//!
//! A rule set is the unit the engine evaluates: a fact registry plus an
//! ordered sequence of decisions, persisted as the json-rules-engine style
//! `{ attributes, decisions }` document.

pub mod condition;
pub mod decision;
pub mod ruleset;

pub use condition::{Condition, ConditionGroup, Operator};
pub use decision::{Decision, EventParams, RuleEvent};
pub use ruleset::RuleSet;
