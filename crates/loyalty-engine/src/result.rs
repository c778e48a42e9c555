//! Evaluation result types

use loyalty_core::FactType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One decision that fired during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRule {
    /// Human-readable rule name from the decision's event
    pub rule_name: String,

    /// Points this decision contributed
    pub points: i64,
}

/// Warning-level diagnostic about malformed rule content
///
/// Configuration errors never abort a run; they fail the affected
/// condition or decision closed and are reported here so admins can be
/// alerted instead of the problem being silently swallowed.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineWarning {
    /// A condition uses an operator the engine does not recognize
    #[error("rule '{rule}': unrecognized operator on fact '{fact}'")]
    UnknownOperator { rule: String, fact: String },

    /// A condition references a fact the registry does not declare
    #[error("rule '{rule}': fact '{fact}' is not declared in the registry")]
    UnknownFact { rule: String, fact: String },

    /// A condition value does not match the declared fact type
    #[error("rule '{rule}': value for fact '{fact}' is not of type {expected}")]
    TypeMismatch {
        rule: String,
        fact: String,
        expected: FactType,
    },

    /// The decision's point award does not parse as a non-negative integer
    #[error("rule '{rule}': points '{raw}' do not parse as a non-negative integer")]
    InvalidPoints { rule: String, raw: String },
}

impl EngineWarning {
    /// The rule name the warning belongs to
    pub fn rule(&self) -> &str {
        match self {
            EngineWarning::UnknownOperator { rule, .. }
            | EngineWarning::UnknownFact { rule, .. }
            | EngineWarning::TypeMismatch { rule, .. }
            | EngineWarning::InvalidPoints { rule, .. } => rule,
        }
    }
}

/// Result of running a rule set against one fact map
///
/// Serializes with the camelCase field names the consuming accumulation
/// flow expects (`matchedRules`, `totalPoints`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Every enabled decision that matched, in decision order
    pub matched_rules: Vec<MatchedRule>,

    /// Sum of points over all matched decisions (bonuses stack)
    pub total_points: i64,

    /// Malformed-rule diagnostics collected during the run
    pub warnings: Vec<EngineWarning>,
}

impl EvaluationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched decision and add its points to the total
    pub fn record_match(&mut self, rule_name: String, points: i64) {
        self.matched_rules.push(MatchedRule { rule_name, points });
        self.total_points += points;
    }

    /// Returns true if no decision matched
    pub fn is_empty(&self) -> bool {
        self.matched_rules.is_empty()
    }
}
