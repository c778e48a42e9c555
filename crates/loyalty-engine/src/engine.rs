//! The rule set engine
//!
//! Runs every enabled decision of a rule set against one fact map and
//! aggregates the awarded points. Aggregation is additive by design:
//! loyalty bonuses model independent promotional incentives that can
//! co-occur (a big-purchase bonus can stack with a seasonal one), so all
//! matching decisions contribute, not just the first.

use crate::evaluator;
use crate::facts::FactMap;
use crate::result::EvaluationResult;
use loyalty_core::RuleSet;

/// Stateless rule set evaluator
///
/// A run is a pure function of `(rule_set, fact_map)`: no internal state,
/// no I/O, no mutation of its inputs. Concurrent runs need no locking.
pub struct Engine;

impl Engine {
    /// Evaluate a rule set against one fact map
    ///
    /// Decisions are visited in array order; disabled decisions are
    /// skipped entirely and never appear in the result. A malformed
    /// decision degrades to zero points with a warning and never aborts
    /// the evaluation of the remaining decisions. Output is deterministic
    /// for fixed inputs.
    pub fn run(rule_set: &RuleSet, facts: &FactMap) -> EvaluationResult {
        let mut result = EvaluationResult::new();

        for decision in &rule_set.decisions {
            let outcome = evaluator::evaluate_decision(
                decision,
                facts,
                &rule_set.attributes,
                &mut result.warnings,
            );
            tracing::debug!(
                rule = %outcome.rule_name,
                matched = outcome.matched,
                points = outcome.points,
                "decision evaluated"
            );
            if outcome.matched {
                result.record_match(outcome.rule_name, outcome.points);
            }
        }

        tracing::debug!(
            matched = result.matched_rules.len(),
            total_points = result.total_points,
            warnings = result.warnings.len(),
            "rule set evaluated"
        );
        result
    }
}
