//! Authoring-time rule set validation
//!
//! The evaluator tolerates malformed content at runtime (fail closed plus
//! warning), but the admin API should never persist it in the first
//! place. This module is the authority that layer consults before a save:
//! it collects every problem in one pass instead of stopping at the
//! first, so a form can surface all of them at once.

use loyalty_core::{ConditionGroup, FactType, RuleSet, Value};
use thiserror::Error;

/// A problem found while validating a rule set for persistence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A decision has no rule name
    #[error("decision {index}: rule name is required")]
    MissingRuleName { index: usize },

    /// A decision's points are not a non-negative integer string
    #[error("rule '{rule}': points '{raw}' must be a non-negative integer")]
    InvalidPoints { rule: String, raw: String },

    /// A condition references a fact the registry does not declare
    #[error("rule '{rule}': fact '{fact}' is not declared")]
    UnknownFact { rule: String, fact: String },

    /// A condition value does not fit the declared fact type
    #[error("rule '{rule}': value for fact '{fact}' must be of type {expected}")]
    TypeMismatch {
        rule: String,
        fact: String,
        expected: FactType,
    },

    /// A condition carries an operator the engine does not recognize
    #[error("rule '{rule}': unrecognized operator on fact '{fact}'")]
    UnknownOperator { rule: String, fact: String },

    /// An attribute was declared with an empty name
    #[error("attribute declared with an empty name")]
    EmptyFactName,
}

/// Coerce free-text condition values toward their declared fact types
///
/// Numeric strings targeting `number` facts are parsed once, here, so the
/// evaluator can rely on exact comparisons with no per-evaluation
/// coercion. Call before [`validate_rule_set`].
pub fn normalize_rule_set(rule_set: &mut RuleSet) {
    let registry = rule_set.attributes.clone();
    for decision in &mut rule_set.decisions {
        let conditions = match &mut decision.conditions {
            ConditionGroup::All { all } => all,
            ConditionGroup::Any { any } => any,
        };
        for condition in conditions {
            let value = std::mem::replace(&mut condition.value, Value::Null);
            condition.value = registry.coerce_value(&condition.fact, value);
        }
    }
}

/// Validate a rule set for persistence
///
/// Collects every [`ValidationError`]; returns `Ok(())` only when the rule
/// set is well-formed. Run [`normalize_rule_set`] first so numeric-string
/// values are not flagged as type mismatches.
pub fn validate_rule_set(rule_set: &RuleSet) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (key, attribute) in rule_set.attributes.iter() {
        if key.trim().is_empty() || attribute.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFactName);
        }
    }

    for (index, decision) in rule_set.decisions.iter().enumerate() {
        let rule = decision.rule_name().to_string();
        if rule.trim().is_empty() {
            errors.push(ValidationError::MissingRuleName { index });
        }

        if decision.event.parse_points().is_none() {
            errors.push(ValidationError::InvalidPoints {
                rule: rule.clone(),
                raw: decision.event.points.clone(),
            });
        }

        for condition in decision.conditions.conditions() {
            if !condition.operator.is_recognized() {
                errors.push(ValidationError::UnknownOperator {
                    rule: rule.clone(),
                    fact: condition.fact.clone(),
                });
            }

            let Some(attribute) = rule_set.attributes.get(&condition.fact) else {
                errors.push(ValidationError::UnknownFact {
                    rule: rule.clone(),
                    fact: condition.fact.clone(),
                });
                continue;
            };

            let fits = match condition.value.as_array() {
                Some(items) => items.iter().all(|item| attribute.fact_type.admits(item)),
                None => attribute.fact_type.admits(&condition.value),
            };
            if !fits {
                errors.push(ValidationError::TypeMismatch {
                    rule: rule.clone(),
                    fact: condition.fact.clone(),
                    expected: attribute.fact_type,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
