//! Condition, group, and decision evaluation
//!
//! Evaluation is layered the way the data model nests: a condition against
//! the fact map, a group with short-circuit AND/OR over its conditions, a
//! decision gating its group behind the enabled flag. Every layer is a
//! pure function of its inputs; malformed content fails closed and pushes
//! an [`EngineWarning`] instead of erroring.

use crate::facts::FactMap;
use crate::operators;
use crate::result::EngineWarning;
use loyalty_core::{Condition, ConditionGroup, Decision, FactRegistry};

/// Outcome of evaluating one decision
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionOutcome {
    /// Whether the decision's conditions matched
    pub matched: bool,

    /// Points the decision contributes (0 unless matched and well-formed)
    pub points: i64,

    /// Rule name from the decision's event
    pub rule_name: String,
}

/// Evaluate a single condition against the fact map
///
/// Fails closed (`false`) when the operator is unrecognized, the fact is
/// not declared in the registry, or the condition value does not fit the
/// declared type; those three also emit warnings. A declared fact that is
/// simply absent from the fact map is a plain non-match, not an error:
/// callers frequently evaluate against partial fact maps.
pub fn evaluate_condition(
    rule_name: &str,
    condition: &Condition,
    facts: &FactMap,
    registry: &FactRegistry,
    warnings: &mut Vec<EngineWarning>,
) -> bool {
    if !condition.operator.is_recognized() {
        tracing::warn!(rule = rule_name, fact = %condition.fact, "unrecognized operator");
        warnings.push(EngineWarning::UnknownOperator {
            rule: rule_name.to_string(),
            fact: condition.fact.clone(),
        });
        return false;
    }

    let Some(attribute) = registry.get(&condition.fact) else {
        tracing::warn!(rule = rule_name, fact = %condition.fact, "fact not declared");
        warnings.push(EngineWarning::UnknownFact {
            rule: rule_name.to_string(),
            fact: condition.fact.clone(),
        });
        return false;
    };

    let value_fits = match condition.value.as_array() {
        Some(items) => items.iter().all(|item| attribute.fact_type.admits(item)),
        None => attribute.fact_type.admits(&condition.value),
    };
    if !value_fits {
        tracing::warn!(
            rule = rule_name,
            fact = %condition.fact,
            expected = attribute.fact_type.type_name(),
            "condition value type mismatch"
        );
        warnings.push(EngineWarning::TypeMismatch {
            rule: rule_name.to_string(),
            fact: condition.fact.clone(),
            expected: attribute.fact_type,
        });
        return false;
    }

    let Some(fact_value) = facts.get(&condition.fact) else {
        // Missing fact is a normal non-match
        return false;
    };

    operators::compare(fact_value, condition.operator, &condition.value)
}

/// Evaluate a condition group with short-circuit AND/OR semantics
///
/// An empty `all` group is vacuously true, an empty `any` group vacuously
/// false.
pub fn evaluate_group(
    rule_name: &str,
    group: &ConditionGroup,
    facts: &FactMap,
    registry: &FactRegistry,
    warnings: &mut Vec<EngineWarning>,
) -> bool {
    match group {
        ConditionGroup::All { all } => all
            .iter()
            .all(|c| evaluate_condition(rule_name, c, facts, registry, warnings)),
        ConditionGroup::Any { any } => any
            .iter()
            .any(|c| evaluate_condition(rule_name, c, facts, registry, warnings)),
    }
}

/// Evaluate one decision against the fact map
///
/// Disabled decisions short-circuit to a non-match without touching their
/// conditions. A matched decision with an unparseable point award counts
/// as matched with 0 points and an [`EngineWarning::InvalidPoints`].
pub fn evaluate_decision(
    decision: &Decision,
    facts: &FactMap,
    registry: &FactRegistry,
    warnings: &mut Vec<EngineWarning>,
) -> DecisionOutcome {
    let rule_name = decision.rule_name().to_string();

    if !decision.is_enabled() {
        return DecisionOutcome {
            matched: false,
            points: 0,
            rule_name,
        };
    }

    let matched = evaluate_group(&rule_name, &decision.conditions, facts, registry, warnings);

    let points = if matched {
        match decision.event.parse_points() {
            Some(points) => points,
            None => {
                tracing::warn!(rule = %rule_name, raw = %decision.event.points, "invalid points");
                warnings.push(EngineWarning::InvalidPoints {
                    rule: rule_name.clone(),
                    raw: decision.event.points.clone(),
                });
                0
            }
        }
    } else {
        0
    };

    DecisionOutcome {
        matched,
        points,
        rule_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fact_map;
    use loyalty_core::{Operator, RuleEvent, Value};

    fn registry() -> FactRegistry {
        FactRegistry::income_defaults()
    }

    #[test]
    fn test_condition_against_fact_map() {
        let condition = Condition::new("value", Operator::GreaterThanInclusive, 5000.0);
        let mut warnings = Vec::new();

        let facts = fact_map([("value", 5000.0.into())]);
        assert!(evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));

        let facts = fact_map([("value", 4999.0.into())]);
        assert!(!evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_fact_is_plain_non_match() {
        let condition = Condition::new("value", Operator::Equal, 1.0);
        let mut warnings = Vec::new();
        let facts = FactMap::new();

        assert!(!evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_undeclared_fact_warns() {
        let condition = Condition::new("loyaltyTier", Operator::Equal, "gold");
        let mut warnings = Vec::new();
        let facts = fact_map([("loyaltyTier", "gold".into())]);

        assert!(!evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));
        assert_eq!(
            warnings,
            vec![EngineWarning::UnknownFact {
                rule: "r".to_string(),
                fact: "loyaltyTier".to_string(),
            }]
        );
    }

    #[test]
    fn test_type_mismatch_warns_and_fails_closed() {
        // Registry declares `value` as number, condition carries a string
        let condition = Condition::new("value", Operator::Equal, "high");
        let mut warnings = Vec::new();
        let facts = fact_map([("value", 5000.0.into())]);

        assert!(!evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], EngineWarning::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_operator_warns() {
        let condition = Condition {
            fact: "value".to_string(),
            operator: Operator::Unknown,
            value: Value::Number(1.0),
        };
        let mut warnings = Vec::new();
        let facts = fact_map([("value", 1.0.into())]);

        assert!(!evaluate_condition("r", &condition, &facts, &registry(), &mut warnings));
        assert!(matches!(warnings[0], EngineWarning::UnknownOperator { .. }));
    }

    #[test]
    fn test_group_semantics() {
        let facts = fact_map([("value", 10000.0.into()), ("identificationTypeId", 1.0.into())]);
        let mut warnings = Vec::new();

        let all = ConditionGroup::all(vec![
            Condition::new("value", Operator::GreaterThan, 5000.0),
            Condition::new("identificationTypeId", Operator::Equal, 1.0),
        ]);
        assert!(evaluate_group("r", &all, &facts, &registry(), &mut warnings));

        let all_fails = ConditionGroup::all(vec![
            Condition::new("value", Operator::GreaterThan, 5000.0),
            Condition::new("identificationTypeId", Operator::Equal, 2.0),
        ]);
        assert!(!evaluate_group("r", &all_fails, &facts, &registry(), &mut warnings));

        let any = ConditionGroup::any(vec![
            Condition::new("value", Operator::LessThan, 5000.0),
            Condition::new("identificationTypeId", Operator::Equal, 1.0),
        ]);
        assert!(evaluate_group("r", &any, &facts, &registry(), &mut warnings));
    }

    #[test]
    fn test_vacuous_groups() {
        let facts = FactMap::new();
        let mut warnings = Vec::new();

        assert!(evaluate_group("r", &ConditionGroup::all(vec![]), &facts, &registry(), &mut warnings));
        assert!(!evaluate_group("r", &ConditionGroup::any(vec![]), &facts, &registry(), &mut warnings));
    }

    #[test]
    fn test_disabled_decision_short_circuits() {
        let decision = Decision::new(
            ConditionGroup::all(vec![]),
            RuleEvent::new(500, "AlwaysOn"),
        )
        .with_enabled(false);
        let mut warnings = Vec::new();

        let outcome = evaluate_decision(&decision, &FactMap::new(), &registry(), &mut warnings);
        assert!(!outcome.matched);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.rule_name, "AlwaysOn");
    }

    #[test]
    fn test_unparseable_points_match_with_zero() {
        let mut decision = Decision::new(
            ConditionGroup::all(vec![]),
            RuleEvent::new(0, "Broken"),
        );
        decision.event.points = "abc".to_string();
        let mut warnings = Vec::new();

        let outcome = evaluate_decision(&decision, &FactMap::new(), &registry(), &mut warnings);
        assert!(outcome.matched);
        assert_eq!(outcome.points, 0);
        assert_eq!(
            warnings,
            vec![EngineWarning::InvalidPoints {
                rule: "Broken".to_string(),
                raw: "abc".to_string(),
            }]
        );
    }
}
