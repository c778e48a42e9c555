//! The rule set: fact registry plus ordered decisions

use super::decision::Decision;
use crate::error::{CoreError, Result};
use crate::types::{FactAttribute, FactRegistry};
use serde::{Deserialize, Serialize};

/// Full collection of fact attributes and decisions for one
/// (program, transaction-type) context
///
/// Decision order is evaluation order, but every enabled decision is always
/// evaluated; order only affects how matches are reported, never the total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Admissible facts, keyed by name
    #[serde(default)]
    pub attributes: FactRegistry,

    /// Ordered decisions
    #[serde(default)]
    pub decisions: Vec<Decision>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set with the default accumulation facts declared
    pub fn with_income_defaults() -> Self {
        Self {
            attributes: FactRegistry::income_defaults(),
            decisions: Vec::new(),
        }
    }

    /// Append a decision
    pub fn add_decision(mut self, decision: Decision) -> Self {
        self.decisions.push(decision);
        self
    }

    /// Number of enabled decisions
    pub fn enabled_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_enabled()).count()
    }

    /// Returns true if any condition of any decision references the fact
    pub fn fact_in_use(&self, fact: &str) -> bool {
        self.decisions
            .iter()
            .any(|d| d.conditions.references_fact(fact))
    }

    /// Remove a fact attribute, refusing if any decision references it
    pub fn remove_attribute(&mut self, fact: &str) -> Result<FactAttribute> {
        if self.fact_in_use(fact) {
            return Err(CoreError::FactInUse(fact.to_string()));
        }
        self.attributes
            .remove(fact)
            .ok_or_else(|| CoreError::UnknownFact(fact.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::condition::{Condition, ConditionGroup, Operator};
    use crate::ruleset::decision::RuleEvent;
    use crate::types::FactAttribute;

    fn sample() -> RuleSet {
        RuleSet::with_income_defaults().add_decision(Decision::new(
            ConditionGroup::all(vec![Condition::new(
                "value",
                Operator::GreaterThanInclusive,
                5000.0,
            )]),
            RuleEvent::new(2000, "CompraGrande"),
        ))
    }

    #[test]
    fn test_fact_in_use() {
        let rule_set = sample();
        assert!(rule_set.fact_in_use("value"));
        assert!(!rule_set.fact_in_use("documentNumber"));
    }

    #[test]
    fn test_remove_attribute_guards_references() {
        let mut rule_set = sample();

        let err = rule_set.remove_attribute("value").unwrap_err();
        assert_eq!(err, CoreError::FactInUse("value".to_string()));

        // Unreferenced attributes can be removed
        let removed = rule_set.remove_attribute("documentNumber").unwrap();
        assert_eq!(removed, FactAttribute::string("documentNumber"));
        assert!(!rule_set.attributes.contains("documentNumber"));

        let err = rule_set.remove_attribute("nope").unwrap_err();
        assert_eq!(err, CoreError::UnknownFact("nope".to_string()));
    }

    #[test]
    fn test_enabled_count() {
        let rule_set = sample().add_decision(
            Decision::new(
                ConditionGroup::any(vec![]),
                RuleEvent::new(10, "Disabled"),
            )
            .with_enabled(false),
        );
        assert_eq!(rule_set.decisions.len(), 2);
        assert_eq!(rule_set.enabled_count(), 1);
    }

    #[test]
    fn test_document_round_trip_is_deep_equal() {
        let document = serde_json::json!({
            "attributes": {
                "value": {"type": "number", "name": "value"},
                "documentType": {"type": "string", "name": "documentType"}
            },
            "decisions": [
                {
                    "conditions": {"all": [
                        {"fact": "value", "operator": "greaterThanInclusive", "value": 5000}
                    ]},
                    "event": {"type": "2000", "params": {"rule": "CompraGrande"}},
                    "enabled": true
                },
                {
                    "conditions": {"any": [
                        {"fact": "documentType", "operator": "in", "value": ["CC", "NIT"]}
                    ]},
                    "event": {"type": "500", "params": {"rule": "DocumentoConocido"}}
                }
            ]
        });

        let rule_set: RuleSet = serde_json::from_value(document.clone()).unwrap();
        let saved = serde_json::to_value(&rule_set).unwrap();
        assert_eq!(saved, document);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let rule_set: RuleSet = serde_json::from_str("{}").unwrap();
        assert!(rule_set.attributes.is_empty());
        assert!(rule_set.decisions.is_empty());
    }
}
