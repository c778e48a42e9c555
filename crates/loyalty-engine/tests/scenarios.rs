//! End-to-end evaluation scenarios against persisted-shape rule sets

use loyalty_core::RuleSet;
use loyalty_engine::facts::fact_map;
use loyalty_engine::{Engine, EngineWarning, FactMap};

fn load(document: serde_json::Value) -> RuleSet {
    serde_json::from_value(document).expect("well-formed rule set document")
}

fn income_rules() -> RuleSet {
    load(serde_json::json!({
        "attributes": {
            "identificationTypeId": {"type": "number", "name": "identificationTypeId"},
            "documentNumber": {"type": "string", "name": "documentNumber"},
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
                "conditions": {"all": [
                    {"fact": "documentType", "operator": "in", "value": ["CC", "NIT"]}
                ]},
                "event": {"type": "500", "params": {"rule": "DocumentoConocido"}}
            }
        ]
    }))
}

#[test]
fn big_purchase_matches_at_threshold() {
    let result = Engine::run(&income_rules(), &fact_map([("value", 5000.0.into())]));
    assert_eq!(result.total_points, 2000);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].rule_name, "CompraGrande");
    assert_eq!(result.matched_rules[0].points, 2000);
}

#[test]
fn big_purchase_misses_below_threshold() {
    let result = Engine::run(&income_rules(), &fact_map([("value", 4999.0.into())]));
    assert_eq!(result.total_points, 0);
    assert!(result.matched_rules.is_empty());
}

#[test]
fn independent_bonuses_stack() {
    let facts = fact_map([("value", 15000.0.into()), ("documentType", "CC".into())]);
    let result = Engine::run(&income_rules(), &facts);

    assert_eq!(result.total_points, 2500);
    assert_eq!(result.matched_rules.len(), 2);
    // Matched order follows decision order
    assert_eq!(result.matched_rules[0].rule_name, "CompraGrande");
    assert_eq!(result.matched_rules[1].rule_name, "DocumentoConocido");
}

#[test]
fn disabled_decision_is_excluded() {
    let mut rules = income_rules();
    rules.decisions[0].enabled = Some(false);
    let facts = fact_map([("value", 15000.0.into()), ("documentType", "CC".into())]);

    let result = Engine::run(&rules, &facts);
    assert_eq!(result.total_points, 500);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].rule_name, "DocumentoConocido");
}

#[test]
fn unparseable_points_flag_but_do_not_abort() {
    let mut rules = income_rules();
    rules.decisions[0].event.points = "abc".to_string();
    let facts = fact_map([("value", 15000.0.into()), ("documentType", "CC".into())]);

    let result = Engine::run(&rules, &facts);
    // The broken decision still matches, worth 0; the other is unaffected
    assert_eq!(result.total_points, 500);
    assert_eq!(result.matched_rules.len(), 2);
    assert_eq!(result.matched_rules[0].points, 0);
    assert_eq!(
        result.warnings,
        vec![EngineWarning::InvalidPoints {
            rule: "CompraGrande".to_string(),
            raw: "abc".to_string(),
        }]
    );
}

#[test]
fn membership_on_document_type() {
    let rules = income_rules();

    let result = Engine::run(&rules, &fact_map([("documentType", "CC".into())]));
    assert_eq!(result.total_points, 500);

    let result = Engine::run(&rules, &fact_map([("documentType", "TI".into())]));
    assert_eq!(result.total_points, 0);
}

#[test]
fn missing_fact_fails_sole_all_condition() {
    // Fact map without `value`: the big-purchase decision cannot match
    let result = Engine::run(&income_rules(), &fact_map([("documentType", "TI".into())]));
    assert!(result.matched_rules.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn empty_decisions_produce_empty_result() {
    let rules = load(serde_json::json!({"attributes": {}, "decisions": []}));
    let result = Engine::run(&rules, &fact_map([("value", 1.0.into())]));
    assert_eq!(result.total_points, 0);
    assert!(result.matched_rules.is_empty());
}

#[test]
fn empty_in_always_false_empty_not_in_always_true() {
    let rules = load(serde_json::json!({
        "attributes": {"documentType": {"type": "string", "name": "documentType"}},
        "decisions": [
            {
                "conditions": {"all": [
                    {"fact": "documentType", "operator": "in", "value": []}
                ]},
                "event": {"type": "100", "params": {"rule": "NuncaEn"}}
            },
            {
                "conditions": {"all": [
                    {"fact": "documentType", "operator": "notIn", "value": []}
                ]},
                "event": {"type": "200", "params": {"rule": "SiempreFuera"}}
            }
        ]
    }));

    let result = Engine::run(&rules, &fact_map([("documentType", "CC".into())]));
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(result.matched_rules[0].rule_name, "SiempreFuera");
    assert_eq!(result.total_points, 200);
}

#[test]
fn group_with_neither_key_is_vacuously_true() {
    let rules = load(serde_json::json!({
        "attributes": {},
        "decisions": [{
            "conditions": {},
            "event": {"type": "50", "params": {"rule": "Incondicional"}}
        }]
    }));

    let result = Engine::run(&rules, &FactMap::new());
    assert_eq!(result.total_points, 50);
}

#[test]
fn unknown_operator_in_document_degrades_to_warning() {
    let rules = load(serde_json::json!({
        "attributes": {"value": {"type": "number", "name": "value"}},
        "decisions": [
            {
                "conditions": {"all": [
                    {"fact": "value", "operator": "fuzzyMatch", "value": 5}
                ]},
                "event": {"type": "100", "params": {"rule": "Obsoleta"}}
            },
            {
                "conditions": {"all": [
                    {"fact": "value", "operator": "equal", "value": 5}
                ]},
                "event": {"type": "300", "params": {"rule": "Exacta"}}
            }
        ]
    }));

    let result = Engine::run(&rules, &fact_map([("value", 5.0.into())]));
    assert_eq!(result.total_points, 300);
    assert_eq!(result.matched_rules.len(), 1);
    assert_eq!(
        result.warnings,
        vec![EngineWarning::UnknownOperator {
            rule: "Obsoleta".to_string(),
            fact: "value".to_string(),
        }]
    );
}

#[test]
fn totals_are_order_independent() {
    let mut rules = income_rules();
    let facts = fact_map([("value", 15000.0.into()), ("documentType", "CC".into())]);
    let forward = Engine::run(&rules, &facts);

    rules.decisions.reverse();
    let reversed = Engine::run(&rules, &facts);

    assert_eq!(forward.total_points, reversed.total_points);
    // Only the reporting order differs
    assert_eq!(
        forward.matched_rules.iter().map(|m| &m.rule_name).rev().collect::<Vec<_>>(),
        reversed.matched_rules.iter().map(|m| &m.rule_name).collect::<Vec<_>>()
    );
}

#[test]
fn repeated_runs_are_identical() {
    let rules = income_rules();
    let facts = fact_map([("value", 15000.0.into()), ("documentType", "CC".into())]);
    assert_eq!(Engine::run(&rules, &facts), Engine::run(&rules, &facts));
}
