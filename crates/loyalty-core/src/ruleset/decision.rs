//! Decisions and their point-award events

use super::condition::ConditionGroup;
use serde::{Deserialize, Serialize};

/// Event payload of a decision
///
/// On the wire the point award travels as a numeric string under `type`
/// and the human-readable rule name under `params.rule`, exactly as the
/// rules API persists json-rules-engine events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEvent {
    /// Points to award, as a numeric string (wire name: `type`)
    #[serde(rename = "type")]
    pub points: String,

    /// Event parameters
    pub params: EventParams,
}

/// Parameters of a rule event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParams {
    /// Human-readable rule name, used for audit, not evaluation
    pub rule: String,
}

impl RuleEvent {
    /// Create a new event awarding `points` under the rule name `rule`
    pub fn new(points: i64, rule: impl Into<String>) -> Self {
        Self {
            points: points.to_string(),
            params: EventParams { rule: rule.into() },
        }
    }

    /// Parse the point award
    ///
    /// Returns `None` when the wire string is not a non-negative integer;
    /// the evaluator treats that as a configuration error worth 0 points.
    pub fn parse_points(&self) -> Option<i64> {
        self.points.trim().parse::<i64>().ok().filter(|p| *p >= 0)
    }

    /// The rule name carried in the event parameters
    pub fn rule_name(&self) -> &str {
        &self.params.rule
    }
}

/// A decision: a condition group paired with a point-award event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Conditions gating the award
    pub conditions: ConditionGroup,

    /// Point-award event fired when the conditions match
    pub event: RuleEvent,

    /// Enabled flag; absent means enabled. Kept optional so a persisted
    /// document round-trips byte-for-byte whether or not it carries the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Decision {
    /// Create a new enabled decision
    pub fn new(conditions: ConditionGroup, event: RuleEvent) -> Self {
        Self {
            conditions,
            event,
            enabled: None,
        }
    }

    /// Set the enabled flag explicitly
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Resolve the enabled default: only an explicit `false` disables
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// The rule name of this decision's event
    pub fn rule_name(&self) -> &str {
        self.event.rule_name()
    }
}
