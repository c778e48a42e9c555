//! Conditions, operators, and condition groups

use crate::types::Value;
use serde::{Deserialize, Deserializer, Serialize};

/// Condition operators
///
/// Names follow the json-rules-engine vocabulary the rules API persists.
/// Any unrecognized operator string deserializes to [`Operator::Unknown`]
/// rather than failing the whole rule-set load; the evaluator fails such
/// conditions closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Strict equality (type-sensitive)
    Equal,
    /// Strict inequality
    NotEqual,
    /// Numeric greater-than (>)
    GreaterThan,
    /// Numeric greater-than-or-equal (>=)
    GreaterThanInclusive,
    /// Numeric less-than (<)
    LessThan,
    /// Numeric less-than-or-equal (<=)
    LessThanInclusive,
    /// Fact value is a member of the condition's array value
    In,
    /// Fact value is not a member of the condition's array value
    NotIn,
    /// Fact value (array or scalar) contains the condition value
    Contains,
    /// Fact value does not contain the condition value
    DoesNotContain,
    /// Catch-all for stale or hand-edited operator strings
    #[serde(other)]
    Unknown,
}

impl Operator {
    /// Returns true if this is an ordering operator (numeric comparison)
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Operator::GreaterThan
                | Operator::GreaterThanInclusive
                | Operator::LessThan
                | Operator::LessThanInclusive
        )
    }

    /// Returns true if this operator compares against an array value
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Returns true if this is a recognized operator
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Operator::Unknown)
    }
}

/// A single comparison between a fact and a literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Fact name, looked up in the fact map and the registry
    pub fact: String,

    /// Comparison operator
    pub operator: Operator,

    /// Value to compare against (scalar, or array for membership operators)
    pub value: Value,
}

impl Condition {
    /// Create a new condition
    pub fn new(fact: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            fact: fact.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Boolean combination of conditions: `all` (AND) or `any` (OR)
///
/// Exactly one key is populated in a well-formed group. Deserialization
/// accepts the looser persisted form: a non-empty `any` wins, otherwise
/// `all`, and a group carrying neither key becomes an empty `All` group
/// (vacuously true, matching the authoring UI's all-default convention).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionGroup {
    /// Every condition must hold (empty => vacuously true)
    All {
        /// Conjunction members
        all: Vec<Condition>,
    },
    /// At least one condition must hold (empty => vacuously false)
    Any {
        /// Disjunction members
        any: Vec<Condition>,
    },
}

impl ConditionGroup {
    /// Create an `all` (AND) group
    pub fn all(conditions: Vec<Condition>) -> Self {
        ConditionGroup::All { all: conditions }
    }

    /// Create an `any` (OR) group
    pub fn any(conditions: Vec<Condition>) -> Self {
        ConditionGroup::Any { any: conditions }
    }

    /// The conditions in this group, regardless of combinator
    pub fn conditions(&self) -> &[Condition] {
        match self {
            ConditionGroup::All { all } => all,
            ConditionGroup::Any { any } => any,
        }
    }

    /// Returns true if this is a conjunction (`all`) group
    pub fn is_conjunction(&self) -> bool {
        matches!(self, ConditionGroup::All { .. })
    }

    /// Returns true if any condition references the given fact
    pub fn references_fact(&self, fact: &str) -> bool {
        self.conditions().iter().any(|c| c.fact == fact)
    }
}

/// Loose persisted form: `all` and/or `any`, either possibly absent
#[derive(Deserialize)]
struct ConditionGroupRepr {
    #[serde(default)]
    all: Option<Vec<Condition>>,
    #[serde(default)]
    any: Option<Vec<Condition>>,
}

impl From<ConditionGroupRepr> for ConditionGroup {
    fn from(repr: ConditionGroupRepr) -> Self {
        match (repr.all, repr.any) {
            (_, Some(any)) if !any.is_empty() => ConditionGroup::Any { any },
            (Some(all), _) => ConditionGroup::All { all },
            (None, Some(any)) => ConditionGroup::Any { any },
            (None, None) => ConditionGroup::All { all: Vec::new() },
        }
    }
}

impl<'de> Deserialize<'de> for ConditionGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ConditionGroupRepr::deserialize(deserializer).map(Into::into)
    }
}
