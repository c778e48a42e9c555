//! Fact attribute declarations and the fact registry
//!
//! The fact registry is the authority on which fact names are admissible in
//! a rule set and what type each fact carries. Condition values are checked
//! against these declarations; unknown facts never match (fail closed).

use super::value::Value;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared type of a fact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactType {
    /// String-typed fact, compared as a string
    String,
    /// Number-typed fact, compared numerically
    Number,
}

impl FactType {
    /// Check whether a runtime value has this declared type
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            FactType::String => matches!(value, Value::String(_)),
            FactType::Number => matches!(value, Value::Number(_)),
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FactType::String => "string",
            FactType::Number => "number",
        }
    }
}

impl std::fmt::Display for FactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Declaration of one admissible fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactAttribute {
    /// Fact name (also the key in the registry)
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub fact_type: FactType,
}

impl FactAttribute {
    /// Create a new fact attribute
    pub fn new(name: impl Into<String>, fact_type: FactType) -> Self {
        Self {
            name: name.into(),
            fact_type,
        }
    }

    /// Create a string-typed attribute
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FactType::String)
    }

    /// Create a number-typed attribute
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FactType::Number)
    }
}

/// Registry of admissible facts, keyed by fact name
///
/// Serializes as the plain `{ name: { name, type } }` object the rules API
/// persists under `attributes`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactRegistry(HashMap<String, FactAttribute>);

impl FactRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Default facts of the accumulation (income) transaction body
    pub fn income_defaults() -> Self {
        let mut registry = Self::new();
        for attr in [
            FactAttribute::number("identificationTypeId"),
            FactAttribute::string("documentNumber"),
            FactAttribute::number("value"),
        ] {
            registry.0.insert(attr.name.clone(), attr);
        }
        registry
    }

    /// Look up a fact declaration by name
    pub fn get(&self, name: &str) -> Option<&FactAttribute> {
        self.0.get(name)
    }

    /// Check whether a fact is declared
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Declare a new fact
    ///
    /// Fails if a fact with the same name already exists.
    pub fn declare(&mut self, attribute: FactAttribute) -> Result<()> {
        if self.0.contains_key(&attribute.name) {
            return Err(CoreError::DuplicateFact(attribute.name));
        }
        self.0.insert(attribute.name.clone(), attribute);
        Ok(())
    }

    /// Insert or replace a fact declaration
    pub fn insert(&mut self, attribute: FactAttribute) {
        self.0.insert(attribute.name.clone(), attribute);
    }

    /// Remove a fact declaration, returning it if present
    ///
    /// Referential-integrity checks against decisions live on
    /// [`RuleSet::remove_attribute`](crate::ruleset::RuleSet::remove_attribute).
    pub fn remove(&mut self, name: &str) -> Option<FactAttribute> {
        self.0.remove(name)
    }

    /// Number of declared facts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over declared facts
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FactAttribute)> {
        self.0.iter()
    }

    /// Check a runtime value against the declared type of a fact
    ///
    /// Returns `false` for unknown facts and for type mismatches; never
    /// errors. Numeric-string coercion is an authoring-time step
    /// ([`coerce_value`](Self::coerce_value)), not part of this check.
    pub fn validate_value(&self, fact: &str, value: &Value) -> bool {
        match self.0.get(fact) {
            Some(attr) => attr.fact_type.admits(value),
            None => false,
        }
    }

    /// Coerce a free-text condition value toward the declared fact type
    ///
    /// When the fact is declared `number` and the value is a numeric string
    /// (or an array containing numeric strings), the string form is parsed
    /// to a number. Everything else passes through unchanged. Applied once
    /// at authoring time, never per evaluation.
    pub fn coerce_value(&self, fact: &str, value: Value) -> Value {
        let Some(attr) = self.0.get(fact) else {
            return value;
        };
        if attr.fact_type != FactType::Number {
            return value;
        }
        Self::coerce_numeric(value)
    }

    fn coerce_numeric(value: Value) -> Value {
        match value {
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::String(s),
            },
            Value::Array(items) => {
                Value::Array(items.into_iter().map(Self::coerce_numeric).collect())
            }
            other => other,
        }
    }
}
