//! Fact maps: the runtime input of an evaluation
//!
//! A fact map is the flat, caller-supplied mapping from fact name to
//! concrete value for the transaction under evaluation (e.g.
//! `{ value: 15000, identificationTypeId: 1, documentNumber: "123..." }`).
//! It is read-only for the duration of a run and never persisted.

use loyalty_core::Value;
use std::collections::HashMap;

/// Concrete fact values for one evaluation
pub type FactMap = HashMap<String, Value>;

/// Build a fact map from (name, value) pairs
///
/// # Example
/// ```
/// use loyalty_engine::facts::fact_map;
///
/// let facts = fact_map([
///     ("value", 15000.0.into()),
///     ("documentType", "CC".into()),
/// ]);
/// assert_eq!(facts.len(), 2);
/// ```
pub fn fact_map<I>(entries: I) -> FactMap
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
