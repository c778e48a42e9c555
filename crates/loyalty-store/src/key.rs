//! Rule set identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one rule set: a program and a transaction type
///
/// Mirrors the program-id / transaction-type pair the rules API keys its
/// engine documents by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSetKey {
    /// Loyalty program identifier
    pub program_id: String,

    /// Transaction type the rule set applies to (e.g. "income")
    pub transaction_type: String,
}

impl RuleSetKey {
    /// Create a new key
    pub fn new(program_id: impl Into<String>, transaction_type: impl Into<String>) -> Self {
        Self {
            program_id: program_id.into(),
            transaction_type: transaction_type.into(),
        }
    }
}

impl fmt::Display for RuleSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.program_id, self.transaction_type)
    }
}
