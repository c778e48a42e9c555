//! LoyaltyEngine - main API for evaluating and managing rule sets

use crate::error::{Result, SdkError};
use loyalty_core::RuleSet;
use loyalty_engine::{normalize_rule_set, validate_rule_set, Engine, EvaluationResult, FactMap};
use loyalty_store::{RuleSetKey, RuleSetStore, StoreError};
use std::sync::Arc;

/// High-level engine facade
///
/// Owns the injected store and runs the stateless evaluator against
/// whatever rule set snapshot the store returns. Safe to share across
/// tasks; evaluation itself takes no locks.
pub struct LoyaltyEngine {
    store: Arc<dyn RuleSetStore>,
    validate_on_save: bool,
}

impl LoyaltyEngine {
    /// Create an engine over a store
    ///
    /// Prefer [`LoyaltyEngineBuilder`](crate::LoyaltyEngineBuilder).
    pub fn new(store: Arc<dyn RuleSetStore>, validate_on_save: bool) -> Self {
        Self {
            store,
            validate_on_save,
        }
    }

    /// Evaluate a transaction's facts against the rule set for a key
    ///
    /// A key with no persisted rule set evaluates to the empty result: an
    /// unconfigured transaction type simply awards nothing. Store failures
    /// other than NotFound propagate.
    pub async fn evaluate(&self, key: &RuleSetKey, facts: &FactMap) -> Result<EvaluationResult> {
        let rule_set = match self.store.load(key).await {
            Ok(rule_set) => rule_set,
            Err(StoreError::NotFound { .. }) => {
                tracing::debug!(key = %key, "no rule set configured, awarding nothing");
                return Ok(EvaluationResult::default());
            }
            Err(err) => return Err(err.into()),
        };

        let result = Engine::run(&rule_set, facts);
        for warning in &result.warnings {
            tracing::warn!(key = %key, %warning, "malformed rule skipped");
        }
        Ok(result)
    }

    /// Load the rule set for a key
    pub async fn rule_set(&self, key: &RuleSetKey) -> Result<RuleSet> {
        Ok(self.store.load(key).await?)
    }

    /// Persist a rule set under a key
    ///
    /// Numeric-string condition values are coerced toward their declared
    /// fact types first; when validation is enabled (the default), a rule
    /// set that fails it is rejected with every collected error and
    /// nothing is written.
    pub async fn put_rule_set(&self, key: &RuleSetKey, mut rule_set: RuleSet) -> Result<()> {
        normalize_rule_set(&mut rule_set);
        if self.validate_on_save {
            validate_rule_set(&rule_set).map_err(SdkError::Validation)?;
        }
        Ok(self.store.save(key, &rule_set).await?)
    }

    /// Delete the rule set under a key
    pub async fn delete_rule_set(&self, key: &RuleSetKey) -> Result<()> {
        Ok(self.store.delete(key).await?)
    }

    /// List every key with a persisted rule set
    pub async fn list_rule_sets(&self) -> Result<Vec<RuleSetKey>> {
        Ok(self.store.list().await?)
    }
}
