//! Core trait definition for rule set storage
//!
//! Implementations persist whole rule set documents; the engine consumes
//! them as snapshots and never writes. All operations are async for
//! non-blocking I/O, and implementations must be `Send + Sync` for use
//! across async tasks.

use async_trait::async_trait;
use loyalty_core::RuleSet;

use crate::error::StoreResult;
use crate::key::RuleSetKey;

/// Storage backend for rule sets, keyed by (program, transaction type)
///
/// The save/load pair must round-trip losslessly: `load` after `save`
/// yields a rule set deep-equal to the one saved.
#[async_trait]
pub trait RuleSetStore: Send + Sync {
    /// Load the rule set persisted under a key
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// no rule set exists for the key.
    async fn load(&self, key: &RuleSetKey) -> StoreResult<RuleSet>;

    /// Save or replace the rule set under a key
    async fn save(&self, key: &RuleSetKey, rule_set: &RuleSet) -> StoreResult<()>;

    /// Delete the rule set under a key
    async fn delete(&self, key: &RuleSetKey) -> StoreResult<()>;

    /// Check whether a rule set exists for a key
    async fn exists(&self, key: &RuleSetKey) -> StoreResult<bool>;

    /// List every key with a persisted rule set
    async fn list(&self) -> StoreResult<Vec<RuleSetKey>>;
}
