//! In-memory store implementation

use async_trait::async_trait;
use loyalty_core::RuleSet;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::key::RuleSetKey;
use crate::traits::RuleSetStore;

/// In-memory rule set store
///
/// Useful for tests and for embedding the engine without any persistence
/// backend. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<RuleSetKey, RuleSet>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted rule sets
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RuleSetStore for MemoryStore {
    async fn load(&self, key: &RuleSetKey) -> StoreResult<RuleSet> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { key: key.clone() })
    }

    async fn save(&self, key: &RuleSetKey, rule_set: &RuleSet) -> StoreResult<()> {
        tracing::debug!(key = %key, "saving rule set");
        self.entries
            .write()
            .await
            .insert(key.clone(), rule_set.clone());
        Ok(())
    }

    async fn delete(&self, key: &RuleSetKey) -> StoreResult<()> {
        match self.entries.write().await.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { key: key.clone() }),
        }
    }

    async fn exists(&self, key: &RuleSetKey) -> StoreResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn list(&self) -> StoreResult<Vec<RuleSetKey>> {
        let mut keys: Vec<RuleSetKey> = self.entries.read().await.keys().cloned().collect();
        keys.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> RuleSetKey {
        RuleSetKey::new("program-1", "income")
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let store = MemoryStore::new();
        let rule_set = RuleSet::with_income_defaults();

        store.save(&key(), &rule_set).await.unwrap();
        let loaded = store.load(&key()).await.unwrap();
        assert_eq!(loaded, rule_set);
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.load(&key()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let store = MemoryStore::new();
        store.save(&key(), &RuleSet::new()).await.unwrap();
        assert!(store.exists(&key()).await.unwrap());

        store.delete(&key()).await.unwrap();
        assert!(!store.exists(&key()).await.unwrap());
        assert!(store.delete(&key()).await.is_err());
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let store = MemoryStore::new();
        store
            .save(&RuleSetKey::new("p", "redemption"), &RuleSet::new())
            .await
            .unwrap();
        store
            .save(&RuleSetKey::new("p", "income"), &RuleSet::new())
            .await
            .unwrap();

        let keys = store.list().await.unwrap();
        assert_eq!(
            keys,
            vec![
                RuleSetKey::new("p", "income"),
                RuleSetKey::new("p", "redemption"),
            ]
        );
    }
}
