//! Builder pattern for LoyaltyEngine

use crate::engine::LoyaltyEngine;
use crate::error::Result;
use loyalty_store::{FileSystemStore, MemoryStore, RuleSetStore};
use std::path::Path;
use std::sync::Arc;

/// Builder for [`LoyaltyEngine`]
///
/// # Example
///
/// ```rust,ignore
/// use loyalty_sdk::LoyaltyEngineBuilder;
///
/// // Rule sets on disk, one JSON document per (program, transaction type)
/// let engine = LoyaltyEngineBuilder::new()
///     .with_rules_dir("rules")?
///     .build();
///
/// // In-memory (tests, embedding)
/// let engine = LoyaltyEngineBuilder::new()
///     .with_memory_store()
///     .build();
/// ```
pub struct LoyaltyEngineBuilder {
    store: Option<Arc<dyn RuleSetStore>>,
    validate_on_save: bool,
}

impl Default for LoyaltyEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoyaltyEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            store: None,
            validate_on_save: true,
        }
    }

    /// Use a custom store implementation
    pub fn with_store(mut self, store: Arc<dyn RuleSetStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use an in-memory store
    pub fn with_memory_store(self) -> Self {
        self.with_store(Arc::new(MemoryStore::new()))
    }

    /// Use a file system store rooted at an existing directory
    pub fn with_rules_dir<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let store = FileSystemStore::new(path)?;
        Ok(self.with_store(Arc::new(store)))
    }

    /// Enable or disable authoring-time validation before saves (default: on)
    pub fn validate_on_save(mut self, validate: bool) -> Self {
        self.validate_on_save = validate;
        self
    }

    /// Build the engine
    ///
    /// Defaults to an in-memory store when none was configured.
    pub fn build(self) -> LoyaltyEngine {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        LoyaltyEngine::new(store, self.validate_on_save)
    }
}
