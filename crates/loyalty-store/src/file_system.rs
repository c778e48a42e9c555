//! File system based store implementation
//!
//! Persists one pretty-printed JSON document per key under
//! `<root>/<program_id>/<transaction_type>.json`.

use async_trait::async_trait;
use loyalty_core::RuleSet;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{StoreError, StoreResult};
use crate::key::RuleSetKey;
use crate::traits::RuleSetStore;

/// File system rule set store
pub struct FileSystemStore {
    /// Root directory holding the rule set documents
    root_path: PathBuf,
}

impl FileSystemStore {
    /// Create a store rooted at an existing directory
    pub fn new<P: AsRef<Path>>(root_path: P) -> StoreResult<Self> {
        let path = root_path.as_ref();
        if !path.is_dir() {
            return Err(StoreError::Other(format!(
                "not a directory: {}",
                path.display()
            )));
        }
        Ok(Self {
            root_path: path.to_path_buf(),
        })
    }

    /// Resolve the document path for a key
    ///
    /// Key components become path segments, so anything that would escape
    /// the root is rejected.
    fn resolve_path(&self, key: &RuleSetKey) -> StoreResult<PathBuf> {
        for component in [&key.program_id, &key.transaction_type] {
            if component.is_empty()
                || component.contains('/')
                || component.contains('\\')
                || component.contains("..")
            {
                return Err(StoreError::InvalidKey {
                    component: component.clone(),
                });
            }
        }
        Ok(self
            .root_path
            .join(&key.program_id)
            .join(format!("{}.json", key.transaction_type)))
    }
}

#[async_trait]
impl RuleSetStore for FileSystemStore {
    async fn load(&self, key: &RuleSetKey) -> StoreResult<RuleSet> {
        let path = self.resolve_path(key)?;
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { key: key.clone() });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, key: &RuleSetKey, rule_set: &RuleSet) -> StoreResult<()> {
        let path = self.resolve_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(rule_set)?;
        tracing::debug!(key = %key, path = %path.display(), "writing rule set document");
        fs::write(&path, content).await?;
        Ok(())
    }

    async fn delete(&self, key: &RuleSetKey) -> StoreResult<()> {
        let path = self.resolve_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound { key: key.clone() })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn exists(&self, key: &RuleSetKey) -> StoreResult<bool> {
        let path = self.resolve_path(key)?;
        Ok(fs::try_exists(&path).await?)
    }

    async fn list(&self) -> StoreResult<Vec<RuleSetKey>> {
        let mut keys = Vec::new();
        let mut programs = fs::read_dir(&self.root_path).await?;

        while let Some(program_entry) = programs.next_entry().await? {
            if !program_entry.path().is_dir() {
                continue;
            }
            let program_id = program_entry.file_name().to_string_lossy().into_owned();

            let mut documents = fs::read_dir(program_entry.path()).await?;
            while let Some(doc_entry) = documents.next_entry().await? {
                let path = doc_entry.path();
                if path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(RuleSetKey::new(program_id.clone(), stem));
                }
            }
        }

        keys.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        Ok(keys)
    }
}
