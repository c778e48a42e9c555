//! Loyalty Store - Rule set persistence boundary
//!
//! The engine itself holds no state across calls; it evaluates whatever
//! rule set snapshot it is given. This crate owns the load/save seam: a
//! key type identifying one rule set per (program, transaction-type)
//! pair, an async [`RuleSetStore`] trait, and two backends (in-memory and
//! one JSON document per key on disk).
//!
//! Concurrency control over concurrent admin edits (read-modify-write
//! races) belongs to the surrounding system, not this crate.

pub mod error;
pub mod file_system;
pub mod key;
pub mod memory;
pub mod traits;

// Re-export main types
pub use error::{StoreError, StoreResult};
pub use file_system::FileSystemStore;
pub use key::RuleSetKey;
pub use memory::MemoryStore;
pub use traits::RuleSetStore;
