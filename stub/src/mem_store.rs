//! In-memory committed state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering, and commits write sets produced by a `TxStub`.

use std::collections::BTreeMap;

use helloworld_primitives::{Hash, WriteSet, types::hash_to_hex};
use tracing::debug;

use crate::error::StoreError;
use crate::state_store::StateStore;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Insert a key-value pair into the store.
    pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.data.insert(key.into(), value);
    }

    /// Commit a write set. Puts overwrite, deletions remove.
    ///
    /// Returns the write set digest so callers can record what was applied.
    pub fn apply(&mut self, write_set: WriteSet) -> Hash {
        let digest = write_set.digest();
        let count = write_set.len();
        for (key, value) in write_set {
            match value {
                Some(v) => {
                    self.data.insert(key, v);
                }
                None => {
                    self.data.remove(&key);
                }
            }
        }
        debug!(writes = count, digest = %hash_to_hex(&digest), "write set committed");
        digest
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helloworld_primitives::StateOverlay;

    #[test]
    fn test_empty_store() {
        let store = MemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);
        assert!(!store.contains("missing").unwrap());
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = MemStore::new();
        store.insert("1001", b"value1".to_vec());

        assert_eq!(store.get("1001").unwrap(), Some(b"value1".to_vec()));
        assert!(store.contains("1001").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_data() {
        let mut data = BTreeMap::new();
        data.insert("a".to_string(), b"1".to_vec());
        data.insert("b".to_string(), b"2".to_vec());

        let store = MemStore::with_data(data);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_apply_write_set() {
        let mut store = MemStore::new();
        store.insert("keep", b"k".to_vec());
        store.insert("drop", b"d".to_vec());

        let mut overlay = StateOverlay::new();
        overlay.put("new".into(), b"n".to_vec());
        overlay.put("keep".into(), b"k2".to_vec());
        overlay.delete("drop".into());
        let write_set = overlay.into_write_set();
        let expected = write_set.digest();

        assert_eq!(store.apply(write_set), expected);
        assert_eq!(store.get("new").unwrap(), Some(b"n".to_vec()));
        assert_eq!(store.get("keep").unwrap(), Some(b"k2".to_vec()));
        assert_eq!(store.get("drop").unwrap(), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_value_is_stored() {
        let mut store = MemStore::new();
        store.insert("empty", Vec::new());

        // The store reports presence; interpreting empty payloads is the caller's job.
        assert_eq!(store.get("empty").unwrap(), Some(Vec::new()));
        assert!(store.contains("empty").unwrap());
    }
}
