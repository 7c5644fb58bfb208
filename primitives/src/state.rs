//! Transactional state overlay and write sets.
//!
//! The overlay buffers writes during one contract invocation and makes them
//! visible to subsequent reads within the same invocation. When the
//! invocation finishes, the buffered writes are handed out as a [`WriteSet`]
//! which the committed store applies in key order.

use std::collections::BTreeMap;

use crate::types::{u64_to_le_bytes, Hash};

/// Transactional write buffer overlaying committed state.
///
/// Uses `BTreeMap` so the resulting write set has a deterministic order.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    /// Buffered writes: key → Some(value) for puts, key → None for deletions.
    writes: BTreeMap<String, Option<Vec<u8>>>,
    /// Total bytes written (keys + values) for enforcing the write budget.
    total_write_bytes: u64,
}

/// Result of looking up a key in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayResult {
    /// Key was written in the overlay with this value.
    Found(Vec<u8>),
    /// Key was explicitly deleted in this overlay.
    Deleted,
    /// Key is not in the overlay — caller must check committed state.
    NotInOverlay,
}

impl StateOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a key-value pair in the overlay, replacing any earlier entry.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.release(&key);
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add((key.len() + value.len()) as u64);
        self.writes.insert(key, Some(value));
    }

    /// Mark a key as deleted in the overlay.
    ///
    /// Subsequent reads for this key return `Deleted` rather than falling
    /// through to committed state.
    pub fn delete(&mut self, key: String) {
        self.release(&key);
        // Deletion still counts the key bytes toward the write budget
        self.total_write_bytes = self.total_write_bytes.saturating_add(key.len() as u64);
        self.writes.insert(key, None);
    }

    /// Subtract the bytes of any previous entry for `key`.
    fn release(&mut self, key: &str) {
        if let Some(prev) = self.writes.get(key) {
            let prev_bytes = key.len() as u64 + prev.as_ref().map_or(0, |v| v.len() as u64);
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
    }

    /// Look up a key in the overlay.
    pub fn get(&self, key: &str) -> OverlayResult {
        match self.writes.get(key) {
            Some(Some(value)) => OverlayResult::Found(value.clone()),
            Some(None) => OverlayResult::Deleted,
            None => OverlayResult::NotInOverlay,
        }
    }

    /// Total bytes buffered (keys + values) for limit enforcement.
    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }

    /// Returns the number of keys touched (put or deleted).
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if no writes have been buffered.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Consume the overlay into its write set.
    pub fn into_write_set(self) -> WriteSet {
        WriteSet { writes: self.writes }
    }
}

/// Ordered writes produced by one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    writes: BTreeMap<String, Option<Vec<u8>>>,
}

impl WriteSet {
    /// Iterate writes in key order. `None` marks a deletion.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[u8]>)> {
        self.writes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns the number of keys written.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// BLAKE3 digest over the canonical encoding of the write set.
    ///
    /// Each entry is `[key_len: 8 LE][key][tag: 1]` followed, for puts
    /// (`tag = 1`), by `[value_len: 8 LE][value]`. Deletions use `tag = 0`.
    /// Equal write sets always produce equal digests.
    pub fn digest(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        for (key, value) in &self.writes {
            hasher.update(&u64_to_le_bytes(key.len() as u64));
            hasher.update(key.as_bytes());
            match value {
                Some(v) => {
                    hasher.update(&[1]);
                    hasher.update(&u64_to_le_bytes(v.len() as u64));
                    hasher.update(v);
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }
        *hasher.finalize().as_bytes()
    }
}

impl IntoIterator for WriteSet {
    type Item = (String, Option<Vec<u8>>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Option<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}
