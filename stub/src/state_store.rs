//! Committed state storage abstraction.
//!
//! `StateStore` is the read side of the ledger: the state as of the last
//! commit. A `TxStub` layers a write buffer over it so an invocation's reads
//! check buffered writes first, then fall through to the store.

use crate::error::StoreError;

/// Abstraction over committed state storage.
pub trait StateStore: Send + Sync {
    /// Get the value for a key from committed state.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Check if a key exists in committed state.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
