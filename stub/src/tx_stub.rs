//! Transactional stub over committed state.
//!
//! `TxStub` combines a committed `StateStore` with a `StateOverlay` write
//! buffer for the duration of one contract invocation. Reads check the
//! overlay first, then fall through to the store. Nothing reaches the store
//! until the caller takes the write set and applies it.

use helloworld_primitives::{OverlayResult, StateOverlay, WriteSet};
use tracing::{debug, trace};

use crate::config::StubConfig;
use crate::error::StoreError;
use crate::state_store::StateStore;
use crate::traits::ChaincodeStub;

/// Per-invocation ledger stub with buffered writes.
pub struct TxStub<'a> {
    /// Committed state backend (read-only during the invocation).
    store: &'a dyn StateStore,
    /// Write buffer overlaying committed state.
    overlay: StateOverlay,
    /// Key, value and write-budget limits.
    config: StubConfig,
}

impl<'a> TxStub<'a> {
    /// Create a stub over `store` with the given limits.
    pub fn new(store: &'a dyn StateStore, config: StubConfig) -> Self {
        Self {
            store,
            overlay: StateOverlay::new(),
            config,
        }
    }

    /// Create a stub over `store` with default limits.
    pub fn with_defaults(store: &'a dyn StateStore) -> Self {
        Self::new(store, StubConfig::default())
    }

    /// Access the write buffer for assertions.
    pub fn overlay(&self) -> &StateOverlay {
        &self.overlay
    }

    /// Finish the invocation and hand out its buffered writes.
    pub fn into_write_set(self) -> WriteSet {
        let write_set = self.overlay.into_write_set();
        debug!(writes = write_set.len(), "invocation write set sealed");
        write_set
    }

    fn check_key(&self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        Ok(())
    }

    fn check_budget(&self, added: usize) -> Result<(), StoreError> {
        let projected = self.overlay.total_write_bytes().saturating_add(added as u64);
        if projected > self.config.max_write_bytes {
            return Err(StoreError::WriteLimit {
                limit: self.config.max_write_bytes,
            });
        }
        Ok(())
    }
}

impl ChaincodeStub for TxStub<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        match self.overlay.get(key) {
            OverlayResult::Found(value) => Ok(Some(value)),
            OverlayResult::Deleted => Ok(None),
            OverlayResult::NotInOverlay => self.store.get(key),
        }
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check_key(key)?;
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        self.check_budget(key.len() + value.len())?;

        trace!(key, bytes = value.len(), "put buffered");
        self.overlay.put(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_key(key)?;
        self.check_budget(key.len())?;

        trace!(key, "delete buffered");
        self.overlay.delete(key.to_string());
        Ok(())
    }
}
