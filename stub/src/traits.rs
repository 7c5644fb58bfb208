//! Ledger stub trait — the backend contract seen by chaincode.
//!
//! Every contract operation talks to the ledger only through this trait.
//! Implementations decide durability, isolation and limits; the contract
//! assumes nothing beyond per-key get/put/delete.

use crate::error::StoreError;

/// Per-invocation handle onto ledger state.
pub trait ChaincodeStub {
    /// Read the raw bytes stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was deleted.
    /// Some backends report absence as an empty payload instead; callers
    /// must treat `Some(vec![])` the same as `None`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, unconditionally replacing any prior value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`. Deleting an absent key is not an error at this layer.
    fn delete_state(&mut self, key: &str) -> Result<(), StoreError>;
}
