//! Existence-guarded record operations.
//!
//! Each mutating call is `{check existence} → {branch} → {act}`:
//!
//! | op     | guard fails when | act              |
//! |--------|------------------|------------------|
//! | create | key present      | put encoded record |
//! | read   | key absent       | get + decode     |
//! | update | key absent       | put encoded record |
//! | delete | key absent       | delete           |
//!
//! A present-but-empty payload counts as absent. A guard failure leaves
//! ledger state untouched.

use helloworld_primitives::{Record, decode_record, encode_record};
use tracing::{debug, warn};

use crate::context::Context;
use crate::error::ContractError;

/// Stateless CRUD façade for one entity kind.
///
/// The entity name only shapes error messages and log fields; keys are used
/// as-is in the ledger key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordService {
    entity: &'static str,
}

impl RecordService {
    /// Create a service for records of kind `entity`.
    pub const fn new(entity: &'static str) -> Self {
        Self { entity }
    }

    /// Entity name used in messages.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns true iff `key` holds a non-empty payload.
    pub fn exists(&self, ctx: &Context<'_>, key: &str) -> Result<bool, ContractError> {
        let payload = ctx.stub().get_state(key)?;
        Ok(payload.is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Store a new record. Fails with `AlreadyExists` if `key` is occupied.
    pub fn create(&self, ctx: &mut Context<'_>, key: &str, value: &str) -> Result<(), ContractError> {
        if self.exists(ctx, key)? {
            warn!(tx_id = ctx.tx_id(), entity = self.entity, key, "create rejected: already exists");
            return Err(ContractError::AlreadyExists {
                entity: self.entity,
                key: key.to_string(),
            });
        }
        let bytes = self.encode(key, &Record::new(value))?;
        ctx.stub_mut().put_state(key, &bytes)?;
        debug!(tx_id = ctx.tx_id(), entity = self.entity, key, "record created");
        Ok(())
    }

    /// Load the record under `key`. Fails with `NotFound` if absent.
    ///
    /// Undecodable bytes are reported as `CorruptData`, never as absence.
    pub fn read(&self, ctx: &Context<'_>, key: &str) -> Result<Record, ContractError> {
        if !self.exists(ctx, key)? {
            warn!(tx_id = ctx.tx_id(), entity = self.entity, key, "read rejected: does not exist");
            return Err(self.not_found(key));
        }
        let bytes = match ctx.stub().get_state(key)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            // Removed between the guard and the fetch.
            _ => return Err(self.not_found(key)),
        };
        decode_record(&bytes).map_err(|source| ContractError::CorruptData {
            entity: self.entity,
            key: key.to_string(),
            source,
        })
    }

    /// Replace the record under `key` wholesale. Fails with `NotFound` if absent.
    pub fn update(&self, ctx: &mut Context<'_>, key: &str, new_value: &str) -> Result<(), ContractError> {
        if !self.exists(ctx, key)? {
            warn!(tx_id = ctx.tx_id(), entity = self.entity, key, "update rejected: does not exist");
            return Err(self.not_found(key));
        }
        let bytes = self.encode(key, &Record::new(new_value))?;
        ctx.stub_mut().put_state(key, &bytes)?;
        debug!(tx_id = ctx.tx_id(), entity = self.entity, key, "record updated");
        Ok(())
    }

    /// Remove the record under `key`. Fails with `NotFound` if absent.
    pub fn delete(&self, ctx: &mut Context<'_>, key: &str) -> Result<(), ContractError> {
        if !self.exists(ctx, key)? {
            warn!(tx_id = ctx.tx_id(), entity = self.entity, key, "delete rejected: does not exist");
            return Err(self.not_found(key));
        }
        ctx.stub_mut().delete_state(key)?;
        debug!(tx_id = ctx.tx_id(), entity = self.entity, key, "record deleted");
        Ok(())
    }

    fn not_found(&self, key: &str) -> ContractError {
        ContractError::NotFound {
            entity: self.entity,
            key: key.to_string(),
        }
    }

    fn encode(&self, key: &str, record: &Record) -> Result<Vec<u8>, ContractError> {
        encode_record(record).map_err(|source| ContractError::Encode {
            entity: self.entity,
            key: key.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helloworld_stub::{MemStore, StoreError, TxStub};

    const SERVICE: RecordService = RecordService::new("widget");

    fn store_with(key: &str, payload: &[u8]) -> MemStore {
        let mut store = MemStore::new();
        store.insert(key, payload.to_vec());
        store
    }

    #[test]
    fn test_exists_treats_empty_payload_as_absent() {
        let store = store_with("blank", b"");
        let mut stub = TxStub::with_defaults(&store);
        let ctx = Context::new(&mut stub, "tx-1");

        assert!(!SERVICE.exists(&ctx, "blank").unwrap());
        assert!(!SERVICE.exists(&ctx, "missing").unwrap());
    }

    #[test]
    fn test_create_over_empty_payload_succeeds() {
        let store = store_with("blank", b"");
        let mut stub = TxStub::with_defaults(&store);
        let mut ctx = Context::new(&mut stub, "tx-1");

        SERVICE.create(&mut ctx, "blank", "filled").unwrap();
        assert_eq!(SERVICE.read(&ctx, "blank").unwrap(), Record::new("filled"));
    }

    #[test]
    fn test_entity_shapes_messages() {
        let store = MemStore::new();
        let mut stub = TxStub::with_defaults(&store);
        let mut ctx = Context::new(&mut stub, "tx-1");

        let err = SERVICE.delete(&mut ctx, "w1").unwrap_err();
        assert_eq!(err.to_string(), "The widget w1 does not exist");
        assert_eq!(SERVICE.entity(), "widget");
    }

    #[test]
    fn test_read_corrupt_payload() {
        let store = store_with("bad", b"{not json");
        let mut stub = TxStub::with_defaults(&store);
        let ctx = Context::new(&mut stub, "tx-1");

        let err = SERVICE.read(&ctx, "bad").unwrap_err();
        assert!(matches!(err, ContractError::CorruptData { ref key, .. } if key == "bad"));
        assert!(err.to_string().starts_with("The widget bad holds corrupt data"));
    }

    #[test]
    fn test_backend_rejection_propagates() {
        let store = MemStore::new();
        let mut stub = TxStub::with_defaults(&store);
        let mut ctx = Context::new(&mut stub, "tx-1");

        // The stub refuses empty keys; the service does not pre-validate.
        let err = SERVICE.create(&mut ctx, "", "v").unwrap_err();
        assert!(matches!(err, ContractError::Backend(StoreError::EmptyKey)));
    }

    #[test]
    fn test_guard_failure_leaves_state_untouched() {
        let store = MemStore::new();
        let mut stub = TxStub::with_defaults(&store);
        {
            let mut ctx = Context::new(&mut stub, "tx-1");
            assert!(SERVICE.update(&mut ctx, "w1", "v").is_err());
            assert!(SERVICE.delete(&mut ctx, "w1").is_err());
        }
        assert!(stub.overlay().is_empty());
    }
}
