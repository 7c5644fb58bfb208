//! Shared test helpers for integration tests.
//!
//! Provides a recording stub that serves seeded reads and records every
//! write call, a stub whose backend always fails, and seeding helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;

use helloworld_stub::{ChaincodeStub, MemStore, StoreError};

/// Key seeded with `{"value":"helloworld 1001 value"}`.
pub const SEEDED_1001: &str = "1001";
/// Key seeded with `{"value":"helloworld 1002 value"}`.
pub const SEEDED_1002: &str = "1002";
/// Key never seeded.
pub const MISSING: &str = "1003";

/// Encoded record bytes for `value`, built by hand to pin the wire format.
pub fn record_bytes(value: &str) -> Vec<u8> {
    format!("{{\"value\":\"{}\"}}", value).into_bytes()
}

/// Stub that answers reads from fixed seed data and records writes.
///
/// Writes are recorded but never become visible to reads, so each test
/// observes exactly the calls one operation makes.
#[derive(Debug, Default)]
pub struct RecordingStub {
    seeded: BTreeMap<String, Vec<u8>>,
    pub puts: Vec<(String, Vec<u8>)>,
    pub deletes: Vec<String>,
}

impl RecordingStub {
    /// Stub seeded with the `1001` and `1002` helloworld records.
    pub fn seeded() -> Self {
        let mut seeded = BTreeMap::new();
        seeded.insert(SEEDED_1001.to_string(), record_bytes("helloworld 1001 value"));
        seeded.insert(SEEDED_1002.to_string(), record_bytes("helloworld 1002 value"));
        Self {
            seeded,
            ..Self::default()
        }
    }

    pub fn with(mut self, key: &str, payload: &[u8]) -> Self {
        self.seeded.insert(key.to_string(), payload.to_vec());
        self
    }

    pub fn untouched(&self) -> bool {
        self.puts.is_empty() && self.deletes.is_empty()
    }
}

impl ChaincodeStub for RecordingStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        // Absent keys read as an empty payload, not `None`.
        Ok(Some(self.seeded.get(key).cloned().unwrap_or_default()))
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.puts.push((key.to_string(), value.to_vec()));
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.deletes.push(key.to_string());
        Ok(())
    }
}

/// Stub whose every call fails with a backend error.
pub struct FailingStub;

pub fn backend_down() -> StoreError {
    StoreError::Internal("peer unavailable".into())
}

impl ChaincodeStub for FailingStub {
    fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(backend_down())
    }

    fn put_state(&mut self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(backend_down())
    }

    fn delete_state(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(backend_down())
    }
}

/// In-memory committed store seeded with the `1001` and `1002` records.
pub fn seeded_store() -> MemStore {
    let mut store = MemStore::new();
    store.insert(SEEDED_1001, record_bytes("helloworld 1001 value"));
    store.insert(SEEDED_1002, record_bytes("helloworld 1002 value"));
    store
}
