//! `helloworld-stub` — ledger access for the helloworld chaincode.
//!
//! This crate defines the backend interface the contract runs against and a
//! reference in-memory ledger. It provides:
//!
//! - `ChaincodeStub` trait — get/put/delete the contract calls per invocation
//! - `StateStore` trait — committed state storage abstraction
//! - `MemStore` — in-memory `StateStore` that applies write sets
//! - `TxStub` — `ChaincodeStub` buffering writes over a `StateStore`
//! - `StubConfig` — key, value and write-budget limits
//! - `StoreError` — backend error type

pub mod error;
pub mod config;
pub mod state_store;
pub mod mem_store;
pub mod traits;
pub mod tx_stub;

// Re-export commonly used types at the crate root.
pub use error::StoreError;
pub use config::StubConfig;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use traits::ChaincodeStub;
pub use tx_stub::TxStub;
