//! `helloworld-contract` — the helloworld keyed-record chaincode.
//!
//! Every mutating operation follows the same guard: check existence, branch,
//! then act. The guard is a service-level check and is not atomic with the
//! write that follows; the backend's put semantics decide concurrent races.
//!
//! ## Architecture
//!
//! - [`service::RecordService`] — existence-guarded create/read/update/delete
//! - [`contract::HelloworldContract`] — the `helloworld` entity and its named operations
//! - [`context::Context`] — per-invocation handle carrying the ledger stub
//! - [`dispatch`] — function-name routing and invocation responses
//! - [`executor::Executor`] — runs one invocation against an in-memory ledger

pub mod error;
pub mod context;
pub mod service;
pub mod contract;
pub mod dispatch;
pub mod executor;

// Re-export key types for convenience
pub use error::ContractError;
pub use context::Context;
pub use service::RecordService;
pub use contract::HelloworldContract;
pub use dispatch::{Contract, Response};
pub use executor::Executor;
pub use helloworld_primitives::Record;
