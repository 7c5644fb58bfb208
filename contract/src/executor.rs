//! Single-invocation executor over an in-memory ledger.
//!
//! `Executor::execute` runs one contract invocation the way a peer does:
//!
//! 1. Open a `TxStub` over committed state
//! 2. Invoke the named function with a fresh `Context`
//! 3. On success, apply the write set to the store
//! 4. On failure, discard buffered writes
//!
//! Invocations are atomic: a failed invocation leaves committed state
//! exactly as it was.

use helloworld_stub::{MemStore, StubConfig, TxStub};
use tracing::{debug, warn};

use crate::context::Context;
use crate::dispatch::{Contract, Response};

/// Stateless invocation driver.
pub struct Executor;

impl Executor {
    /// Execute `function` on `contract` against `store`, committing on success.
    pub fn execute(
        contract: &dyn Contract,
        store: &mut MemStore,
        config: &StubConfig,
        tx_id: &str,
        function: &str,
        args: &[&str],
    ) -> Response {
        let outcome = {
            let mut stub = TxStub::new(&*store, config.clone());
            let result = {
                let mut ctx = Context::new(&mut stub, tx_id);
                contract.invoke(&mut ctx, function, args)
            };
            result.map(|payload| (payload, stub.into_write_set()))
        };

        match outcome {
            Ok((payload, write_set)) => {
                store.apply(write_set);
                debug!(tx_id, contract = contract.name(), function, "invocation committed");
                Response::success(payload)
            }
            Err(err) if err.is_guard_rejection() => {
                debug!(tx_id, contract = contract.name(), function, error = %err, "invocation rejected");
                Response::error(err.to_string())
            }
            Err(err) => {
                warn!(tx_id, contract = contract.name(), function, error = %err, "invocation failed");
                Response::error(err.to_string())
            }
        }
    }
}
