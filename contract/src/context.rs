//! Per-invocation context.

use helloworld_stub::ChaincodeStub;

/// Handle passed to every contract operation.
///
/// Carries the ledger stub for this invocation and the transaction id used
/// to correlate log events. The contract keeps no state between contexts.
pub struct Context<'a> {
    stub: &'a mut dyn ChaincodeStub,
    tx_id: String,
}

impl<'a> Context<'a> {
    /// Create a context over `stub` for transaction `tx_id`.
    pub fn new(stub: &'a mut dyn ChaincodeStub, tx_id: impl Into<String>) -> Self {
        Self {
            stub,
            tx_id: tx_id.into(),
        }
    }

    /// The ledger stub, for reads.
    pub fn stub(&self) -> &dyn ChaincodeStub {
        &*self.stub
    }

    /// The ledger stub, for writes.
    pub fn stub_mut(&mut self) -> &mut dyn ChaincodeStub {
        &mut *self.stub
    }

    /// Transaction id of this invocation.
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }
}
