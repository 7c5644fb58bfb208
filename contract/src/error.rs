//! Contract error types.
//!
//! Guard failures render the messages existing callers match on:
//! `The <entity> <key> already exists` and `The <entity> <key> does not exist`.

use helloworld_primitives::CodecError;
use helloworld_stub::StoreError;

/// Error returned by contract operations and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// `create` found the key already occupied.
    #[error("The {entity} {key} already exists")]
    AlreadyExists { entity: &'static str, key: String },

    /// `read`, `update` or `delete` found no record under the key.
    #[error("The {entity} {key} does not exist")]
    NotFound { entity: &'static str, key: String },

    /// Ledger backend failure, passed through untouched.
    #[error(transparent)]
    Backend(#[from] StoreError),

    /// Stored bytes did not decode as a record.
    #[error("The {entity} {key} holds corrupt data: {source}")]
    CorruptData {
        entity: &'static str,
        key: String,
        #[source]
        source: CodecError,
    },

    /// A record could not be encoded for storage.
    #[error("The {entity} {key} could not be encoded: {source}")]
    Encode {
        entity: &'static str,
        key: String,
        #[source]
        source: CodecError,
    },

    /// Dispatch received a function name the contract does not export.
    #[error("You've asked to invoke a function that does not exist: {0}")]
    UnknownFunction(String),

    /// Dispatch received the wrong number of positional arguments.
    #[error("Expected {expected} parameters, but {got} have been supplied")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },
}

impl ContractError {
    /// Returns true for the guard outcomes (`AlreadyExists`, `NotFound`).
    pub fn is_guard_rejection(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. } | Self::NotFound { .. })
    }
}
