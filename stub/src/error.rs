//! Backend error type for ledger access.
//!
//! `StoreError` is returned by every `ChaincodeStub` and `StateStore`
//! method. The contract never inspects or rewrites it; it reaches the caller
//! exactly as the backend produced it.

/// Error returned by ledger backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Keys must be non-empty strings.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds the configured maximum length.
    #[error("key of {len} bytes exceeds limit of {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds the configured maximum length.
    #[error("value of {len} bytes exceeds limit of {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// Buffered writes exceed the per-invocation write budget.
    #[error("write budget of {limit} bytes exceeded")]
    WriteLimit { limit: u64 },

    /// Backend-specific I/O or availability failure.
    #[error("backend failure: {0}")]
    Internal(String),
}
