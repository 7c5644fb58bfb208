//! Error types for the record codec.

/// Failure to decode a stored record payload.
///
/// A payload that does not decode is corrupt ledger data, never a normal
/// "missing" condition.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload is not a JSON object with a string `value` field.
    #[error("malformed record payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
