//! The stored record and its wire codec.
//!
//! ## Wire Format (version 1)
//!
//! ```text
//! {"value":"<string>"}
//! ```
//!
//! Compact JSON, UTF-8 encoded, single field named `value`. Existing ledger
//! entries were written in exactly this form, so the field name and the
//! compact layout must not change without bumping [`RECORD_CODEC_VERSION`].

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Version of the record wire format produced by [`encode_record`].
pub const RECORD_CODEC_VERSION: u32 = 1;

/// A keyed record as stored on the ledger.
///
/// The key lives outside the record; the backend's key space owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Caller-supplied value, replaced wholesale on update.
    pub value: String,
}

impl Record {
    /// Create a record holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Encode a record into its ledger byte form.
pub fn encode_record(record: &Record) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(record)?)
}

/// Decode a record from its ledger byte form.
///
/// Unknown extra fields are ignored. A missing or non-string `value`,
/// non-object JSON, or invalid UTF-8 yields [`CodecError::Malformed`].
pub fn decode_record(bytes: &[u8]) -> Result<Record, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
