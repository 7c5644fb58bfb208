//! `helloworld-primitives` — foundational types for the helloworld chaincode.
//!
//! This crate provides the stored record type and its codec, the state
//! limits, and the transactional overlay shared by the ledger stub and the
//! contract.

pub mod types;
pub mod error;
pub mod record;
pub mod state;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Hash, MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES};
pub use error::CodecError;
pub use record::{Record, RECORD_CODEC_VERSION, encode_record, decode_record};
pub use state::{StateOverlay, OverlayResult, WriteSet};
