//! Core type aliases and constants for the helloworld chaincode.

/// 32-byte digest used for write-set commitments.
pub type Hash = [u8; 32];

/// Maximum key length in the state key-value store, in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum encoded record length in the state key-value store.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Maximum bytes (keys + values) one invocation may buffer.
pub const MAX_WRITE_BYTES: u64 = 4 * 1024 * 1024; // 4 MiB

/// Convert a `Hash` to a hex string for display purposes.
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut s = String::with_capacity(66);
    s.push_str("0x");
    for byte in hash {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Encode a u64 as little-endian bytes.
pub fn u64_to_le_bytes(v: u64) -> [u8; 8] {
    v.to_le_bytes()
}
