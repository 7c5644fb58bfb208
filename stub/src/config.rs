//! Stub configuration.
//!
//! `StubConfig` bundles the resource limits a `TxStub` enforces for a
//! single invocation. Defaults come from the constants in
//! `helloworld_primitives::types`.

use helloworld_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES};

/// Limits enforced on every write made through a `TxStub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes (keys + values) buffered per invocation.
    pub max_write_bytes: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: MAX_WRITE_BYTES,
        }
    }
}

impl StubConfig {
    /// Override the per-invocation write budget, keeping other defaults.
    pub fn with_write_budget(max_write_bytes: u64) -> Self {
        Self {
            max_write_bytes,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StubConfig::default();
        assert_eq!(config.max_key_len, 256);
        assert_eq!(config.max_value_len, 64 * 1024);
        assert_eq!(config.max_write_bytes, 4 * 1024 * 1024);
    }

    #[test]
    fn test_with_write_budget() {
        let config = StubConfig::with_write_budget(128);
        assert_eq!(config.max_write_bytes, 128);
        // Other fields should use defaults
        assert_eq!(config.max_key_len, MAX_KEY_LEN);
        assert_eq!(config.max_value_len, MAX_VALUE_LEN);
    }
}
