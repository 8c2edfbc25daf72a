//! Codec configuration.
//!
//! Defaults match the reference server: trailing payload bytes after
//! `position` are skipped, and any payload the 30-bit length can carry is
//! accepted.

use serde::{Deserialize, Serialize};

use crate::constants::MESSAGE_LENGTH_MASK;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Fail instead of skipping unread payload bytes after `position`.
    pub strict_trailing: bool,
    /// Upper bound on payload length, both directions. Clamped to the
    /// container's 30 length bits.
    pub max_payload_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_trailing: false,
            max_payload_len: MESSAGE_LENGTH_MASK as usize,
        }
    }
}

impl CodecConfig {
    pub fn strict() -> Self {
        Self { strict_trailing: true, ..Default::default() }
    }

    /// Parse from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Limit actually enforced.
    pub fn effective_max_payload_len(&self) -> usize {
        self.max_payload_len.min(MESSAGE_LENGTH_MASK as usize)
    }
}
