use byteorder::{BigEndian, ByteOrder};

use crate::constants::{
    MESSAGE_FLAGS_SHIFT, MESSAGE_HEADER_LEN, MESSAGE_LENGTH_MASK, TRACK_INFO_VERSIONED,
};
use crate::types::TrackError;
use crate::Result;

/// Container header.
///
/// Wire layout, one big-endian 32-bit word:
///
/// ```text
/// [ flags (2 bits) | payload_len (30 bits) ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub flags: u32,
    pub payload_len: usize,
}

impl MessageHeader {
    pub const LEN: usize = MESSAGE_HEADER_LEN;

    /// Header for a payload that starts with a version marker.
    pub fn versioned(payload_len: usize) -> Self {
        Self { flags: TRACK_INFO_VERSIONED, payload_len }
    }

    #[inline]
    pub fn is_versioned(&self) -> bool {
        self.flags & TRACK_INFO_VERSIONED != 0
    }

    /// Header plus payload.
    #[inline]
    pub fn message_len(&self) -> usize {
        Self::LEN + self.payload_len
    }

    pub fn from_word(word: u32) -> Self {
        Self {
            flags: word >> MESSAGE_FLAGS_SHIFT,
            payload_len: (word & MESSAGE_LENGTH_MASK) as usize,
        }
    }

    /// Fails if `payload_len` does not fit the 30 length bits.
    /// Only the low two bits of `flags` are kept.
    pub fn to_word(&self) -> Result<u32> {
        let max = MESSAGE_LENGTH_MASK as usize;
        if self.payload_len > max {
            return Err(TrackError::PayloadTooLarge { len: self.payload_len, max });
        }
        Ok((self.flags << MESSAGE_FLAGS_SHIFT) | self.payload_len as u32)
    }

    pub fn to_bytes(&self) -> Result<[u8; MESSAGE_HEADER_LEN]> {
        let mut out = [0u8; MESSAGE_HEADER_LEN];
        BigEndian::write_u32(&mut out, self.to_word()?);
        Ok(out)
    }
}
