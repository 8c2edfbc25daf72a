use crate::constants::MESSAGE_LENGTH_MASK;
use crate::framing::types::MessageHeader;
use crate::types::TrackError;
use crate::Result;

/// Prefix `payload` with its container header.
///
/// Layout:
///
/// ```text
/// [ header (4) ]
/// [ payload (N) ]
/// ```
///
/// `max_payload_len` is clamped to the 30 length bits.
pub fn encode_message(payload: &[u8], flags: u32, max_payload_len: usize) -> Result<Vec<u8>> {
    let max = max_payload_len.min(MESSAGE_LENGTH_MASK as usize);
    if payload.len() > max {
        return Err(TrackError::PayloadTooLarge { len: payload.len(), max });
    }

    let header = MessageHeader { flags, payload_len: payload.len() };
    let mut out = Vec::with_capacity(header.message_len());
    out.extend_from_slice(&header.to_bytes()?);
    out.extend_from_slice(payload);

    debug_assert_eq!(out.len(), header.message_len(), "message length drift");
    Ok(out)
}
