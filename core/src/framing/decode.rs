use crate::constants::MESSAGE_LENGTH_MASK;
use crate::framing::types::MessageHeader;
use crate::io::TrackReader;
use crate::types::{Field, TrackError};
use crate::Result;

/// Read and validate the container header.
///
/// Rejects unversioned payloads and declared lengths above `max_payload_len`.
/// Does not check that the payload bytes are present.
pub fn parse_message_header(
    reader: &mut TrackReader<'_>,
    max_payload_len: usize,
) -> Result<MessageHeader> {
    reader.enter(Field::Header);
    let header = MessageHeader::from_word(reader.read_u32()?);

    log::trace!(
        "track message header: flags={:#x} payload_len={}",
        header.flags,
        header.payload_len
    );

    if !header.is_versioned() {
        return Err(TrackError::UnversionedPayload { flags: header.flags });
    }

    let max = max_payload_len.min(MESSAGE_LENGTH_MASK as usize);
    if header.payload_len > max {
        return Err(TrackError::PayloadTooLarge { len: header.payload_len, max });
    }

    Ok(header)
}

/// Consume one message from `reader` and return a cursor bounded to its payload.
///
/// On success `reader` sits right after the message, so the next message
/// in a larger buffer can follow. The returned cursor starts at the
/// version marker.
pub fn open_message<'a>(
    reader: &mut TrackReader<'a>,
    max_payload_len: usize,
) -> Result<TrackReader<'a>> {
    let header = parse_message_header(reader, max_payload_len)?;

    let available = reader.remaining();
    if available < header.payload_len {
        return Err(TrackError::Framing { declared: header.payload_len, available });
    }

    let mut payload = reader.split_to(header.payload_len)?;
    payload.enter(Field::Version);
    Ok(payload)
}
