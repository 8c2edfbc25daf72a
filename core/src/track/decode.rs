//! Track decoding.
//!
//! Design notes:
//! - Field order must match `encode.rs` exactly.
//! - All field reads are bounded by the container's declared payload, so a
//!   bad length prefix fails as truncation instead of reading the next message.
//! - The version marker is consumed but not branched on.
//! - Nothing is returned unless every field decoded.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::CodecConfig;
use crate::constants::TRACK_INFO_VERSION;
use crate::framing::{open_message, MessageHeader};
use crate::io::TrackReader;
use crate::track::extension::TrackExtension;
use crate::track::input::TrackInput;
use crate::track::types::{Track, TrackDetails, TrackInfo};
use crate::types::{Field, TrackError};
use crate::Result;

/// Decode a track with no details hook.
pub fn decode<'a, 'b: 'a>(input: impl Into<TrackInput<'a, 'b>>) -> Result<TrackInfo> {
    decode_with_config(input, &CodecConfig::default(), |_, _| Ok(None::<()>))
        .map(Track::into_info)
}

/// Decode a track, handing the details region to `hook`.
///
/// `hook` runs once, after `sourceName` and before `position`, and receives
/// the source name. Whatever it returns is merged into the base record.
pub fn decode_with<'a, 'b: 'a, T, F>(
    input: impl Into<TrackInput<'a, 'b>>,
    hook: F,
) -> Result<Track<T>>
where
    T: TrackDetails,
    F: FnOnce(&mut TrackReader<'_>, &str) -> Result<Option<T>>,
{
    decode_with_config(input, &CodecConfig::default(), hook)
}

/// Decode a track through a [`TrackExtension`].
pub fn decode_ext<'a, 'b: 'a, E>(
    input: impl Into<TrackInput<'a, 'b>>,
    ext: &E,
) -> Result<Track<E::Details>>
where
    E: TrackExtension + ?Sized,
{
    decode_with(input, |reader, source_name| ext.decode_details(reader, source_name))
}

pub fn decode_with_config<'a, 'b: 'a, T, F>(
    input: impl Into<TrackInput<'a, 'b>>,
    config: &CodecConfig,
    hook: F,
) -> Result<Track<T>>
where
    T: TrackDetails,
    F: FnOnce(&mut TrackReader<'_>, &str) -> Result<Option<T>>,
{
    match input.into() {
        TrackInput::Base64(text) => {
            let bytes = decode_base64(text)?;
            decode_exact(&bytes, config, hook)
        }
        TrackInput::Bytes(bytes) => decode_exact(bytes, config, hook),
        TrackInput::Reader(reader) => decode_message(reader, config, hook),
    }
}

/// Standard alphabet, also accepting the URL-safe `-` and `_` in place of
/// `+` and `/` (mixed input included). Padding stays mandatory.
pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let bytes = if text.contains(['-', '_']) {
        let normalized: String = text
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();
        STANDARD.decode(normalized)?
    } else {
        STANDARD.decode(text)?
    };
    Ok(bytes)
}

/// `bytes` must hold exactly one message.
fn decode_exact<T, F>(bytes: &[u8], config: &CodecConfig, hook: F) -> Result<Track<T>>
where
    T: TrackDetails,
    F: FnOnce(&mut TrackReader<'_>, &str) -> Result<Option<T>>,
{
    let mut reader = TrackReader::new(bytes);
    let track = decode_message(&mut reader, config, hook)?;

    if !reader.is_empty() {
        return Err(TrackError::Framing {
            declared: reader.position() - MessageHeader::LEN,
            available: bytes.len() - MessageHeader::LEN,
        });
    }

    Ok(track)
}

/// Decode one message at the cursor. The cursor only moves on success.
pub(crate) fn decode_message<T, F>(
    reader: &mut TrackReader<'_>,
    config: &CodecConfig,
    hook: F,
) -> Result<Track<T>>
where
    T: TrackDetails,
    F: FnOnce(&mut TrackReader<'_>, &str) -> Result<Option<T>>,
{
    let mut cursor = reader.clone();
    let mut payload = open_message(&mut cursor, config.effective_max_payload_len())?;
    let track = decode_fields(&mut payload, config, hook)?;
    *reader = cursor;
    Ok(track)
}

fn decode_fields<T, F>(
    payload: &mut TrackReader<'_>,
    config: &CodecConfig,
    hook: F,
) -> Result<Track<T>>
where
    T: TrackDetails,
    F: FnOnce(&mut TrackReader<'_>, &str) -> Result<Option<T>>,
{
    payload.enter(Field::Version);
    let version = payload.read_u8()?;
    if version != TRACK_INFO_VERSION {
        log::trace!("track version marker {} (encoder writes {})", version, TRACK_INFO_VERSION);
    }

    payload.enter(Field::Title);
    let title = payload.read_text()?;
    payload.enter(Field::Author);
    let author = payload.read_text()?;
    payload.enter(Field::Length);
    let length = payload.read_u64()?;
    payload.enter(Field::Identifier);
    let identifier = payload.read_text()?;
    payload.enter(Field::IsStream);
    let is_stream = payload.read_bool()?;
    payload.enter(Field::Uri);
    let uri = payload.read_nullable_text()?;
    payload.enter(Field::SourceName);
    let source_name = payload.read_text()?;

    payload.enter(Field::Details);
    let before = payload.position();
    let details = hook(payload, &source_name)?;
    log::trace!(
        "details hook for {:?} consumed {} bytes",
        source_name,
        payload.position() - before
    );

    payload.enter(Field::Position);
    let position = payload.read_u64()?;

    let remaining = payload.remaining();
    if remaining > 0 {
        if config.strict_trailing {
            return Err(TrackError::TrailingPayload { remaining });
        }
        log::debug!("skipping {} trailing payload bytes after position", remaining);
    }

    let info = TrackInfo {
        title,
        author,
        length,
        identifier,
        is_stream,
        uri,
        source_name,
        position,
    };

    Ok(Track::merged(info, details))
}
