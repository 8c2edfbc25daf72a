//! Track encoding.
//!
//! Fields go into an in-memory payload first; the container header is
//! added last, once the payload length is known. Field order must match
//! `decode.rs` exactly. Inputs are trusted: numeric ranges are not
//! re-validated, only what the wire cannot represent is rejected.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::CodecConfig;
use crate::constants::{TRACK_INFO_VERSION, TRACK_INFO_VERSIONED};
use crate::framing::encode_message;
use crate::io::TrackWriter;
use crate::track::extension::TrackExtension;
use crate::track::types::{Track, TrackInfo};
use crate::types::Field;
use crate::Result;

/// Encode a track with an empty details region.
pub fn encode(info: &TrackInfo) -> Result<Vec<u8>> {
    encode_fields(info, &CodecConfig::default(), |_| Ok(()))
}

/// [`encode`], then standard base64.
pub fn encode_base64(info: &TrackInfo) -> Result<String> {
    Ok(STANDARD.encode(encode(info)?))
}

/// Encode a track, letting `hook` write the details region after `sourceName`.
pub fn encode_with<T, F>(track: &Track<T>, hook: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut TrackWriter, &Track<T>) -> Result<()>,
{
    encode_with_config(track, &CodecConfig::default(), hook)
}

/// Encode a track through a [`TrackExtension`].
pub fn encode_ext<E>(track: &Track<E::Details>, ext: &E) -> Result<Vec<u8>>
where
    E: TrackExtension + ?Sized,
{
    encode_with(track, |writer, track| ext.encode_details(writer, track))
}

pub fn encode_with_config<T, F>(track: &Track<T>, config: &CodecConfig, hook: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut TrackWriter, &Track<T>) -> Result<()>,
{
    encode_fields(&track.info, config, |writer| hook(writer, track))
}

fn encode_fields<F>(info: &TrackInfo, config: &CodecConfig, hook: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut TrackWriter) -> Result<()>,
{
    let mut w = TrackWriter::new();

    w.enter(Field::Version);
    w.write_u8(TRACK_INFO_VERSION);
    w.enter(Field::Title);
    w.write_text(&info.title)?;
    w.enter(Field::Author);
    w.write_text(&info.author)?;
    w.enter(Field::Length);
    w.write_u64(info.length);
    w.enter(Field::Identifier);
    w.write_text(&info.identifier)?;
    w.enter(Field::IsStream);
    w.write_bool(info.is_stream);
    w.enter(Field::Uri);
    w.write_nullable_text(info.uri.as_deref())?;
    w.enter(Field::SourceName);
    w.write_text(&info.source_name)?;

    w.enter(Field::Details);
    hook(&mut w)?;

    w.enter(Field::Position);
    w.write_u64(info.position);

    encode_message(w.as_bytes(), TRACK_INFO_VERSIONED, config.effective_max_payload_len())
}
