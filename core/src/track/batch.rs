//! Concatenated tracks.
//!
//! Each message carries its own length, so tracks can be joined back to
//! back and split again without delimiters.
//!
//! Tracks written with a details hook must be split with the matching
//! extension (`split_ext`): the plain splitter reads no details and would
//! take them for `position`.

use crate::config::CodecConfig;
use crate::io::TrackReader;
use crate::track::decode::decode_message;
use crate::track::encode::{encode, encode_ext};
use crate::track::extension::TrackExtension;
use crate::track::types::{Track, TrackInfo};
use crate::Result;

/// Iterator over the tracks in a concatenated buffer.
///
/// Yields one error and then stops if a message fails to decode.
#[derive(Debug, Clone)]
pub struct Tracks<'a> {
    reader: TrackReader<'a>,
    config: CodecConfig,
    done: bool,
}

impl<'a> Tracks<'a> {
    /// Byte offset of the next message.
    pub fn offset(&self) -> usize {
        self.reader.position()
    }
}

impl Iterator for Tracks<'_> {
    type Item = Result<TrackInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.reader.is_empty() {
            return None;
        }
        match decode_message(&mut self.reader, &self.config, |_, _| Ok(None::<()>)) {
            Ok(track) => Some(Ok(track.into_info())),
            Err(e) => {
                log::debug!("track batch stopped at offset {}: {}", self.reader.position(), e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Tracks<'_> {}

pub fn split(bytes: &[u8]) -> Tracks<'_> {
    split_with_config(bytes, CodecConfig::default())
}

pub fn split_with_config(bytes: &[u8], config: CodecConfig) -> Tracks<'_> {
    Tracks { reader: TrackReader::new(bytes), config, done: false }
}

/// Decode every track, failing on the first bad one.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<TrackInfo>> {
    split(bytes).collect()
}

/// Encode and concatenate.
pub fn encode_all<'a, I>(tracks: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a TrackInfo>,
{
    let mut out = Vec::new();
    for track in tracks {
        out.extend_from_slice(&encode(track)?);
    }
    Ok(out)
}

/// Iterator over concatenated tracks whose details region is read by `E`.
///
/// Same stopping rule as [`Tracks`].
pub struct ExtTracks<'a, 'e, E: ?Sized> {
    reader: TrackReader<'a>,
    config: CodecConfig,
    ext: &'e E,
    done: bool,
}

impl<E: ?Sized> ExtTracks<'_, '_, E> {
    /// Byte offset of the next message.
    pub fn offset(&self) -> usize {
        self.reader.position()
    }
}

impl<E> Iterator for ExtTracks<'_, '_, E>
where
    E: TrackExtension + ?Sized,
{
    type Item = Result<Track<E::Details>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.reader.is_empty() {
            return None;
        }
        let ext = self.ext;
        let decoded = decode_message(&mut self.reader, &self.config, |reader, source_name| {
            ext.decode_details(reader, source_name)
        });
        match decoded {
            Ok(track) => Some(Ok(track)),
            Err(e) => {
                log::debug!("track batch stopped at offset {}: {}", self.reader.position(), e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<E> std::iter::FusedIterator for ExtTracks<'_, '_, E> where E: TrackExtension + ?Sized {}

pub fn split_ext<'a, 'e, E>(bytes: &'a [u8], ext: &'e E) -> ExtTracks<'a, 'e, E>
where
    E: TrackExtension + ?Sized,
{
    split_ext_with_config(bytes, ext, CodecConfig::default())
}

pub fn split_ext_with_config<'a, 'e, E>(
    bytes: &'a [u8],
    ext: &'e E,
    config: CodecConfig,
) -> ExtTracks<'a, 'e, E>
where
    E: TrackExtension + ?Sized,
{
    ExtTracks { reader: TrackReader::new(bytes), config, ext, done: false }
}

/// Decode every track through `ext`, failing on the first bad one.
pub fn decode_all_ext<E>(bytes: &[u8], ext: &E) -> Result<Vec<Track<E::Details>>>
where
    E: TrackExtension + ?Sized,
{
    split_ext(bytes, ext).collect()
}

/// Encode each track through `ext` and concatenate.
pub fn encode_all_ext<'t, E>(
    tracks: impl IntoIterator<Item = &'t Track<E::Details>>,
    ext: &E,
) -> Result<Vec<u8>>
where
    E: TrackExtension + ?Sized,
    E::Details: 't,
{
    let mut out = Vec::new();
    for track in tracks {
        out.extend_from_slice(&encode_ext(track, ext)?);
    }
    Ok(out)
}
