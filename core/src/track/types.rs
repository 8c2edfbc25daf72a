use std::ops::{Deref, DerefMut};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Base track metadata carried by every encoded track.
///
/// `is_seekable` is not stored: it is always `!is_stream`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub title: String,
    pub author: String,
    /// Duration in milliseconds. Carried verbatim for streams.
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    #[serde(default)]
    pub uri: Option<String>,
    pub source_name: String,
    /// Playback offset in milliseconds.
    pub position: u64,
}

impl TrackInfo {
    #[inline]
    pub fn is_seekable(&self) -> bool {
        !self.is_stream
    }
}

/// REST shape, with `isSeekable` derived from `isStream`.
impl Serialize for TrackInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TrackInfo", 9)?;
        s.serialize_field("title", &self.title)?;
        s.serialize_field("author", &self.author)?;
        s.serialize_field("length", &self.length)?;
        s.serialize_field("identifier", &self.identifier)?;
        s.serialize_field("isStream", &self.is_stream)?;
        s.serialize_field("isSeekable", &self.is_seekable())?;
        s.serialize_field("uri", &self.uri)?;
        s.serialize_field("sourceName", &self.source_name)?;
        s.serialize_field("position", &self.position)?;
        s.end()
    }
}

/// Source-specific fields decoded by a details hook.
///
/// `merge_into` runs once after decoding, with the base record already
/// populated. Any base field it assigns overrides the decoded value.
pub trait TrackDetails {
    fn merge_into(&self, _info: &mut TrackInfo) {}
}

/// No details.
impl TrackDetails for () {}

/// Base record plus optional source-specific details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track<T = ()> {
    pub info: TrackInfo,
    pub details: Option<T>,
}

impl<T> Track<T> {
    pub fn new(info: TrackInfo) -> Self {
        Self { info, details: None }
    }

    pub fn with_details(info: TrackInfo, details: T) -> Self {
        Self { info, details: Some(details) }
    }

    pub fn into_info(self) -> TrackInfo {
        self.info
    }
}

impl<T: TrackDetails> Track<T> {
    /// Decode-side merge step; details win on collision.
    pub(crate) fn merged(info: TrackInfo, details: Option<T>) -> Self {
        let mut info = info;
        if let Some(details) = &details {
            details.merge_into(&mut info);
        }
        Self { info, details }
    }
}

impl<T> From<TrackInfo> for Track<T> {
    fn from(info: TrackInfo) -> Self {
        Self::new(info)
    }
}

impl<T> Deref for Track<T> {
    type Target = TrackInfo;

    fn deref(&self) -> &TrackInfo {
        &self.info
    }
}

impl<T> DerefMut for Track<T> {
    fn deref_mut(&mut self) -> &mut TrackInfo {
        &mut self.info
    }
}
