use crate::io::{TrackReader, TrackWriter};
use crate::track::types::{Track, TrackDetails};
use crate::Result;

/// Matched encode/decode hooks for one source-specific details type.
///
/// `encode_details` must write exactly the bytes `decode_details` reads
/// back. Nothing checks this: a mismatch shifts every later read and
/// `position` comes out wrong.
pub trait TrackExtension {
    type Details: TrackDetails;

    /// Called after `sourceName`. `Ok(None)` when the source has no details
    /// (and no bytes were consumed).
    fn decode_details(
        &self,
        reader: &mut TrackReader<'_>,
        source_name: &str,
    ) -> Result<Option<Self::Details>>;

    /// Called after `sourceName` is written.
    fn encode_details(&self, writer: &mut TrackWriter, track: &Track<Self::Details>) -> Result<()>;
}
