//! track-codec
//!
//! Binary codec for audio-server track descriptors: the 4-byte message
//! container and the version-2 field layout, with a pluggable details
//! region for source-specific metadata.
//! No I/O, no async, no shared state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;
pub mod io;

// Wire layers
pub mod framing;
pub mod track;

pub use types::{Field, TrackError};

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, TrackError>;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::io::{TrackReader, TrackWriter};
    pub use crate::track::{
        decode, decode_ext, decode_with, encode, encode_base64, encode_ext, encode_with,
        Track, TrackDetails, TrackExtension, TrackInfo, TrackInput,
    };
    pub use crate::types::{Field, TrackError};
}
