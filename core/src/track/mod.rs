//! Track descriptor codec (container + v2 field layout).
//!
//! Field order, identical in both directions:
//!
//! ```text
//!  1 version marker   u8
//!  2 title            text
//!  3 author           text
//!  4 length           u64 BE
//!  5 identifier       text
//!  6 isStream         bool
//!  7 uri              nullable text
//!  8 sourceName       text
//!  9 details          hook-defined, zero bytes without a hook
//! 10 position         u64 BE
//! ```
//!
//! The details region sits between `sourceName` and `position` because a
//! decoder needs the source name to know how to read it.

pub mod types;
pub mod input;
pub mod extension;
pub mod encode;
pub mod decode;
pub mod batch;

pub use types::{Track, TrackDetails, TrackInfo};
pub use input::TrackInput;
pub use extension::TrackExtension;
pub use encode::{encode, encode_base64, encode_ext, encode_with, encode_with_config};
pub use decode::{decode, decode_ext, decode_with, decode_with_config};
