//! Message container framing.
//!
//! Responsibilities:
//! - Define the 4-byte container header (flags + payload length)
//! - Wrap an encoded payload in its header
//! - Open a message from a cursor, bounding reads to its payload
//!
//! Non-responsibilities:
//! - Track field layout
//! - base64

pub mod types;
pub mod encode;
pub mod decode;

pub use types::MessageHeader;
pub use encode::encode_message;
pub use decode::{open_message, parse_message_header};
