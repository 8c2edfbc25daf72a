//! Wire constants for the track message container and the v2 field layout.

/// Version marker written at the head of every payload this crate encodes.
pub const TRACK_INFO_VERSION: u8 = 2;

/// Container flag: payload starts with an explicit version marker byte.
pub const TRACK_INFO_VERSIONED: u32 = 1;

/// Container header size in bytes (one big-endian `i32` word).
pub const MESSAGE_HEADER_LEN: usize = 4;

/// Flags live in the top two bits of the header word.
pub const MESSAGE_FLAGS_SHIFT: u32 = 30;

/// Payload length occupies the low 30 bits of the header word.
pub const MESSAGE_LENGTH_MASK: u32 = 0x3FFF_FFFF;

/// Largest text field the u16 length prefix can describe.
pub const MAX_TEXT_LEN: usize = u16::MAX as usize;

/// Byte values for the nullable-text presence flag.
pub mod presence {
    pub const ABSENT: u8 = 0x00;
    pub const PRESENT: u8 = 0x01;
}
