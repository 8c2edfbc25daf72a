//! Crate-wide error taxonomy.
//!
//! Every failure names the field (and its position in the v2 field
//! sequence) or the byte counts involved, so a bad track can be diagnosed
//! from the error alone. No decode path returns a partial `TrackInfo`.

use std::fmt;

/// Position in the encoded sequence, used to tag errors.
///
/// `index()` follows the v2 layout: the version marker is field 1 and
/// `position` is field 10. The container header is field 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Header,
    Version,
    Title,
    Author,
    Length,
    Identifier,
    IsStream,
    Uri,
    SourceName,
    Details,
    Position,
}

impl Field {
    /// All fields in wire order.
    pub const ORDER: [Field; 11] = [
        Field::Header,
        Field::Version,
        Field::Title,
        Field::Author,
        Field::Length,
        Field::Identifier,
        Field::IsStream,
        Field::Uri,
        Field::SourceName,
        Field::Details,
        Field::Position,
    ];

    pub const fn index(self) -> usize {
        match self {
            Field::Header => 0,
            Field::Version => 1,
            Field::Title => 2,
            Field::Author => 3,
            Field::Length => 4,
            Field::Identifier => 5,
            Field::IsStream => 6,
            Field::Uri => 7,
            Field::SourceName => 8,
            Field::Details => 9,
            Field::Position => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Header => "header",
            Field::Version => "version",
            Field::Title => "title",
            Field::Author => "author",
            Field::Length => "length",
            Field::Identifier => "identifier",
            Field::IsStream => "isStream",
            Field::Uri => "uri",
            Field::SourceName => "sourceName",
            Field::Details => "details",
            Field::Position => "position",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.index(), self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Text input is not valid base64.
    #[error("invalid base64 track: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Container header disagrees with the bytes actually supplied.
    #[error("framing error: header declares {declared} payload bytes, {available} available")]
    Framing { declared: usize, available: usize },

    /// Container header does not carry the versioned flag.
    #[error("unversioned track payload (flags = {flags:#x})")]
    UnversionedPayload { flags: u32 },

    /// A length prefix or fixed-width value runs past the payload end.
    #[error("truncated field {field}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        field: Field,
        needed: usize,
        remaining: usize,
    },

    /// Text field bytes are not UTF-8.
    #[error("field {field} is not valid UTF-8")]
    InvalidUtf8 { field: Field },

    /// Payload bytes left after `position` under strict config.
    #[error("{remaining} unread payload bytes after the position field")]
    TrailingPayload { remaining: usize },

    /// Text does not fit the u16 length prefix.
    #[error("field {field} too long: {len} > 65535 bytes")]
    TextTooLong { field: Field, len: usize },

    /// Payload does not fit the container length bits or the configured limit.
    #[error("track payload too large: {len} > {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },

    /// Failure raised by a caller-supplied details hook.
    #[error("details hook failed: {0}")]
    Extension(String),
}

impl TrackError {
    /// True when the input ended before the data it declares.
    pub fn is_truncation(&self) -> bool {
        match self {
            TrackError::Truncated { .. } => true,
            TrackError::Framing { declared, available } => available < declared,
            _ => false,
        }
    }

    /// Field the error points at, when it concerns a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            TrackError::Truncated { field, .. }
            | TrackError::InvalidUtf8 { field }
            | TrackError::TextTooLong { field, .. } => Some(*field),
            TrackError::Framing { .. } | TrackError::UnversionedPayload { .. } => {
                Some(Field::Header)
            }
            TrackError::TrailingPayload { .. } => Some(Field::Position),
            TrackError::Extension(_) => Some(Field::Details),
            TrackError::Base64(_) | TrackError::PayloadTooLarge { .. } => None,
        }
    }
}
