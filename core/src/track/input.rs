use crate::io::TrackReader;

/// Accepted decode inputs, resolved once at the entry point.
#[derive(Debug)]
pub enum TrackInput<'a, 'b: 'a> {
    /// Padded base64 text. Standard alphabet; `-` and `_` are accepted
    /// for `+` and `/`.
    Base64(&'a str),
    /// Exactly one encoded message.
    Bytes(&'a [u8]),
    /// Cursor positioned at a message header inside a larger buffer.
    /// Advanced past the message on success, untouched on failure.
    Reader(&'a mut TrackReader<'b>),
}

impl<'a, 'b: 'a> From<&'a str> for TrackInput<'a, 'b> {
    fn from(text: &'a str) -> Self {
        TrackInput::Base64(text)
    }
}

impl<'a, 'b: 'a> From<&'a String> for TrackInput<'a, 'b> {
    fn from(text: &'a String) -> Self {
        TrackInput::Base64(text.as_str())
    }
}

impl<'a, 'b: 'a> From<&'a [u8]> for TrackInput<'a, 'b> {
    fn from(bytes: &'a [u8]) -> Self {
        TrackInput::Bytes(bytes)
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [u8; N]> for TrackInput<'a, 'b> {
    fn from(bytes: &'a [u8; N]) -> Self {
        TrackInput::Bytes(bytes.as_slice())
    }
}

impl<'a, 'b: 'a> From<&'a Vec<u8>> for TrackInput<'a, 'b> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        TrackInput::Bytes(bytes.as_slice())
    }
}

impl<'a, 'b: 'a> From<&'a mut TrackReader<'b>> for TrackInput<'a, 'b> {
    fn from(reader: &'a mut TrackReader<'b>) -> Self {
        TrackInput::Reader(reader)
    }
}
