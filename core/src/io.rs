//! Byte-level primitives shared by the container and the field codec.
//!
//! All multi-byte integers are big-endian. Text is a u16 length prefix
//! followed by UTF-8 bytes, no terminator. Nullable text adds a one-byte
//! presence flag in front.
//!
//! Both cursors carry the field currently being processed so that any
//! failure can be reported against it without the caller threading it
//! through every call.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{presence, MAX_TEXT_LEN};
use crate::types::{Field, TrackError};
use crate::Result;

/// Read cursor over a borrowed buffer.
///
/// Cloning is cheap and yields an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct TrackReader<'a> {
    buf: &'a [u8],
    pos: usize,
    field: Field,
}

impl<'a> TrackReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0, field: Field::Header }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Field errors are currently attributed to.
    #[inline]
    pub fn field(&self) -> Field {
        self.field
    }

    #[inline]
    pub(crate) fn enter(&mut self, field: Field) {
        self.field = field;
    }

    /// Unread bytes, without consuming them.
    pub fn peek_rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(TrackError::Truncated { field: self.field, needed: n, remaining });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Split off the next `n` bytes as an independent cursor and advance past them.
    pub(crate) fn split_to(&mut self, n: usize) -> Result<TrackReader<'a>> {
        let field = self.field;
        let bytes = self.take(n)?;
        Ok(TrackReader { buf: bytes, pos: 0, field })
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Zero is false, anything else is true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    /// Length-prefixed UTF-8 text.
    pub fn read_text(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| TrackError::InvalidUtf8 { field: self.field })
    }

    /// Presence flag, then text only when present.
    pub fn read_nullable_text(&mut self) -> Result<Option<String>> {
        if self.read_bool()? {
            self.read_text().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Append-only write cursor over an owned buffer.
#[derive(Debug, Clone)]
pub struct TrackWriter {
    buf: Vec<u8>,
    field: Field,
}

impl Default for TrackWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackWriter {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity), field: Field::Version }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn field(&self) -> Field {
        self.field
    }

    #[inline]
    pub(crate) fn enter(&mut self, field: Field) {
        self.field = field;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    pub fn write_u16(&mut self, v: u16) {
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_u64(&mut self, v: u64) {
        let mut b = [0u8; 8];
        BigEndian::write_u64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i64(&mut self, v: i64) {
        let mut b = [0u8; 8];
        BigEndian::write_i64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    /// Length-prefixed UTF-8 text. Fails if the text exceeds the u16 prefix.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let len = text.len();
        if len > MAX_TEXT_LEN {
            return Err(TrackError::TextTooLong { field: self.field, len });
        }
        self.write_u16(len as u16);
        self.buf.extend_from_slice(text.as_bytes());
        Ok(())
    }

    pub fn write_nullable_text(&mut self, text: Option<&str>) -> Result<()> {
        match text {
            Some(text) => {
                self.write_u8(presence::PRESENT);
                self.write_text(text)
            }
            None => {
                self.write_u8(presence::ABSENT);
                Ok(())
            }
        }
    }
}
