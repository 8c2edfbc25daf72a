#[cfg(test)]
mod tests {
    use track_codec::io::{TrackReader, TrackWriter};
    use track_codec::{Field, TrackError};

    #[test]
    fn writer_layout_is_big_endian() {
        let mut w = TrackWriter::new();
        w.write_u16(0x0102);
        w.write_u64(212_000);
        w.write_bool(true);
        assert_eq!(w.as_bytes(), &[0x01, 0x02, 0, 0, 0, 0, 0, 0x03, 0x3C, 0x20, 0x01]);
    }

    #[test]
    fn text_and_nullable_text() {
        let mut w = TrackWriter::new();
        w.write_text("youtube").unwrap();
        w.write_nullable_text(None).unwrap();
        w.write_nullable_text(Some("")).unwrap();
        let bytes = w.into_inner();
        assert_eq!(&bytes[..9], b"\x00\x07youtube");
        assert_eq!(&bytes[9..], &[0x00, 0x01, 0x00, 0x00]);

        let mut r = TrackReader::new(&bytes);
        assert_eq!(r.read_text().unwrap(), "youtube");
        assert_eq!(r.read_nullable_text().unwrap(), None);
        assert_eq!(r.read_nullable_text().unwrap(), Some(String::new()));
        assert!(r.is_empty());
    }

    #[test]
    fn signed_and_unsigned_share_bits() {
        let mut w = TrackWriter::new();
        w.write_i64(-1);
        let bytes = w.into_inner();
        let mut r = TrackReader::new(&bytes);
        assert_eq!(r.clone().read_u64().unwrap(), u64::MAX);
        assert_eq!(r.read_i64().unwrap(), -1);
    }

    #[test]
    fn text_limit_is_u16() {
        let mut w = TrackWriter::new();
        w.write_text(&"a".repeat(u16::MAX as usize)).unwrap();
        let err = w.write_text(&"a".repeat(u16::MAX as usize + 1)).unwrap_err();
        assert!(matches!(err, TrackError::TextTooLong { len: 65_536, .. }));
    }

    #[test]
    fn reader_does_not_advance_on_short_read() {
        let bytes = [0x00u8, 0x01, 0x02];
        let mut r = TrackReader::new(&bytes);
        let err = r.read_u32().unwrap_err();
        assert!(matches!(
            err,
            TrackError::Truncated { field: Field::Header, needed: 4, remaining: 3 }
        ));
        assert_eq!(r.position(), 0);
        assert_eq!(r.read_bytes(2).unwrap(), &[0x00, 0x01]);
        assert_eq!(r.peek_rest(), &[0x02]);
    }

    #[test]
    fn field_display_carries_index() {
        assert_eq!(Field::Position.to_string(), "#10 (position)");
        for (i, field) in Field::ORDER.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
