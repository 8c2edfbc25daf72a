// Details hooks: the region between `sourceName` and `position`.
//
// * matched closure hooks and the `TrackExtension` trait
// * merge precedence (details override base fields)
// * the unmatched-hook hazard
// * hook failures

#[cfg(test)]
mod tests {
    use track_codec::config::CodecConfig;
    use track_codec::io::{TrackReader, TrackWriter};
    use track_codec::track::{
        decode, decode_ext, decode_with, decode_with_config, encode, encode_ext, encode_with, Track,
        TrackDetails, TrackExtension, TrackInfo,
    };
    use track_codec::{Field, Result, TrackError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct SpotifyDetails {
        artwork_url: Option<String>,
        isrc: String,
    }

    impl TrackDetails for SpotifyDetails {}

    struct Spotify;

    impl TrackExtension for Spotify {
        type Details = SpotifyDetails;

        fn decode_details(
            &self,
            reader: &mut TrackReader<'_>,
            source_name: &str,
        ) -> Result<Option<SpotifyDetails>> {
            if source_name != "spotify" {
                return Ok(None);
            }
            Ok(Some(SpotifyDetails {
                artwork_url: reader.read_nullable_text()?,
                isrc: reader.read_text()?,
            }))
        }

        fn encode_details(
            &self,
            writer: &mut TrackWriter,
            track: &Track<SpotifyDetails>,
        ) -> Result<()> {
            match (&track.details, track.source_name.as_str()) {
                (Some(details), "spotify") => {
                    writer.write_nullable_text(details.artwork_url.as_deref())?;
                    writer.write_text(&details.isrc)
                }
                _ => Ok(()),
            }
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn spotify_track() -> Track<SpotifyDetails> {
        Track::with_details(
            TrackInfo {
                title: "Bohemian Rhapsody".into(),
                author: "Queen".into(),
                length: 354_320,
                identifier: "7tFiyTwD0nx5a1eklYtX2J".into(),
                is_stream: false,
                uri: Some("https://open.spotify.com/track/7tFiyTwD0nx5a1eklYtX2J".into()),
                source_name: "spotify".into(),
                position: 12_000,
            },
            SpotifyDetails {
                artwork_url: Some("https://i.scdn.co/image/ab67616d0000b273".into()),
                isrc: "GBUM71029604".into(),
            },
        )
    }

// # ✅ 1. Matched hooks round-trip details like base fields

    #[test]
    fn extension_round_trip() {
        let track = spotify_track();
        let bytes = encode_ext(&track, &Spotify).unwrap();
        let decoded = decode_ext(&bytes, &Spotify).unwrap();
        assert_eq!(decoded, track);
        assert_eq!(decoded.position, 12_000);
    }

    #[test]
    fn closure_hooks_round_trip() {
        let track = Track::with_details(spotify_track().info, PlayCount(0xFEED));
        let bytes = encode_with(&track, |w, t| {
            w.write_u32(t.details.as_ref().map_or(0, |c| c.0));
            Ok(())
        })
        .unwrap();

        let decoded = decode_with(&bytes, |r, _| r.read_u32().map(|n| Some(PlayCount(n)))).unwrap();
        assert_eq!(decoded, track);
    }

    #[derive(Debug, PartialEq)]
    struct PlayCount(u32);

    impl TrackDetails for PlayCount {}

    #[test]
    fn hook_receives_source_name() {
        let bytes = encode(&spotify_track().info).unwrap();
        let mut seen = None;
        decode_with(&bytes, |_, source| {
            seen = Some(source.to_owned());
            Ok(None::<()>)
        })
        .unwrap();
        assert_eq!(seen.as_deref(), Some("spotify"));
    }

    #[test]
    fn other_source_writes_and_reads_nothing() {
        let mut track = spotify_track();
        track.source_name = "soundcloud".into();

        let with_ext = encode_ext(&track, &Spotify).unwrap();
        let without = encode(&track.info).unwrap();
        assert_eq!(with_ext, without);

        let decoded = decode_ext(&with_ext, &Spotify).unwrap();
        assert_eq!(decoded.details, None);
        assert_eq!(decoded.info, track.info);
    }

    #[test]
    fn no_hooks_on_either_side_stay_compatible() {
        let info = spotify_track().info;
        let bytes = encode(&info).unwrap();
        let decoded: Track<()> = decode_with(&bytes, |_, _| Ok(None)).unwrap();
        assert_eq!(decoded.info, info);
        assert_eq!(decoded.details, None);
    }

// # ✅ 2. Details win on collision with base fields

    #[derive(Debug, PartialEq)]
    struct DisplayTitle(String);

    impl TrackDetails for DisplayTitle {
        fn merge_into(&self, info: &mut TrackInfo) {
            info.title = self.0.clone();
        }
    }

    #[test]
    fn details_override_base_field() {
        let display = DisplayTitle("Bohemian Rhapsody (Remastered)".into());
        let track = Track::with_details(spotify_track().info, display);
        let bytes = encode_with(&track, |w, t| match &t.details {
            Some(d) => w.write_text(&d.0),
            None => Ok(()),
        })
        .unwrap();

        let decoded =
            decode_with(&bytes, |r, _| r.read_text().map(|t| Some(DisplayTitle(t)))).unwrap();
        assert_eq!(decoded.title, "Bohemian Rhapsody (Remastered)");
        assert_eq!(decoded.author, "Queen");

        // base decoder still sees the wire title
        let base = decode_with(&bytes, |r, _| r.skip(2 + 30).map(|_| None::<()>)).unwrap();
        assert_eq!(base.title, "Bohemian Rhapsody");
    }

// # ❌ 3. Unmatched hooks corrupt trailing fields

    #[test]
    fn missing_decode_hook_corrupts_position() {
        init_logger();
        let track = Track::with_details(spotify_track().info, 0xDEAD_BEEF_u32);
        let bytes = encode_with(&track, |w, _| {
            w.write_u64(0xDEAD_BEEF);
            Ok(())
        })
        .unwrap();

        // Extension bytes are read as `position`; the real position is
        // left over and skipped. Known hazard, not a faithful decode.
        let decoded = decode(&bytes).unwrap();
        assert_ne!(decoded.position, track.position);
        assert_eq!(decoded.position, 0xDEAD_BEEF);
    }

    #[test]
    fn strict_config_flags_unconsumed_extension_bytes() {
        init_logger();
        let track = Track::with_details(spotify_track().info, ());
        let bytes = encode_with(&track, |w, _| {
            w.write_u64(7);
            Ok(())
        })
        .unwrap();

        let err = decode_with_config(&bytes, &CodecConfig::strict(), |_, _| Ok(None::<()>))
            .unwrap_err();
        assert!(matches!(err, TrackError::TrailingPayload { remaining: 8 }));
    }

// # ❌ 4. Hook failures surface unchanged

    #[test]
    fn decode_hook_error_propagates() {
        let bytes = encode(&spotify_track().info).unwrap();
        let err = decode_with(&bytes, |_, _| {
            Err::<Option<()>, _>(TrackError::Extension("unknown source".into()))
        })
        .unwrap_err();
        assert!(matches!(err, TrackError::Extension(ref m) if m == "unknown source"));
        assert_eq!(err.field(), Some(Field::Details));
    }

    #[test]
    fn decode_hook_overread_is_details_truncation() {
        let bytes = encode(&spotify_track().info).unwrap();
        let err = decode_with(&bytes, |r, _| r.skip(64).map(|_| None::<()>)).unwrap_err();
        assert!(matches!(
            err,
            TrackError::Truncated { field: Field::Details, needed: 64, remaining: 8 }
        ));
    }

    #[test]
    fn encode_hook_error_propagates() {
        let track = spotify_track();
        let err = encode_with(&track, |_, _| Err(TrackError::Extension("no artwork".into())))
            .unwrap_err();
        assert!(matches!(err, TrackError::Extension(_)));
    }

    #[test]
    fn encode_hook_text_error_names_details() {
        let track = Track::with_details(spotify_track().info, "x".repeat(70_000));
        let err = encode_with(&track, |w, t| {
            w.write_text(t.details.as_deref().unwrap_or_default())
        })
        .unwrap_err();
        assert!(matches!(err, TrackError::TextTooLong { field: Field::Details, len: 70_000 }));
    }
}
