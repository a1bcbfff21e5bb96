// Integration tests for codec.rs: algorithm tags, the Codec trait, and the
// encode/decode dispatcher.

use rlz::codec::{codec_for, encode_with_report};
use rlz::{decode, encode, Algorithm, CodecError, Report};

#[test]
fn tags_round_trip_through_display() {
    for algorithm in Algorithm::ALL {
        let tag = algorithm.to_string();
        assert_eq!(tag.parse::<Algorithm>().unwrap(), algorithm);
    }
}

#[test]
fn unknown_tag_is_unsupported() {
    let err = "lzma".parse::<Algorithm>().unwrap_err();
    assert_eq!(err, CodecError::UnsupportedAlgorithm("lzma".to_owned()));
    assert!(err.to_string().contains("lzma"));
}

#[test]
fn dispatcher_matches_direct_codecs() {
    let input = b"mississippi river banks";
    assert_eq!(encode(input, Algorithm::Rle).unwrap(), rlz::rle::encode(input));
    assert_eq!(
        encode(input, Algorithm::Lz).unwrap(),
        rlz::lz::encode(input).into_bytes()
    );
}

#[test]
fn codec_objects_report_their_algorithm() {
    for algorithm in Algorithm::ALL {
        assert_eq!(codec_for(algorithm).algorithm(), algorithm);
    }
}

#[test]
fn both_algorithms_round_trip() {
    let input: Vec<u8> = (0..5000u32).map(|i| (i % 7) as u8 * 31).collect();
    for algorithm in Algorithm::ALL {
        let packed = encode(&input, algorithm).unwrap();
        assert_eq!(decode(&packed, algorithm).unwrap(), input, "{algorithm}");
    }
}

#[test]
fn empty_input_is_idempotent() {
    for algorithm in Algorithm::ALL {
        assert!(encode(b"", algorithm).unwrap().is_empty());
        assert!(decode(b"", algorithm).unwrap().is_empty());
    }
}

#[test]
fn lz_stream_must_be_ascii() {
    let err = decode(&[b'6', b'5', 0xC3, 0xA9], Algorithm::Lz).unwrap_err();
    assert!(matches!(err, CodecError::InvalidInputType(_)));
}

#[test]
fn malformed_streams_surface_codec_errors() {
    assert!(matches!(
        decode(b"A", Algorithm::Rle),
        Err(CodecError::MalformedStream { .. })
    ));
    assert!(matches!(
        decode(b"65,-1", Algorithm::Lz),
        Err(CodecError::InvalidCode { position: 1, .. })
    ));
}

#[test]
fn report_describes_sizes() {
    let (packed, report) = encode_with_report(&[b'x'; 300], Algorithm::Rle).unwrap();
    assert_eq!(packed.len(), 4);
    assert_eq!(report, Report::new(Algorithm::Rle, 300, 4));
    assert_eq!(report.to_string(), "300 -> 4 bytes (1.33%)");
    assert_eq!(Report::new(Algorithm::Lz, 0, 0).ratio(), 0.0);
}
