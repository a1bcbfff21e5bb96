// Integration tests for lz/: LZ78 dictionary codec and its text wire form
//
// Covers:
//   - seed determinism and the exact code sequences for short inputs
//   - the self-reference decode case
//   - strict parsing of the comma-separated form
//   - round-trips, including binary and highly repetitive data

use rlz::lz::{self, CodeStream, FIRST_CODE};
use rlz::CodecError;

fn noise(len: usize, mut state: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn seeds_come_before_learned_codes() {
    assert_eq!(lz::encode(b"AAAA"), "65,256,65");
    assert_eq!(lz::encode_codes(b"AAAA").codes()[0], 65);
}

#[test]
fn classic_sequence() {
    assert_eq!(
        lz::encode(b"TOBEORNOTTOBEORTOBEORNOT"),
        "84,79,66,69,79,82,78,79,84,256,258,260,265,259,261,263"
    );
}

#[test]
fn empty_input_is_empty_text() {
    assert_eq!(lz::encode(b""), "");
    assert!(lz::encode_codes(b"").is_empty());
    assert_eq!(lz::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn repetitive_input_uses_learned_codes() {
    let codes = lz::encode_codes(&[0u8; 10_000]);
    assert!(codes.len() < 200);
    assert!(codes.codes()[1..].iter().all(|&c| c >= FIRST_CODE));
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn self_reference_code_decodes() {
    assert_eq!(lz::decode("65,256").unwrap(), b"AAA");
    assert_eq!(lz::decode("65,66,256,258").unwrap(), b"ABABABA");
}

#[test]
fn first_code_must_be_a_seed() {
    let err = lz::decode("256").unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidCode {
            position: 0,
            token: "256".to_owned()
        }
    );
    assert!(matches!(
        lz::decode("70000").unwrap_err(),
        CodecError::InvalidCode { position: 0, .. }
    ));
}

#[test]
fn code_beyond_next_is_rejected() {
    // Only 256 exists after two codes; 258 skips ahead.
    let err = lz::decode("65,66,258").unwrap_err();
    assert!(matches!(err, CodecError::InvalidCode { position: 2, .. }));
}

#[test]
fn non_numeric_tokens_are_rejected() {
    for text in ["-1", "65,-1", "65,,66", "65, 66", "65,", "abc", "99999999999"] {
        assert!(
            matches!(lz::decode(text), Err(CodecError::InvalidCode { .. })),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn code_stream_text_form() {
    let stream: CodeStream = "65,66,256".parse().unwrap();
    assert_eq!(stream.codes(), &[65, 66, 256]);
    assert_eq!(stream.to_string(), "65,66,256");
    assert_eq!(lz::decode_codes(stream.codes()).unwrap(), b"ABAB");
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_edge_inputs() {
    let all_bytes: Vec<u8> = (0..=255u8).collect();
    let text = "the quick brown fox jumps over the lazy dog; ".repeat(200);
    let cases: Vec<Vec<u8>> = vec![
        vec![0],
        vec![255; 700],
        all_bytes,
        text.into_bytes(),
        noise(20_000, 12345),
    ];
    for input in cases {
        let text = lz::encode(&input);
        assert_eq!(lz::decode(&text).unwrap(), input, "len {}", input.len());
    }
}
