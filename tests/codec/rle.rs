// Integration tests for rle.rs: byte-pair run-length codec
//
// Covers:
//   - frame layout: (value, run) pairs, runs split at 255
//   - round-trips over edge-shaped inputs
//   - rejection of odd-length streams and zero runs

use rlz::rle::{self, RleToken, MAX_RUN};
use rlz::{CodecError, CodecResult};
use rlz::error::StreamFault;

/// Deterministic pseudo-random bytes (xorshift32).
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
// Frame layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mixed_runs_encode_as_pairs() {
    let packed = rle::encode(b"AAAABBBCCDAA");
    assert_eq!(packed, [b'A', 4, b'B', 3, b'C', 2, b'D', 1, b'A', 2]);
    assert_eq!(rle::decode(&packed).unwrap(), b"AAAABBBCCDAA");
}

#[test]
fn every_frame_has_a_valid_run() {
    let packed = rle::encode(&noise(4096, 7));
    assert_eq!(packed.len() % 2, 0);
    assert!(packed.chunks(2).all(|f| f[1] >= 1));
}

#[test]
fn long_runs_split_at_max_run() {
    let input = vec![0x42u8; 3 * MAX_RUN + 1];
    let tokens = rle::encode_tokens(&input);
    assert_eq!(
        tokens,
        vec![
            RleToken { value: 0x42, run: 255 },
            RleToken { value: 0x42, run: 255 },
            RleToken { value: 0x42, run: 255 },
            RleToken { value: 0x42, run: 1 },
        ]
    );
}

#[test]
fn adjacent_equal_frames_are_not_merged_on_decode() {
    // Two frames of the same value decode to their concatenation.
    assert_eq!(rle::decode(&[9, 2, 9, 3]).unwrap(), vec![9u8; 5]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_edge_inputs() {
    let all_bytes: Vec<u8> = (0..=255u8).collect();
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0],
        all_bytes,
        vec![b'z'; 1000],
        noise(10_000, 0x9e37_79b9),
    ];
    for input in cases {
        let packed = rle::encode(&input);
        assert_eq!(rle::decode(&packed).unwrap(), input, "len {}", input.len());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn odd_length_reports_trailing_offset() {
    let err = rle::decode(&[b'A', 3, b'B']).unwrap_err();
    assert_eq!(
        err,
        CodecError::MalformedStream {
            offset: 2,
            fault: StreamFault::OddLength
        }
    );
}

#[test]
fn zero_run_reports_frame_offset() {
    let err = rle::decode(&[b'A', 1, b'B', 0, b'C', 1]).unwrap_err();
    assert_eq!(
        err,
        CodecError::MalformedStream {
            offset: 2,
            fault: StreamFault::ZeroRun
        }
    );
}

#[test]
fn token_iterator_stops_after_first_error() {
    let items: Vec<CodecResult<RleToken>> = rle::tokens(&[b'A', 1, b'B', 0, b'C', 1]).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}
