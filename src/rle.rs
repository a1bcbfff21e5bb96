//! Run-length encoding over raw bytes.
//!
//! A stream is a flat sequence of 2-byte frames `(value, run)` with `run` in
//! `1..=255`. Runs longer than [`MAX_RUN`] are split into several frames
//! carrying the same value, every frame but the last holding 255.
//!
//! ```
//! let stream = rlz::rle::encode(b"AAAABBBCCDAA");
//! assert_eq!(stream, [b'A', 4, b'B', 3, b'C', 2, b'D', 1, b'A', 2]);
//! assert_eq!(rlz::rle::decode(&stream).unwrap(), b"AAAABBBCCDAA");
//! ```

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use tracing::debug;

use crate::error::{CodecError, CodecResult, StreamFault};

/// Longest run a single frame can carry.
pub const MAX_RUN: usize = u8::MAX as usize;

/// Bytes per frame: one value byte followed by one run-length byte.
pub const FRAME_SIZE: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One `(value, run)` pair. `run` is never zero in a well-formed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleToken {
    pub value: u8,
    pub run: u8,
}

impl RleToken {
    /// Wire form of the token.
    #[inline]
    pub fn to_bytes(self) -> [u8; FRAME_SIZE] {
        [self.value, self.run]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Split `input` into tokens, longest runs first, left to right.
///
/// Scanning stops each run at [`MAX_RUN`] bytes, so a run of `n` identical
/// bytes yields `ceil(n / 255)` tokens and never a zero-length one.
pub fn encode_tokens(input: &[u8]) -> Vec<RleToken> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while let Some(&value) = rest.first() {
        let run = rest
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == value)
            .count();
        tokens.push(RleToken {
            value,
            run: run as u8,
        });
        rest = &rest[run..];
    }
    tokens
}

/// Encode `input` into a run-length stream. Empty input yields an empty stream.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let tokens = encode_tokens(input);
    let mut out = Vec::with_capacity(tokens.len() * FRAME_SIZE);
    for token in &tokens {
        out.extend_from_slice(&token.to_bytes());
    }
    debug!(
        input = input.len(),
        tokens = tokens.len(),
        "rle encode"
    );
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Iterator over the frames of a stream, validating each one.
///
/// Yields an error for the first zero-length run, or for a dangling value byte
/// at the end, and then stops.
pub struct Tokens<'a> {
    frames: ChunksExact<'a, u8>,
    offset: usize,
    failed: bool,
}

/// Iterate the tokens of `stream`. See [`Tokens`].
pub fn tokens(stream: &[u8]) -> Tokens<'_> {
    Tokens {
        frames: stream.chunks_exact(FRAME_SIZE),
        offset: 0,
        failed: false,
    }
}

impl Iterator for Tokens<'_> {
    type Item = CodecResult<RleToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let Some(frame) = self.frames.next() else {
            if self.frames.remainder().is_empty() {
                return None;
            }
            self.failed = true;
            return Some(Err(CodecError::MalformedStream {
                offset: self.offset,
                fault: StreamFault::OddLength,
            }));
        };
        let token = RleToken {
            value: frame[0],
            run: frame[1],
        };
        if token.run == 0 {
            self.failed = true;
            return Some(Err(CodecError::MalformedStream {
                offset: self.offset,
                fault: StreamFault::ZeroRun,
            }));
        }
        self.offset += FRAME_SIZE;
        Some(Ok(token))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Decode a run-length stream.
///
/// Fails with [`CodecError::MalformedStream`] on odd length or a zero run.
/// Nothing is returned on failure, even if earlier frames were valid.
pub fn decode(stream: &[u8]) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(stream.len());
    for token in tokens(stream) {
        let token = token?;
        out.resize(out.len() + token.run as usize, token.value);
    }
    debug!(stream = stream.len(), output = out.len(), "rle decode");
    Ok(out)
}
