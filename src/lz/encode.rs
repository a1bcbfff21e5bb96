//! Greedy longest-match encoder.

use tracing::debug;

use crate::lz::dict::EncodeDict;
use crate::lz::wire::CodeStream;

/// Encode `input` into a code stream.
///
/// `current` holds the code of the longest dictionary phrase matching the
/// bytes consumed since the last emission. A byte that cannot extend it
/// flushes `current`, teaches the dictionary `current + byte`, and restarts
/// the match at `byte`. Single-byte phrases are seeded, so a fresh match
/// always starts at the byte's own code.
///
/// Output depends only on `input`: the same bytes give the same codes.
pub fn encode_codes(input: &[u8]) -> CodeStream {
    let mut dict = EncodeDict::new();
    let mut codes = CodeStream::new();
    let mut current: Option<u32> = None;

    for &byte in input {
        let Some(prefix) = current else {
            current = Some(u32::from(byte));
            continue;
        };
        match dict.child(prefix, byte) {
            Some(code) => current = Some(code),
            None => {
                codes.push(prefix);
                dict.insert(prefix, byte);
                current = Some(u32::from(byte));
            }
        }
    }
    if let Some(code) = current {
        codes.push(code);
    }

    debug!(
        input = input.len(),
        codes = codes.len(),
        learned = dict.learned(),
        "lz encode"
    );
    codes
}

/// Encode `input` straight to the comma-separated text form.
pub fn encode(input: &[u8]) -> String {
    encode_codes(input).render()
}
