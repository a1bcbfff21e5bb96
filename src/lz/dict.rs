//! Phrase dictionaries for the LZ codec.
//!
//! Both are created inside a single encode or decode call and dropped with
//! it. The encoder looks phrases up by `(prefix code, next byte)`, which is
//! all the longest-match scan ever asks. The decoder stores every learned
//! phrase as a span of its own output buffer: phrase `k` is always
//! `previous entry + first byte of entry k-1`, and those bytes already sit
//! next to each other in the output.

use std::collections::HashMap;
use std::ops::Range;

/// First code assigned to a learned phrase. Codes below it are the seeds.
pub const FIRST_CODE: u32 = 256;

/// Code value never assigned. The dictionary is full when `next_code` reaches it.
pub const LAST_CODE: u32 = u32::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// Encoder side
// ─────────────────────────────────────────────────────────────────────────────

/// Trie of learned phrases, keyed by `(prefix code, appended byte)`.
///
/// Seeds are implicit: the code of the single-byte phrase `b` is `b`.
#[derive(Debug)]
pub(crate) struct EncodeDict {
    children: HashMap<(u32, u8), u32>,
    next_code: u32,
}

impl EncodeDict {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            next_code: FIRST_CODE,
        }
    }

    /// Code of `phrase(prefix) + byte`, if known.
    #[inline]
    pub(crate) fn child(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Learn `phrase(prefix) + byte` under the next free code. No-op when full.
    pub(crate) fn insert(&mut self, prefix: u32, byte: u8) {
        if self.next_code == LAST_CODE {
            return;
        }
        self.children.insert((prefix, byte), self.next_code);
        self.next_code += 1;
    }

    /// Number of learned phrases, seeds excluded.
    pub(crate) fn learned(&self) -> usize {
        self.children.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoder side
// ─────────────────────────────────────────────────────────────────────────────

/// Location of a phrase inside the decoder's output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl Span {
    #[inline]
    pub(crate) fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// What a code stands for during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phrase {
    /// One of the 256 seeded single-byte phrases.
    Seed(u8),
    /// A learned phrase, stored in the output buffer.
    Learned(Span),
}

/// Arena of learned phrases indexed by `code - FIRST_CODE`.
#[derive(Debug)]
pub(crate) struct DecodeTable {
    spans: Vec<Span>,
}

impl DecodeTable {
    pub(crate) fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Code the next learned phrase will receive, or `None` once the table is full.
    pub(crate) fn next_code(&self) -> Option<u32> {
        u32::try_from(self.spans.len())
            .ok()
            .and_then(|n| n.checked_add(FIRST_CODE))
            .filter(|&code| code != LAST_CODE)
    }

    /// Resolve `code` against the seeds and the phrases learned so far.
    pub(crate) fn resolve(&self, code: u32) -> Option<Phrase> {
        match u8::try_from(code) {
            Ok(byte) => Some(Phrase::Seed(byte)),
            Err(_) => self
                .spans
                .get((code - FIRST_CODE) as usize)
                .copied()
                .map(Phrase::Learned),
        }
    }

    /// Append a learned phrase. No-op when full, matching [`EncodeDict::insert`].
    pub(crate) fn push(&mut self, span: Span) {
        if self.next_code().is_some() {
            self.spans.push(span);
        }
    }

    pub(crate) fn learned(&self) -> usize {
        self.spans.len()
    }
}
