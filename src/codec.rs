//! Algorithm selection and the byte-in, byte-out codec contract.
//!
//! [`encode`] and [`decode`] are the boundary used by callers that pick the
//! algorithm at run time (the `rlz` binary among them). They never fall back
//! to another algorithm: a failure in the chosen codec is returned as is.
//!
//! The LZ codec's stream is ASCII text (`65,66,256`); handing [`decode`] a
//! non-ASCII buffer with [`Algorithm::Lz`] fails with
//! [`CodecError::InvalidInputType`]. The RLE stream is raw bytes.

use std::fmt;
use std::str::FromStr;

use crate::config::{LZ_EXTENSION, RLE_EXTENSION};
use crate::error::{CodecError, CodecResult};
use crate::{lz, rle};

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm tag
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Run-length encoding, 2-byte `(value, run)` frames.
    Rle,
    /// LZ78 dictionary coding, comma-separated decimal codes.
    Lz,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Rle, Algorithm::Lz];

    /// Lower-case tag, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Rle => "rle",
            Algorithm::Lz => "lz",
        }
    }

    /// File extension given to streams produced by this algorithm, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Algorithm::Rle => RLE_EXTENSION,
            Algorithm::Lz => LZ_EXTENSION,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    /// Case-insensitive: `rle`, `RLE`, `lz`, `Lz`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| s.eq_ignore_ascii_case(a.name()))
            .ok_or_else(|| CodecError::UnsupportedAlgorithm(s.to_owned()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Codec trait
// ─────────────────────────────────────────────────────────────────────────────

/// A reversible byte transform.
///
/// Implementors hold no state between calls; every call builds and drops its
/// own working tables, so a shared `&dyn Codec` is safe across threads.
pub trait Codec: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Encode `input`. Every byte sequence is encodable.
    fn encode(&self, input: &[u8]) -> Vec<u8>;

    /// Decode a stream produced by [`Codec::encode`].
    fn decode(&self, stream: &[u8]) -> CodecResult<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec;

impl Codec for RleCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rle
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        rle::encode(input)
    }

    fn decode(&self, stream: &[u8]) -> CodecResult<Vec<u8>> {
        rle::decode(stream)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LzCodec;

impl Codec for LzCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        lz::encode(input).into_bytes()
    }

    fn decode(&self, stream: &[u8]) -> CodecResult<Vec<u8>> {
        const NOT_TEXT: CodecError = CodecError::InvalidInputType("LZ code stream must be ASCII text");
        if !stream.is_ascii() {
            return Err(NOT_TEXT);
        }
        let text = std::str::from_utf8(stream).map_err(|_| NOT_TEXT)?;
        lz::decode(text)
    }
}

/// The codec implementing `algorithm`.
pub fn codec_for(algorithm: Algorithm) -> &'static dyn Codec {
    match algorithm {
        Algorithm::Rle => &RleCodec,
        Algorithm::Lz => &LzCodec,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Encode `input` with `algorithm`.
///
/// Returns `Result` for symmetry with [`decode`]; neither codec can fail to
/// encode.
pub fn encode(input: &[u8], algorithm: Algorithm) -> CodecResult<Vec<u8>> {
    Ok(codec_for(algorithm).encode(input))
}

/// Decode `stream` with `algorithm`.
pub fn decode(stream: &[u8], algorithm: Algorithm) -> CodecResult<Vec<u8>> {
    codec_for(algorithm).decode(stream)
}

// ─────────────────────────────────────────────────────────────────────────────
// Size report
// ─────────────────────────────────────────────────────────────────────────────

/// Input and output sizes of one codec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub input_len: usize,
    pub output_len: usize,
}

impl Report {
    pub fn new(algorithm: Algorithm, input_len: usize, output_len: usize) -> Self {
        Self {
            algorithm,
            input_len,
            output_len,
        }
    }

    /// `output_len / input_len`; 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.output_len as f64 / self.input_len as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} bytes ({:.2}%)",
            self.input_len,
            self.output_len,
            self.ratio() * 100.0
        )
    }
}

/// [`encode`], plus the sizes involved.
pub fn encode_with_report(input: &[u8], algorithm: Algorithm) -> CodecResult<(Vec<u8>, Report)> {
    let out = encode(input, algorithm)?;
    let report = Report::new(algorithm, input.len(), out.len());
    Ok((out, report))
}
