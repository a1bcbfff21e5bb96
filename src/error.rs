//! Error type shared by both codecs and the dispatcher.

use std::fmt;

use thiserror::Error;

/// Why an RLE stream was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFault {
    /// A value byte at the end of the stream has no run-length byte after it.
    OddLength,
    /// A run-length byte is zero. The encoder never writes one.
    ZeroRun,
}

impl fmt::Display for StreamFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamFault::OddLength => f.write_str("trailing value without a run length"),
            StreamFault::ZeroRun => f.write_str("zero-length run"),
        }
    }
}

/// Errors returned by the codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// RLE stream of odd length, or a run length of zero.
    ///
    /// `offset` is the byte offset of the offending frame.
    #[error("malformed RLE stream at byte {offset}: {fault}")]
    MalformedStream { offset: usize, fault: StreamFault },

    /// LZ token that is neither a known code nor the next code to be assigned,
    /// or that is not a plain decimal integer at all.
    ///
    /// `position` is the zero-based index of the token in the code stream.
    #[error("invalid LZ code {token:?} at position {position}")]
    InvalidCode { position: usize, token: String },

    /// Algorithm tag outside `{rle, lz}`.
    #[error("unsupported algorithm: {0:?} (expected \"rle\" or \"lz\")")]
    UnsupportedAlgorithm(String),

    /// Input of the wrong kind for the requested operation.
    #[error("invalid input type: {0}")]
    InvalidInputType(&'static str),
}

impl CodecError {
    pub(crate) fn invalid_code(position: usize, token: impl ToString) -> Self {
        CodecError::InvalidCode {
            position,
            token: token.to_string(),
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
