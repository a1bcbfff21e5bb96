//! Text form of an LZ code stream: ASCII decimal codes joined by `,`.
//!
//! `65,66,256` is the stream `[65, 66, 256]`; the empty string is the empty
//! stream. Parsing is strict: no whitespace, no sign, no empty field, and
//! every field must fit a `u32`. A field that breaks any of these rules is
//! reported as [`CodecError::InvalidCode`] at its position.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, CodecResult};

/// Field separator of the text form.
pub const SEPARATOR: char = ',';

/// Ordered list of LZ codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeStream(Vec<u32>);

impl CodeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, code: u32) {
        self.0.push(code);
    }

    /// Parse the text form. See the module docs for the accepted grammar.
    pub fn parse(text: &str) -> CodecResult<Self> {
        if text.is_empty() {
            return Ok(Self::new());
        }
        text.split(SEPARATOR)
            .enumerate()
            .map(|(position, field)| parse_code(position, field))
            .collect::<CodecResult<Vec<u32>>>()
            .map(CodeStream)
    }

    /// Render the text form. Inverse of [`CodeStream::parse`].
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn parse_code(position: usize, field: &str) -> CodecResult<u32> {
    // u32::from_str also takes a leading '+', which the format does not.
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::invalid_code(position, field));
    }
    field
        .parse::<u32>()
        .map_err(|_| CodecError::invalid_code(position, field))
}

impl fmt::Display for CodeStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes = self.0.iter();
        if let Some(first) = codes.next() {
            write!(f, "{first}")?;
            for code in codes {
                write!(f, "{SEPARATOR}{code}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CodeStream {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<u32>> for CodeStream {
    fn from(codes: Vec<u32>) -> Self {
        CodeStream(codes)
    }
}

impl AsRef<[u32]> for CodeStream {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}
