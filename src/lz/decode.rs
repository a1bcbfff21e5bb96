//! Dictionary-rebuilding decoder.

use tracing::debug;

use crate::error::{CodecError, CodecResult};
use crate::lz::dict::{DecodeTable, Phrase, Span};
use crate::lz::wire::CodeStream;

/// Decode a list of codes.
///
/// The first code has nothing before it to learn from, so it must be a seed
/// (`< 256`). Every later code is either already in the table, or equal to
/// the code about to be assigned: the encoder emitted a phrase in the same
/// step it defined it, and that phrase can only be `previous + previous[0]`.
/// Any other code fails with [`CodecError::InvalidCode`].
pub fn decode_codes(codes: &[u32]) -> CodecResult<Vec<u8>> {
    let mut out = Vec::new();
    let Some((&first, rest)) = codes.split_first() else {
        return Ok(out);
    };

    let seed = u8::try_from(first).map_err(|_| CodecError::invalid_code(0, first))?;
    out.push(seed);

    let mut table = DecodeTable::new();
    let mut previous = Span { start: 0, len: 1 };

    for (index, &code) in rest.iter().enumerate() {
        let start = out.len();
        match table.resolve(code) {
            Some(Phrase::Seed(byte)) => out.push(byte),
            Some(Phrase::Learned(span)) => out.extend_from_within(span.range()),
            None if table.next_code() == Some(code) => {
                let head = out[previous.start];
                out.extend_from_within(previous.range());
                out.push(head);
            }
            None => return Err(CodecError::invalid_code(index + 1, code)),
        }
        // `previous` ends where the new entry starts, so previous + entry[0]
        // is one more byte of the same span.
        table.push(Span {
            start: previous.start,
            len: previous.len + 1,
        });
        previous = Span {
            start,
            len: out.len() - start,
        };
    }

    debug!(
        codes = codes.len(),
        output = out.len(),
        learned = table.learned(),
        "lz decode"
    );
    Ok(out)
}

/// Parse the comma-separated text form and decode it.
pub fn decode(text: &str) -> CodecResult<Vec<u8>> {
    let codes = CodeStream::parse(text)?;
    decode_codes(codes.codes())
}
