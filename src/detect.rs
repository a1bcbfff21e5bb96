//! Picks an algorithm when the caller did not name one.
//!
//! This is policy, not part of the codec contract: text-like inputs go to
//! RLE, binary and already-compressed inputs go to LZ. For decompression the
//! stream's own extension decides. Without one the stream's shape decides,
//! and a stream that decodes cleanly as both formats is left undecided.

use std::path::Path;

use infer::MatcherType;

use crate::codec::{self, Algorithm};
use crate::rle;

/// Extensions treated as text (RLE).
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "md", "csv", "tsv", "log", "json", "xml", "html", "htm", "css", "yaml", "yml",
    "toml", "ini",
];

/// Extensions treated as binary (LZ).
const BINARY_EXTENSIONS: &[&str] = &[
    "pdf", "zip", "gz", "jpg", "jpeg", "png", "gif", "bmp", "exe", "dll", "so", "bin", "o", "a",
];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Algorithm suggested by the extension of an uncompressed file, if any.
pub fn from_extension(path: &Path) -> Option<Algorithm> {
    let ext = extension_of(path)?;
    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Some(Algorithm::Rle)
    } else if BINARY_EXTENSIONS.contains(&ext.as_str()) {
        Some(Algorithm::Lz)
    } else {
        None
    }
}

/// Algorithm suggested by a content sample of an uncompressed input.
///
/// A type recognised by [`infer`] decides by its matcher: text formats
/// (HTML, XML, shell scripts) choose RLE, everything else (images, archives,
/// media, executables, documents) chooses LZ. Unrecognised content chooses
/// RLE when it is plain ASCII and LZ otherwise. An empty sample counts as text.
pub fn from_content(sample: &[u8]) -> Algorithm {
    match infer::get(sample) {
        Some(kind) => match kind.matcher_type() {
            MatcherType::Text => Algorithm::Rle,
            _ => Algorithm::Lz,
        },
        None if sample.is_ascii() => Algorithm::Rle,
        None => Algorithm::Lz,
    }
}

/// Choose how to compress an input: by extension first, then by content.
pub fn for_compression(path: Option<&Path>, sample: &[u8]) -> Algorithm {
    path.and_then(from_extension)
        .unwrap_or_else(|| from_content(sample))
}

/// Algorithm whose stream extension `path` carries (`.rle` / `.lz`).
pub fn from_stream_extension(path: &Path) -> Option<Algorithm> {
    let ext = extension_of(path)?;
    Algorithm::ALL
        .into_iter()
        .find(|a| a.extension().trim_start_matches('.') == ext)
}

/// Whether `stream` has the shape of an LZ code stream: digits and commas,
/// starting with a digit.
pub fn looks_like_code_stream(stream: &[u8]) -> bool {
    !stream.is_empty()
        && stream[0].is_ascii_digit()
        && stream.iter().all(|&b| b.is_ascii_digit() || b == b',')
}

/// Whether `stream` is a well-formed RLE stream: even length, no zero run.
pub fn is_rle_stream(stream: &[u8]) -> bool {
    rle::tokens(stream).all(|token| token.is_ok())
}

/// Whether `stream` decodes as an LZ code stream.
pub fn is_lz_stream(stream: &[u8]) -> bool {
    looks_like_code_stream(stream) && codec::decode(stream, Algorithm::Lz).is_ok()
}

/// Choose how to decompress a stream: by stream extension, then by shape.
///
/// Returns `None` when there is no stream extension and `stream` decodes as
/// both formats. An RLE frame whose run byte is a digit or `,` is
/// indistinguishable from LZ text, and guessing would silently produce the
/// wrong bytes.
pub fn for_decompression(path: Option<&Path>, stream: &[u8]) -> Option<Algorithm> {
    if let Some(algorithm) = path.and_then(from_stream_extension) {
        return Some(algorithm);
    }
    match (is_lz_stream(stream), is_rle_stream(stream)) {
        (true, true) => None,
        (true, false) => Some(Algorithm::Lz),
        (false, _) => Some(Algorithm::Rle),
    }
}
