//! Operation mode and environment-driven defaults.
//!
//! - [`OpMode`]: compress or decompress.
//! - [`init_algorithm`]: default algorithm from `RLZ_ALGORITHM`.
//! - [`output_name`]: destination filename derived from a source path.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::codec::Algorithm;
use crate::config::{DECODED_EXTENSION, ENV_ALGORITHM};
use crate::displaylevel;

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OpMode {
    /// Encode the input with RLE or LZ
    Compress,
    /// Decode a stream produced by `compress`
    Decompress,
}

impl fmt::Display for OpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpMode::Compress => f.write_str("compress"),
            OpMode::Decompress => f.write_str("decompress"),
        }
    }
}

/// Read the default algorithm from the `RLZ_ALGORITHM` environment variable.
pub fn init_algorithm() -> Option<Algorithm> {
    init_algorithm_from(std::env::var(ENV_ALGORITHM).ok().as_deref())
}

/// Testable core of [`init_algorithm`].
///
/// An unset or empty variable yields `None`; an unknown tag is ignored with a
/// warning at display level 2.
pub fn init_algorithm_from(env_val: Option<&str>) -> Option<Algorithm> {
    let env = env_val?.trim();
    if env.is_empty() {
        return None;
    }
    match env.parse::<Algorithm>() {
        Ok(algorithm) => Some(algorithm),
        Err(_) => {
            displaylevel!(
                2,
                "Ignore environment variable setting {}={}: expected rle or lz \n",
                ENV_ALGORITHM,
                env
            );
            None
        }
    }
}

/// Destination filename for `src` under `op` with `algorithm`.
///
/// Compression appends the algorithm's extension (`notes.txt` →
/// `notes.txt.rle`). Decompression strips it (`notes.txt.rle` →
/// `notes.txt`), or appends `.out` when the source does not carry it. The
/// result sits in `out_dir` when given, else next to the source.
pub fn output_name(src: &Path, out_dir: Option<&Path>, op: OpMode, algorithm: Algorithm) -> PathBuf {
    let file_name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = algorithm.extension();
    let name = match op {
        OpMode::Compress => format!("{file_name}{ext}"),
        OpMode::Decompress => match file_name.strip_suffix(ext) {
            Some(base) if !base.is_empty() => base.to_owned(),
            _ => format!("{file_name}{DECODED_EXTENSION}"),
        },
    };
    let dir = out_dir.or_else(|| src.parent()).unwrap_or(Path::new(""));
    dir.join(name)
}
