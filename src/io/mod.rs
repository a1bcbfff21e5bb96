//! File-level compression and decompression for the `rlz` binary.
//!
//! Inputs are read whole, passed through the codec chosen by
//! [`process::resolve_algorithm`], and written in one go.

pub mod file_io;
pub mod prefs;
pub mod process;

pub use prefs::Prefs;

// ── Input and output endpoints ───────────────────────────────────────────────
pub use file_io::{Destination, Source};

// ── Per-file and batch entry points ──────────────────────────────────────────
pub use process::{
    process_file_into, process_filename, process_multiple_filenames, resolve_algorithm, transform,
};
