//! Whole-file compression and decompression.
//!
//! - [`resolve_algorithm`]: explicit preference first, else auto-detection.
//! - [`process_filename`]: one source to one named destination (or stdout).
//! - [`process_file_into`]: one source to a derived name beside it or in an
//!   output directory.
//! - [`process_multiple_filenames`]: batch driver; keeps going past failures
//!   and returns how many files were missed.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

use crate::cli::op_mode::{output_name, OpMode};
use crate::codec::{self, Algorithm, Report};
use crate::config::DETECT_SAMPLE_SIZE;
use crate::detect;
use crate::displaylevel;
use crate::io::file_io::{read_src, write_dst, Destination, Source};
use crate::io::prefs::Prefs;

/// Pick the algorithm for one input.
///
/// `prefs.algorithm` wins when set. Otherwise compression looks at the source
/// extension, then at the first [`DETECT_SAMPLE_SIZE`] bytes; decompression
/// looks at the `.rle` / `.lz` extension, then at the stream's shape. A
/// detected choice is announced at display level 2.
///
/// Fails when a stream without extension decodes as both formats.
pub fn resolve_algorithm(
    op: OpMode,
    prefs: &Prefs,
    src: Option<&Path>,
    data: &[u8],
) -> anyhow::Result<Algorithm> {
    if let Some(algorithm) = prefs.algorithm {
        return Ok(algorithm);
    }
    let algorithm = match op {
        OpMode::Compress => {
            let sample = &data[..data.len().min(DETECT_SAMPLE_SIZE)];
            detect::for_compression(src, sample)
        }
        OpMode::Decompress => detect::for_decompression(src, data)
            .context("stream is valid as both rle and lz; name the algorithm with -a")?,
    };
    displaylevel!(2, "Auto-detected algorithm: {}\n", algorithm);
    Ok(algorithm)
}

/// Run the codec for `op` over an in-memory buffer.
pub fn transform(op: OpMode, algorithm: Algorithm, data: &[u8]) -> anyhow::Result<(Vec<u8>, Report)> {
    let out = match op {
        OpMode::Compress => codec::encode(data, algorithm),
        OpMode::Decompress => codec::decode(data, algorithm),
    }
    .with_context(|| format!("{op} with {algorithm} failed"))?;
    let report = Report::new(algorithm, data.len(), out.len());
    Ok((out, report))
}

/// Write `out` to `dst`, report, and honour `--rm`.
fn finish(
    src: Source<'_>,
    dst: Destination<'_>,
    out: &[u8],
    report: &Report,
    prefs: &Prefs,
) -> anyhow::Result<()> {
    if let (Some(s), Some(d)) = (src.path(), dst.path()) {
        if s == d {
            bail!("{src}: refusing to overwrite the source file");
        }
    }
    write_dst(dst, out, prefs).with_context(|| format!("{dst}: cannot write output"))?;

    tracing::debug!(%src, %dst, input = report.input_len, output = report.output_len, "file done");
    displaylevel!(3, "{}: {} {}\n", src, report.algorithm, report);

    if let (true, Source::File(path)) = (prefs.remove_src, src) {
        fs::remove_file(path).with_context(|| format!("{src}: cannot remove source"))?;
        displaylevel!(4, "Removed {}\n", src);
    }
    Ok(())
}

/// Process `src` into `dst`.
pub fn process_filename(
    src: Source<'_>,
    dst: Destination<'_>,
    op: OpMode,
    prefs: &Prefs,
) -> anyhow::Result<Report> {
    let data = read_src(src).with_context(|| format!("{src}: cannot read input"))?;
    let algorithm = resolve_algorithm(op, prefs, src.path(), &data).with_context(|| src.to_string())?;
    let (out, report) = transform(op, algorithm, &data).with_context(|| src.to_string())?;
    finish(src, dst, &out, &report, prefs)?;
    Ok(report)
}

/// Process `src` into a name derived from it: `.rle` / `.lz` appended on
/// compression, stripped (or `.out` appended) on decompression. The file
/// lands in `out_dir` when given, else beside the source.
pub fn process_file_into(src: &Path, out_dir: Option<&Path>, op: OpMode, prefs: &Prefs) -> anyhow::Result<Report> {
    let source = Source::File(src);
    let data = read_src(source).with_context(|| format!("{source}: cannot read input"))?;
    let algorithm = resolve_algorithm(op, prefs, Some(src), &data).with_context(|| source.to_string())?;
    let (out, report) = transform(op, algorithm, &data).with_context(|| source.to_string())?;

    let dst = output_name(src, out_dir, op, algorithm);
    finish(source, Destination::File(&dst), &out, &report, prefs)?;
    Ok(report)
}

/// Process every path in `srcs`, writing each next to its source or into
/// `out_dir`.
///
/// Failures are reported at display level 1 and counted; the remaining files
/// are still processed. Returns the number of files that failed. Only the
/// creation of `out_dir` aborts the whole batch.
pub fn process_multiple_filenames<P: AsRef<Path>>(
    srcs: &[P],
    out_dir: Option<&Path>,
    op: OpMode,
    prefs: &Prefs,
) -> anyhow::Result<usize> {
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("{}: cannot create output directory", dir.display()))?;
    }

    let mut missed_files = 0usize;
    let mut total_in = 0usize;
    let mut total_out = 0usize;
    for src in srcs {
        match process_file_into(src.as_ref(), out_dir, op, prefs) {
            Ok(report) => {
                total_in += report.input_len;
                total_out += report.output_len;
            }
            Err(e) => {
                displaylevel!(1, "Error: {:#}\n", e);
                missed_files += 1;
            }
        }
    }

    let done = srcs.len() - missed_files;
    displaylevel!(
        2,
        "{} {} files: {} -> {} bytes\n",
        op,
        done,
        total_in,
        total_out
    );
    if missed_files > 0 {
        displaylevel!(1, "{} of {} files failed\n", missed_files, srcs.len());
    }
    Ok(missed_files)
}
