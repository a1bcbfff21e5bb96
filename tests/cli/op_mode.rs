// Integration tests for cli/op_mode.rs: output naming and env defaults

use std::path::{Path, PathBuf};

use rlz::cli::op_mode::{init_algorithm_from, output_name, OpMode};
use rlz::Algorithm;

#[test]
fn op_mode_display() {
    assert_eq!(OpMode::Compress.to_string(), "compress");
    assert_eq!(OpMode::Decompress.to_string(), "decompress");
}

#[test]
fn env_default_accepts_known_tags_only() {
    assert_eq!(init_algorithm_from(Some("rle")), Some(Algorithm::Rle));
    assert_eq!(init_algorithm_from(Some("LZ")), Some(Algorithm::Lz));
    assert_eq!(init_algorithm_from(Some("brotli")), None);
    assert_eq!(init_algorithm_from(None), None);
}

#[test]
fn names_follow_the_algorithm_extension() {
    let src = Path::new("data/report.csv");
    assert_eq!(
        output_name(src, None, OpMode::Compress, Algorithm::Lz),
        PathBuf::from("data/report.csv.lz")
    );
    assert_eq!(
        output_name(Path::new("data/report.csv.lz"), None, OpMode::Decompress, Algorithm::Lz),
        PathBuf::from("data/report.csv")
    );
}

#[test]
fn mismatched_extension_gets_out_suffix() {
    // An explicit -a rle on a .lz file does not strip ".lz".
    assert_eq!(
        output_name(Path::new("x.lz"), None, OpMode::Decompress, Algorithm::Rle),
        PathBuf::from("x.lz.out")
    );
}
