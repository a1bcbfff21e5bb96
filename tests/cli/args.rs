// Integration tests for cli/args.rs: clap definition and option resolution

use rlz::cli::args::{Cli, ParsedArgs};
use rlz::cli::op_mode::OpMode;
use rlz::Algorithm;

use clap::error::ErrorKind;
use clap::Parser;

fn resolve(argv: &[&str]) -> ParsedArgs {
    ParsedArgs::resolve(Cli::try_parse_from(argv).unwrap(), None)
}

#[test]
fn positional_operation_and_paths() {
    let args = resolve(&["rlz", "compress", "in.txt", "out.rle"]);
    assert_eq!(args.op_mode, OpMode::Compress);
    assert_eq!(args.input.as_deref(), Some("in.txt"));
    assert_eq!(args.output.as_deref(), Some("out.rle"));
    assert_eq!(args.prefs.algorithm, None);
}

#[test]
fn input_and_output_are_optional() {
    let args = resolve(&["rlz", "decompress"]);
    assert_eq!(args.op_mode, OpMode::Decompress);
    assert_eq!(args.input, None);
    assert_eq!(args.output, None);
}

#[test]
fn flags_map_to_prefs() {
    let args = resolve(&["rlz", "compress", "-f", "-c", "--rm", "-a", "LZ", "x"]);
    assert!(args.prefs.overwrite);
    assert!(args.prefs.force_stdout);
    assert!(args.prefs.remove_src);
    assert_eq!(args.prefs.algorithm, Some(Algorithm::Lz));
}

#[test]
fn verbosity_counts() {
    assert_eq!(resolve(&["rlz", "compress"]).display_level, 2);
    assert_eq!(resolve(&["rlz", "compress", "-vv"]).display_level, 4);
    assert_eq!(resolve(&["rlz", "compress", "-q"]).display_level, 1);
    assert_eq!(resolve(&["rlz", "compress", "-qqq"]).display_level, 0);
}

#[test]
fn unknown_algorithm_is_a_usage_error() {
    let err = Cli::try_parse_from(["rlz", "compress", "-a", "zstd", "x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn unknown_operation_is_a_usage_error() {
    let err = Cli::try_parse_from(["rlz", "squash", "x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn help_and_version_are_early_exits() {
    let err = Cli::try_parse_from(["rlz", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let err = Cli::try_parse_from(["rlz", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}
