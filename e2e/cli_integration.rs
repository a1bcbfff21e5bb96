// e2e/cli_integration.rs: black-box tests of the `rlz` binary
//
// Covers argument handling, single-file dispatch, stdin/stdout streaming,
// overwrite policy, verbosity, and exit codes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Locate the `rlz` binary produced by Cargo.
fn rlz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rlz"))
}

fn rlz() -> Command {
    let mut cmd = Command::new(rlz_bin());
    cmd.env_remove("RLZ_ALGORITHM")
        .env_remove("RLZ_LOG")
        .stdin(Stdio::null());
    cmd
}

/// Create a TempDir containing a ~4 KB text file.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "aaaaaaaabbbbbbbb run-length friendly\n".repeat(110);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn run_with_stdin(mut cmd: Command, data: &[u8]) -> std::process::Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn rlz");
    child.stdin.take().unwrap().write_all(data).unwrap();
    child.wait_with_output().unwrap()
}

// ── 1. File round-trip ───────────────────────────────────────────────────────

#[test]
fn compress_then_decompress_files() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let packed = dir.path().join("input.txt.rle");
    let restored = dir.path().join("restored.txt");

    let status = rlz()
        .args(["compress", input.to_str().unwrap(), packed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success(), "compress should exit 0");
    assert!(fs::metadata(&packed).unwrap().len() < original.len() as u64);

    let status = rlz()
        .args(["decompress", packed.to_str().unwrap(), restored.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success(), "decompress should exit 0");
    assert_eq!(fs::read(&restored).unwrap(), original);
}

// ── 2. Streams ───────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_with_explicit_algorithm() {
    let mut cmd = rlz();
    cmd.args(["compress", "-a", "lz"]);
    let out = run_with_stdin(cmd, b"TOBEORNOTTOBEORTOBEORNOT");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"84,79,66,69,79,82,78,79,84,256,258,260,265,259,261,263");

    let mut cmd = rlz();
    cmd.args(["decompress", "-a", "lz", "-", "-"]);
    let back = run_with_stdin(cmd, &out.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, b"TOBEORNOTTOBEORTOBEORNOT");
}

#[test]
fn undetected_pipe_refuses_ambiguous_stream() {
    let original = [b'1'; 49];
    let packed = run_with_stdin(rlz_compress_piped(), &original);
    assert!(packed.status.success());
    assert_eq!(packed.stdout, b"11");

    let mut cmd = rlz();
    cmd.arg("decompress");
    let guessed = run_with_stdin(cmd, &packed.stdout);
    assert_eq!(guessed.status.code(), Some(1));
    assert!(guessed.stdout.is_empty(), "no bytes may be written on refusal");
    let stderr = String::from_utf8_lossy(&guessed.stderr);
    assert!(stderr.contains("-a"), "stderr: {stderr}");

    let mut cmd = rlz();
    cmd.args(["decompress", "-a", "rle"]);
    let back = run_with_stdin(cmd, &packed.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, original);
}

#[test]
fn undetected_pipe_decodes_unambiguous_lz() {
    let mut cmd = rlz();
    cmd.args(["compress", "-a", "lz"]);
    let packed = run_with_stdin(cmd, b"ABABABA");
    assert_eq!(packed.stdout, b"65,66,256,258");

    let mut cmd = rlz();
    cmd.arg("decompress");
    let back = run_with_stdin(cmd, &packed.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, b"ABABABA");
}

/// `compress` with neither `-a` nor an input name: detection from content.
fn rlz_compress_piped() -> Command {
    let mut cmd = rlz();
    cmd.arg("compress");
    cmd
}

#[test]
fn files_named_stdin_and_stdout_are_regular_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stdin"), b"xxxxyyyy").unwrap();

    let status = rlz()
        .current_dir(dir.path())
        .args(["compress", "-a", "rle", "stdin", "stdout"])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("stdout")).unwrap(), [b'x', 4, b'y', 4]);
}

#[test]
fn environment_supplies_default_algorithm() {
    let mut cmd = rlz();
    cmd.env("RLZ_ALGORITHM", "rle").arg("compress");
    let out = run_with_stdin(cmd, b"AAAAB");
    assert!(out.status.success());
    assert_eq!(out.stdout, [b'A', 4, b'B', 1]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("Auto-detected"), "no detection when a default is set");
}

// ── 3. Detection notices and verbosity ──────────────────────────────────────

#[test]
fn detection_is_announced() {
    let (dir, input) = make_temp_input();
    let out = rlz()
        .args(["compress", input.to_str().unwrap(), dir.path().join("o").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Auto-detected algorithm: rle"), "stderr: {stderr}");
}

#[test]
fn quiet_suppresses_notices() {
    let (dir, input) = make_temp_input();
    let out = rlz()
        .args(["compress", "-q", input.to_str().unwrap(), dir.path().join("o").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn verbose_prints_size_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, vec![7u8; 300]).unwrap();
    let out = rlz()
        .args(["compress", "-v", "-a", "rle", input.to_str().unwrap(), dir.path().join("o").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("300 -> 4 bytes"), "stderr: {stderr}");
}

// ── 4. Overwrite policy ─────────────────────────────────────────────────────

#[test]
fn existing_output_needs_force() {
    let (dir, input) = make_temp_input();
    let dst = dir.path().join("taken");
    fs::write(&dst, b"keep me").unwrap();

    let status = rlz()
        .args(["compress", input.to_str().unwrap(), dst.to_str().unwrap()])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read(&dst).unwrap(), b"keep me");

    let status = rlz()
        .args(["compress", "-f", input.to_str().unwrap(), dst.to_str().unwrap()])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());
    assert_ne!(fs::read(&dst).unwrap(), b"keep me");
}

#[test]
fn directory_output_gets_derived_name() {
    let (dir, input) = make_temp_input();
    let out_dir = dir.path().join("dist");
    fs::create_dir(&out_dir).unwrap();
    let status = rlz()
        .args(["compress", "-a", "lz", input.to_str().unwrap(), out_dir.to_str().unwrap()])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(out_dir.join("input.txt.lz").is_file());
}

// ── 5. Failures and usage ───────────────────────────────────────────────────

#[test]
fn malformed_stream_fails_with_message() {
    let mut cmd = rlz();
    cmd.args(["decompress", "-a", "rle"]);
    let out = run_with_stdin(cmd, b"ABC");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed RLE stream"), "stderr: {stderr}");
}

#[test]
fn invalid_lz_code_fails() {
    let mut cmd = rlz();
    cmd.args(["decompress", "-a", "lz"]);
    let out = run_with_stdin(cmd, b"65,-1");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid LZ code"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = rlz()
        .args(["compress", dir.path().join("absent.txt").to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read input"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    let out = rlz().args(["compress", "-a", "zstd"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("zstd"));
}

#[test]
fn help_exits_zero() {
    let out = rlz().arg("--help").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("EXAMPLES"));
    assert!(stdout.contains("RLZ_ALGORITHM"));
}
