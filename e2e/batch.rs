// e2e/batch.rs: glob and directory inputs through the `rlz` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn rlz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rlz"))
}

fn rlz(args: &[&str]) -> Output {
    Command::new(rlz_bin())
        .env_remove("RLZ_ALGORITHM")
        .args(args)
        .output()
        .expect("failed to run rlz")
}

/// src/a.txt, src/b.txt, src/nested/c.txt, src/logo.png
fn make_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::write(src.join("a.txt"), "aaaa bbbb\n".repeat(50)).unwrap();
    fs::write(src.join("b.txt"), "zzzzzzzz\n".repeat(80)).unwrap();
    fs::write(src.join("nested/c.txt"), "cccc\n".repeat(10)).unwrap();
    fs::write(src.join("logo.png"), b"\x89PNG\r\n\x1a\nIHDR....").unwrap();
    dir
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn glob_into_output_directory() {
    let dir = make_tree();
    let pattern = dir.path().join("src/*.txt");
    let out_dir = dir.path().join("dist");

    let out = rlz(&["compress", s(&pattern), s(&out_dir)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out_dir.join("a.txt.rle").is_file());
    assert!(out_dir.join("b.txt.rle").is_file());
    assert!(!out_dir.join("c.txt.rle").exists(), "non-recursive pattern");
}

#[test]
fn recursive_glob_reaches_subdirectories() {
    let dir = make_tree();
    let pattern = dir.path().join("src/**/*.txt");
    let out_dir = dir.path().join("dist");

    let out = rlz(&["compress", s(&pattern), s(&out_dir)]);
    assert!(out.status.success());
    assert!(out_dir.join("c.txt.rle").is_file());
}

#[test]
fn directory_in_place_and_back() {
    let dir = make_tree();
    let src = dir.path().join("src");
    let original = fs::read(src.join("nested/c.txt")).unwrap();

    let out = rlz(&["compress", "--rm", s(&src)]);
    assert!(out.status.success());
    assert!(src.join("logo.png.lz").is_file(), "binary file chooses lz");
    assert!(src.join("nested/c.txt.rle").is_file());
    assert!(!src.join("nested/c.txt").exists(), "--rm removes sources");

    let out = rlz(&["decompress", "--rm", s(&src)]);
    assert!(out.status.success());
    assert_eq!(fs::read(src.join("nested/c.txt")).unwrap(), original);
    assert!(!src.join("logo.png.lz").exists());
}

#[test]
fn failures_do_not_stop_the_batch() {
    let dir = make_tree();
    let src = dir.path().join("src");
    // Not a valid RLE stream: odd length.
    fs::write(src.join("broken.rle"), b"xyz").unwrap();
    fs::write(src.join("fine.rle"), [b'k', 3]).unwrap();

    let pattern = src.join("*.rle");
    let out_dir = dir.path().join("out");
    let out = rlz(&["decompress", s(&pattern), s(&out_dir)]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(out_dir.join("fine")).unwrap(), b"kkk");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 of 2 files failed"), "stderr: {stderr}");
}

#[test]
fn unmatched_glob_fails() {
    let dir = make_tree();
    let pattern = dir.path().join("src/*.nothing");
    let out = rlz(&["compress", s(&pattern)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no files match"));
}

#[test]
fn batch_refuses_stdout() {
    let dir = make_tree();
    let out = rlz(&["compress", "-c", s(&dir.path().join("src"))]);
    assert_eq!(out.status.code(), Some(1));
}
