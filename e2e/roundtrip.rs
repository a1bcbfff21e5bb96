// e2e/roundtrip.rs: byte-exact round-trips through the `rlz` binary
//
// Each payload is compressed with auto-detection and with both explicit
// algorithms, then decompressed using only the extension for detection.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn rlz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rlz"))
}

fn run(args: &[&str]) {
    let status = Command::new(rlz_bin())
        .env_remove("RLZ_ALGORITHM")
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run rlz");
    assert!(status.success(), "rlz {args:?} failed");
}

fn payloads() -> Vec<(&'static str, Vec<u8>)> {
    let mut state = 0x2545_f491u32;
    let noise: Vec<u8> = (0..50_000)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect();
    vec![
        ("empty.txt", Vec::new()),
        ("one.bin", vec![0xFF]),
        ("bytes.bin", (0..=255u8).collect()),
        ("runs.dat", [vec![0u8; 1000], vec![1u8; 3], vec![2u8; 256]].concat()),
        ("prose.md", "It was the best of times, it was the worst of times. ".repeat(300).into_bytes()),
        ("noise.bin", noise),
    ]
}

fn round_trip(dir: &Path, name: &str, data: &[u8], algorithm: Option<&str>) {
    let src = dir.join(name);
    fs::write(&src, data).unwrap();
    let src_s = src.to_str().unwrap();

    let mut args = vec!["compress", "-f"];
    if let Some(a) = algorithm {
        args.extend(["-a", a]);
    }
    args.extend([src_s, dir.to_str().unwrap()]);
    run(&args);

    let packed = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| {
            let n = p.file_name().unwrap().to_string_lossy().into_owned();
            n == format!("{name}.rle") || n == format!("{name}.lz")
        })
        .expect("compressed file not found");

    fs::remove_file(&src).unwrap();
    run(&["decompress", packed.to_str().unwrap(), dir.to_str().unwrap()]);
    assert_eq!(fs::read(&src).unwrap(), data, "{name} via {algorithm:?}");
    fs::remove_file(&packed).unwrap();
}

#[test]
fn auto_detected_round_trips() {
    let dir = TempDir::new().unwrap();
    for (name, data) in payloads() {
        round_trip(dir.path(), name, &data, None);
    }
}

#[test]
fn rle_round_trips() {
    let dir = TempDir::new().unwrap();
    for (name, data) in payloads() {
        round_trip(dir.path(), name, &data, Some("rle"));
    }
}

#[test]
fn lz_round_trips() {
    let dir = TempDir::new().unwrap();
    for (name, data) in payloads() {
        round_trip(dir.path(), name, &data, Some("lz"));
    }
}
