// Integration tests for detect.rs: algorithm selection when none is given.

use std::path::Path;

use rlz::detect;
use rlz::Algorithm;

#[test]
fn extension_decides_first() {
    assert_eq!(detect::from_extension(Path::new("a/b/readme.MD")), Some(Algorithm::Rle));
    assert_eq!(detect::from_extension(Path::new("photo.jpeg")), Some(Algorithm::Lz));
    assert_eq!(detect::from_extension(Path::new("Makefile")), None);
    // A PDF signature does not override a text extension.
    assert_eq!(
        detect::for_compression(Some(Path::new("fake.txt")), b"%PDF-1.4"),
        Algorithm::Rle
    );
}

#[test]
fn content_decides_without_extension() {
    assert_eq!(detect::from_content(b"\x89PNG\r\n\x1a\n...."), Algorithm::Lz);
    assert_eq!(detect::from_content(b"plain words\n"), Algorithm::Rle);
    assert_eq!(detect::from_content(&[0x00, 0x9f, 0x10]), Algorithm::Lz);
    assert_eq!(detect::from_content(b""), Algorithm::Rle);
    assert_eq!(detect::for_compression(None, b"PK\x03\x04rest"), Algorithm::Lz);
}

#[test]
fn decompression_prefers_stream_extension() {
    assert_eq!(
        detect::for_decompression(Some(Path::new("x.LZ")), b"A\x04"),
        Some(Algorithm::Lz)
    );
    // Extension settles a stream that is valid in both formats.
    assert_eq!(
        detect::for_decompression(Some(Path::new("x.rle")), b"65,66"),
        Some(Algorithm::Rle)
    );
}

#[test]
fn decompression_falls_back_to_stream_shape() {
    assert!(detect::looks_like_code_stream(b"65,256,65"));
    assert!(!detect::looks_like_code_stream(b""));
    assert!(!detect::looks_like_code_stream(b",65"));
    assert_eq!(detect::for_decompression(None, b"84,79,66,69"), Some(Algorithm::Lz));
    assert_eq!(detect::for_decompression(None, &[b'A', 4]), Some(Algorithm::Rle));
}

#[test]
fn ambiguous_stream_is_not_guessed() {
    // Runs of 48..=57 put an ASCII digit in the run byte.
    for run in [48usize, 53, 57] {
        let packed = rlz::rle::encode(&vec![b'7'; run]);
        assert!(detect::is_rle_stream(&packed));
        assert!(detect::is_lz_stream(&packed), "run {run}");
        assert_eq!(detect::for_decompression(None, &packed), None, "run {run}");
    }
    // Compressing 49 x '1' without hints, then decompressing without hints.
    let packed = rlz::encode(&[b'1'; 49], detect::for_compression(None, &[b'1'; 49])).unwrap();
    assert_eq!(packed, b"11");
    assert_eq!(detect::for_decompression(None, &packed), None);
}

#[test]
fn media_signatures_recognised() {
    let webm = b"\x1A\x45\xDF\xA3\x9F\x42\x86\x81\x01\x42\xF7\x81\x01webm";
    assert_eq!(detect::from_content(webm), Algorithm::Lz);
    assert_eq!(detect::for_compression(None, b"GIF87a\x10\x00\x10\x00"), Algorithm::Lz);
}
