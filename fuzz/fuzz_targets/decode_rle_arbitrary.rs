#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must never panic the decoder; errors are fine.
fuzz_target!(|data: &[u8]| {
    if let Ok(out) = rlz::rle::decode(data) {
        // A valid stream re-encodes to something no longer than itself.
        assert!(rlz::rle::encode(&out).len() <= data.len());
    }
});
