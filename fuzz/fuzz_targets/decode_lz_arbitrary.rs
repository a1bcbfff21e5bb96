#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes through the dispatcher: non-ASCII, unparsable and
// out-of-range codes must all come back as errors, never panics.
fuzz_target!(|data: &[u8]| {
    let _ = rlz::decode(data, rlz::Algorithm::Lz);
});
