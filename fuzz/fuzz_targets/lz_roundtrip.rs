#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = rlz::lz::encode(data);
    let recovered = rlz::lz::decode(&text).expect("encoder output must decode");
    assert_eq!(
        recovered.len(),
        data.len(),
        "lz round-trip length mismatch for {} input bytes",
        data.len()
    );
    assert_eq!(recovered, data);
});
