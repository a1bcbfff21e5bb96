#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let packed = rlz::rle::encode(data);

    // Every frame is (value, run) with run in 1..=255.
    assert_eq!(packed.len() % 2, 0);
    assert!(packed.chunks(2).all(|frame| frame[1] != 0));

    let recovered = rlz::rle::decode(&packed).expect("encoder output must decode");
    assert_eq!(recovered, data);
});
