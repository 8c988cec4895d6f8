#![no_main]

use libfuzzer_sys::fuzz_target;

use sorters::ALGORITHMS;

fuzz_target!(|data: &[u8]| {
    // Every 4 bytes form one value, a trailing partial chunk is ignored.
    let v: Vec<i32> = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let mut expected = v.clone();
    expected.sort();

    for (name, sort_fn) in ALGORITHMS {
        assert_eq!(sort_fn(&v), expected, "{name}");
    }
});
