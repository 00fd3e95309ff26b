#![no_main]
use libfuzzer_sys::fuzz_target;
use lcsdelta::engine::{RestoreOptions, apply_diff_with_options};
use lcsdelta::format::decode_records;

fuzz_target!(|data: &[u8]| {
    // Arbitrary diff streams must only ever produce errors, never panics.
    let _ = decode_records(data);

    if data.len() >= 2 {
        let split = data.len() / 2;
        let (old, diff) = data.split_at(split);
        for copy_tail in [true, false] {
            let _ = apply_diff_with_options(old, diff, &RestoreOptions { copy_tail });
        }
    }
});
