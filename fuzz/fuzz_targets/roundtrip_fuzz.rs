#![no_main]
use libfuzzer_sys::fuzz_target;
use lcsdelta::engine::{apply_diff, produce_diff};

const HEAD: u8 = 0xFF;
const TAIL: u8 = 0xFE;

fn frame(body: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(body.len() + 2);
    v.push(HEAD);
    // Keep sentinels unique and payloads free of leading digits.
    v.extend(body.iter().map(|&b| match b {
        HEAD | TAIL => b'x',
        b'0'..=b'9' => b + 0x40,
        _ => b,
    }));
    v.push(TAIL);
    v
}

fuzz_target!(|data: &[u8]| {
    // Quadratic alignment: keep inputs small.
    if data.len() < 2 || data.len() > 1024 {
        return;
    }

    let split = data[0] as usize % data.len();
    let (a, b) = data[1..].split_at(split.min(data.len() - 1));
    let old = frame(a);
    let new = frame(b);

    let diff = produce_diff(&old, &new).unwrap();
    let restored = apply_diff(&old, &diff).unwrap();
    assert_eq!(restored, new);
});
