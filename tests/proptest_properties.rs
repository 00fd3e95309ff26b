use lcsdelta::engine::{apply_diff, produce_diff};
use lcsdelta::format::decode_records;
use lcsdelta::lcs::{self, DEFAULT_MAX_TABLE_CELLS};
use proptest::prelude::*;

const HEAD: u8 = 0xFF;
const TAIL: u8 = 0xFE;

/// Bytes that never collide with the frame sentinels and never start a
/// payload with an ASCII digit.
fn body_byte() -> impl Strategy<Value = u8> {
    (0u8..=0xFD).prop_map(|b| if b.is_ascii_digit() { b + 0x40 } else { b })
}

fn body(max: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(body_byte(), 0..max)
}

/// `HEAD shared middle shared TAIL`: the sentinels are unique, so every
/// longest alignment matches them and all edits are interior.
fn framed(prefix: &[u8], middle: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(prefix.len() + middle.len() + suffix.len() + 2);
    v.push(HEAD);
    v.extend_from_slice(prefix);
    v.extend_from_slice(middle);
    v.extend_from_slice(suffix);
    v.push(TAIL);
    v
}

proptest! {
    #[test]
    fn prop_common_elements_strictly_ascending(
        old in proptest::collection::vec(any::<u8>(), 1..128),
        new in proptest::collection::vec(any::<u8>(), 1..128),
    ) {
        let common = lcs::align(&old, &new, DEFAULT_MAX_TABLE_CELLS).unwrap();
        for pair in common.windows(2) {
            prop_assert!(pair[0].old_pos < pair[1].old_pos);
            prop_assert!(pair[0].new_pos < pair[1].new_pos);
        }
        for c in &common {
            prop_assert_eq!(old[c.old_pos], new[c.new_pos]);
        }
    }

    #[test]
    fn prop_alignment_length_equals_table_value(
        old in proptest::collection::vec(0u8..4, 1..96),
        new in proptest::collection::vec(0u8..4, 1..96),
    ) {
        let common = lcs::align(&old, &new, DEFAULT_MAX_TABLE_CELLS).unwrap();
        let len = lcs::lcs_length(&old, &new, DEFAULT_MAX_TABLE_CELLS).unwrap();
        prop_assert_eq!(common.len(), len);
    }

    #[test]
    fn prop_interior_edits_roundtrip(
        prefix in body(64),
        old_mid in body(64),
        new_mid in body(64),
        suffix in body(64),
    ) {
        let old = framed(&prefix, &old_mid, &suffix);
        let new = framed(&prefix, &new_mid, &suffix);
        let diff = produce_diff(&old, &new).unwrap();
        let restored = apply_diff(&old, &diff).unwrap();
        prop_assert_eq!(restored, new);
    }

    #[test]
    fn prop_identical_inputs_have_empty_diff(
        data in proptest::collection::vec(any::<u8>(), 1..256),
    ) {
        let diff = produce_diff(&data, &data).unwrap();
        prop_assert!(diff.is_empty());
        prop_assert_eq!(apply_diff(&data, &diff).unwrap(), data);
    }

    #[test]
    fn prop_record_anchors_strictly_ascending(
        old in proptest::collection::vec(body_byte(), 1..128),
        new in proptest::collection::vec(body_byte(), 1..128),
    ) {
        let diff = produce_diff(&old, &new).unwrap();
        let records = decode_records(&diff).unwrap();
        for pair in records.windows(2) {
            prop_assert!(pair[0].anchor < pair[1].anchor);
        }
        prop_assert!(records.iter().all(|r| !r.is_noop()));
    }

    #[test]
    fn prop_arbitrary_streams_never_panic(
        old in proptest::collection::vec(any::<u8>(), 1..64),
        diff in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let _ = apply_diff(&old, &diff);
    }
}
