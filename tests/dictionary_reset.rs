//! Reset cadence (P6): with `resetDictionaryCycleShift = k`, the dictionary
//! is reset at the periodic boundary implied by `k`; with `k = 0` it is
//! never periodically reset. Exercised directly against
//! `kernel::chameleon::EncodeState` (no stream framing needed) by feeding
//! identical 65536-byte groups and observing the compressed size of each
//! group: a reset dictionary can't hit on content it saw in the previous
//! group, so its group compresses far worse than one where the dictionary
//! survived.

use chameleon_codec::kernel::chameleon::EncodeState;
use chameleon_codec::teleport::Teleport;
use chameleon_codec::Status;

/// One "preferred block group" worth of input (256 kernel blocks of 256
/// bytes each) with content that never repeats *within* the group, so every
/// word is a fresh dictionary entry the first time the dictionary sees it.
fn make_group() -> Vec<u8> {
    (0u32..65536)
        .map(|i| (i.wrapping_mul(2654435761) >> 13) as u8)
        .collect()
}

/// Feeds `num_groups` copies of the same group through a fresh encoder and
/// returns each group's compressed size, in order.
fn group_compressed_sizes(parameter_byte: u8, num_groups: usize) -> Vec<usize> {
    let group = make_group();
    let mut data = Vec::with_capacity(group.len() * num_groups);
    for _ in 0..num_groups {
        data.extend_from_slice(&group);
    }

    let mut enc = EncodeState::init(parameter_byte).unwrap();
    let mut teleport = Teleport::new();
    let mut out = vec![0u8; data.len() + 4096];
    let mut out_pos = 0;
    let mut direct = &data[..];

    let mut sizes = Vec::new();
    let mut last = 0usize;
    loop {
        match enc.process(&mut teleport, &mut direct, &mut out, &mut out_pos, false) {
            Status::InfoEfficiencyCheck => continue,
            Status::InfoNewBlock => {
                sizes.push(out_pos - last);
                last = out_pos;
                if sizes.len() == num_groups {
                    return sizes;
                }
            }
            Status::StallOnInput => return sizes,
            other => panic!("unexpected status: {other:?}"),
        }
    }
}

#[test]
fn shift_zero_never_resets_after_the_first_group() {
    let sizes = group_compressed_sizes(0, 5);
    assert_eq!(sizes.len(), 5);
    let first = sizes[0];
    for (i, &size) in sizes.iter().enumerate().skip(1) {
        assert!(
            size < first / 2,
            "group {i} (size {size}) should compress far better than group 0 (size {first}) \
             once the dictionary has seen this content, since shift=0 never resets"
        );
    }
    // Every repeat group after the first hits the same already-built dictionary.
    for pair in sizes[1..].windows(2) {
        assert_eq!(pair[0], pair[1], "repeat groups should compress identically");
    }
}

#[test]
fn shift_one_resets_every_other_group_starting_at_the_third() {
    let sizes = group_compressed_sizes(1, 5);
    assert_eq!(sizes.len(), 5);

    // group 0: empty dictionary, first sighting of every word -> large.
    // group 1: dictionary built by group 0 -> small (repeat content hits).
    // group 2: reset fired at the group-1/group-2 boundary -> large again.
    // group 3: dictionary built by group 2 -> small.
    // group 4: reset fired at the group-3/group-4 boundary -> large again.
    let large = [sizes[0], sizes[2], sizes[4]];
    let small = [sizes[1], sizes[3]];

    for &s in &small {
        for &l in &large {
            assert!(
                s < l / 2,
                "post-reset group ({l} bytes) should compress far worse than a \
                 dictionary-primed group ({s} bytes)"
            );
        }
    }
}

#[test]
fn reset_cadence_scales_with_shift() {
    // shift=2 resets only every 4 groups; groups 1-3 after the first should
    // all benefit from the dictionary built during group 0.
    let sizes = group_compressed_sizes(2, 4);
    assert_eq!(sizes.len(), 4);
    let first = sizes[0];
    for (i, &size) in sizes.iter().enumerate().skip(1) {
        assert!(
            size < first / 2,
            "group {i} (size {size}) should still benefit from group 0's dictionary \
             under a 4-group reset cycle (first group size {first})"
        );
    }
}
