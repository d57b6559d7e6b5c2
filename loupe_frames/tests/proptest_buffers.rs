// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for `FrameBuffers`.
//!
//! 1. Any sequence of inserts and removes leaves the set in canonical form.
//! 2. Inserting the same range twice equals inserting it once.
//! 3. Removing a freshly inserted, previously absent frame restores the set.
//! 4. Coverage after an insert is the union of the old coverage and the range.
//! 5. Mixed operation sequences agree with a `BTreeSet` model.
//! 6. `missing` reports exactly the unbuffered frames of a span.

use std::collections::BTreeSet;

use loupe_frames::{FrameBuffers, FrameRange};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const MAX_FRAME: u64 = 200;

fn range_strategy() -> impl Strategy<Value = FrameRange> {
    (0..MAX_FRAME, 0_u64..12).prop_map(|(start, len)| FrameRange::new(start, start + len))
}

#[derive(Clone, Debug)]
enum Op {
    Insert(FrameRange),
    Remove(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        range_strategy().prop_map(Op::Insert),
        (0..MAX_FRAME + 12).prop_map(Op::Remove),
    ]
}

fn buffers_strategy() -> impl Strategy<Value = FrameBuffers> {
    prop::collection::vec(range_strategy(), 0..16).prop_map(|ranges| ranges.into_iter().collect())
}

fn assert_canonical(buffers: &FrameBuffers) -> Result<(), TestCaseError> {
    for r in buffers.iter() {
        prop_assert!(r.start() <= r.end(), "inverted range {:?}", r);
    }
    for pair in buffers.ranges().windows(2) {
        prop_assert!(
            pair[0].end() + 1 < pair[1].start(),
            "ranges not sorted, disjoint and non-adjacent: {:?}",
            buffers.ranges()
        );
    }
    Ok(())
}

fn covered(buffers: &FrameBuffers) -> BTreeSet<u64> {
    buffers.iter().flat_map(|r| r.start()..=r.end()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Canonical form
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canonical_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut buffers = FrameBuffers::new();
        for op in ops {
            match op {
                Op::Insert(r) => { buffers.insert(r); }
                Op::Remove(f) => { buffers.remove(f); }
            }
            assert_canonical(&buffers)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Insert idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn insert_idempotent(buffers in buffers_strategy(), r in range_strategy()) {
        let once = buffers.clone().with_inserted(r);
        let twice = once.clone().with_inserted(r);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.revision(), twice.revision());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Insert/remove inverse for absent frames
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_undoes_insert_of_absent_frame(buffers in buffers_strategy(), f in 0..MAX_FRAME) {
        prop_assume!(!buffers.contains(f));
        let restored = buffers.clone().with_inserted(FrameRange::single(f)).with_removed(f);
        prop_assert_eq!(restored, buffers);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Coverage preservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn insert_coverage_is_union(buffers in buffers_strategy(), r in range_strategy()) {
        let before = covered(&buffers);
        let after = buffers.clone().with_inserted(r);
        for f in 0..MAX_FRAME + 16 {
            let expected = r.contains(f) || before.contains(&f);
            prop_assert_eq!(after.contains(f), expected, "frame {} after inserting {:?}", f, r);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Agreement with a set model
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn matches_btreeset_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut buffers = FrameBuffers::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(r) => {
                    let changed = buffers.insert(r);
                    let mut grew = false;
                    for f in r.start()..=r.end() {
                        grew |= model.insert(f);
                    }
                    prop_assert_eq!(changed, grew);
                }
                Op::Remove(f) => {
                    prop_assert_eq!(buffers.remove(f), model.remove(&f));
                }
            }
        }
        prop_assert_eq!(covered(&buffers), model.clone());
        prop_assert_eq!(buffers.frame_count(), model.len() as u64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Gap queries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_is_complement_within_span(buffers in buffers_strategy(), span in range_strategy()) {
        let gaps = buffers.missing(span);
        let mut reported = BTreeSet::new();
        for pair in gaps.windows(2) {
            prop_assert!(pair[0].end() + 1 < pair[1].start(), "gaps not canonical: {:?}", gaps);
        }
        for g in &gaps {
            prop_assert!(span.contains_range(g));
            reported.extend(g.start()..=g.end());
        }
        let expected: BTreeSet<u64> = (span.start()..=span.end())
            .filter(|f| !buffers.contains(*f))
            .collect();
        prop_assert_eq!(reported, expected);
    }
}
