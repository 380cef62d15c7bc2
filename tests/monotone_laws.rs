use circle_mis::{MonotoneSequence, Weight};
use proptest::prelude::*;

/// Dense reference: raise every position `<= idx` to at least `value`.
fn dense_raise(dense: &mut [Weight], idx: usize, value: Weight) -> Option<std::ops::Range<usize>> {
    if dense[idx] >= value {
        return None;
    }
    let mut start = idx;
    while start > 0 && dense[start - 1] < value {
        start -= 1;
    }
    for v in &mut dense[start..=idx] {
        *v = value;
    }
    Some(start..idx + 1)
}

proptest! {
    #[test]
    fn matches_dense_reference(
        last in 0usize..40,
        ops in prop::collection::vec((0usize..40, 1u64..6), 0..60)
    ) {
        let mut seq = MonotoneSequence::new(last);
        let mut dense = vec![0; last + 1];
        for (idx, bump) in ops {
            let idx = idx % (last + 1);
            // only ever raise, as the engines do
            let value = seq.get(idx) + bump;
            let got = seq.set(idx, value);
            let want = dense_raise(&mut dense, idx, value);
            prop_assert_eq!(got, want);
            prop_assert_eq!(seq.to_vec(), dense.clone());
        }
    }

    #[test]
    fn adjacent_ranges_hold_distinct_decreasing_values(
        last in 1usize..40,
        ops in prop::collection::vec((0usize..40, 1u64..4), 0..60)
    ) {
        let mut seq = MonotoneSequence::new(last);
        for (idx, bump) in ops {
            let idx = idx % (last + 1);
            seq.set(idx, seq.get(idx) + bump);
            let values: Vec<_> = seq.ranges().map(|(_, v)| v).collect();
            prop_assert!(values.windows(2).all(|w| w[0] > w[1]), "{:?}", values);
            let covered: usize = seq.ranges().map(|(r, _)| r.len()).sum();
            prop_assert_eq!(covered, last + 1);
        }
    }

    #[test]
    fn next_breakpoint_is_first_drop(
        last in 1usize..30,
        ops in prop::collection::vec((0usize..30, 1u64..4), 1..30),
        probe in 0usize..30
    ) {
        let mut seq = MonotoneSequence::new(last);
        for (idx, bump) in ops {
            let idx = idx % (last + 1);
            seq.set(idx, seq.get(idx) + bump);
        }
        let probe = probe % (last + 1);
        let dense = seq.to_vec();
        let expected = (probe + 1..=last).find(|&p| dense[p] < dense[probe]);
        prop_assert_eq!(seq.next_breakpoint(probe), expected);
    }
}

#[test]
fn raising_to_current_value_is_idempotent() {
    let mut seq = MonotoneSequence::new(5);
    assert_eq!(seq.set(4, 2), Some(0..5));
    let before = seq.to_vec();
    assert_eq!(seq.set(4, 2), None);
    assert_eq!(seq.set(0, 2), None);
    assert_eq!(seq.to_vec(), before);
}
