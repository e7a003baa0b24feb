//! Property-based invariant tests for list windowing and the timer primitives.
//!
//! **Windowing:**
//! 1. `total_height == len * item_height`, windowed or not.
//! 2. Bypassed windows cover every index exactly once, in order.
//! 3. Windowed ranges are contiguous, ascending, and inside `[0, len)`.
//! 4. Windowed ranges hold at most `visible_count + 2 * overscan` items.
//! 5. Windowed ranges hold at least `min(len, visible_count)` items.
//! 6. Item offsets are `index * item_height`.
//!
//! **Debounce / throttle:**
//! 7. A burst faster than the delay settles on its last input, in one transition.
//! 8. A throttled burst emits its first input immediately and its last at the boundary.
//! 9. Throttled emissions are never closer than `limit_ms`.

use proptest::prelude::*;
use pulse_window::{Debounced, ThrottleUpdate, Throttled, WindowOptions, compute_window};

// ── Strategies ────────────────────────────────────────────────────────────

fn options_strategy() -> impl Strategy<Value = WindowOptions> {
    (
        1u32..=200,    // item_height
        1u32..=2_000,  // container_height
        0usize..=50,   // overscan
        any::<bool>(), // enabled
        0usize..=40,   // bypass_threshold
    )
        .prop_map(|(item, container, overscan, enabled, threshold)| {
            WindowOptions::new(item, container)
                .with_overscan(overscan)
                .with_enabled(enabled)
                .with_bypass_threshold(threshold)
        })
}

fn gaps_strategy() -> impl Strategy<Value = Vec<u64>> {
    // Gaps between successive inputs, all shorter than the smallest delay under test.
    proptest::collection::vec(0u64..50, 1..=30)
}

// ── Windowing ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn total_height_is_len_times_item_height(
        len in 0usize..5_000,
        scroll in 0u64..1_000_000,
        options in options_strategy(),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let w = compute_window(&items, scroll, &options).unwrap();
        prop_assert_eq!(w.total_height, len as u64 * options.item_height as u64);
    }

    #[test]
    fn bypassed_windows_cover_everything_in_order(
        len in 0usize..200,
        scroll in 0u64..100_000,
        options in options_strategy(),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let options = options.with_enabled(false);
        let w = compute_window(&items, scroll, &options).unwrap();
        prop_assert!(w.bypassed);
        prop_assert_eq!(w.virtual_items.len(), len);
        for (i, it) in w.virtual_items.iter().enumerate() {
            prop_assert_eq!(it.index, i);
            prop_assert_eq!(*it.item, i);
        }
    }

    #[test]
    fn windowed_ranges_are_contiguous_and_bounded(
        len in 0usize..5_000,
        scroll in 0u64..2_000_000,
        options in options_strategy(),
    ) {
        let items: Vec<usize> = (0..len).collect();
        let options = options.with_enabled(true).with_bypass_threshold(0);
        let w = compute_window(&items, scroll, &options).unwrap();
        prop_assert!(!w.bypassed);

        let visible_count = options.container_height.div_ceil(options.item_height) as usize;
        let n = w.virtual_items.len();
        prop_assert!(n <= visible_count + 2 * options.overscan);
        prop_assert!(n >= len.min(visible_count));

        if let Some(first) = w.virtual_items.first() {
            for (offset, it) in w.virtual_items.iter().enumerate() {
                prop_assert_eq!(it.index, first.index + offset);
                prop_assert!(it.index < len);
                prop_assert_eq!(it.style.top, it.index as u64 * options.item_height as u64);
                prop_assert_eq!(it.style.height, options.item_height);
            }
        }
        prop_assert_eq!(w.range.len(), n);
    }
}

// ── Debounce / throttle ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn debounce_burst_settles_on_last_input(
        gaps in gaps_strategy(),
        delay in 50u64..500,
    ) {
        let mut d = Debounced::new(u32::MAX, delay);
        let mut now = 0u64;
        let mut transitions = Vec::new();
        for (value, gap) in gaps.iter().enumerate() {
            now += gap;
            d.set(value as u32, now);
            if let Some(v) = d.poll(now) {
                transitions.push(*v);
            }
        }
        if let Some(v) = d.poll(now + delay) {
            transitions.push(*v);
        }

        let last = (gaps.len() - 1) as u32;
        prop_assert_eq!(transitions, vec![last]);
        prop_assert_eq!(*d.get(), last);
    }

    #[test]
    fn throttle_burst_emits_first_and_last(
        burst in proptest::collection::vec(0u32..1_000, 2..=20),
        limit in 100u64..1_000,
    ) {
        let mut t = Throttled::new(u32::MAX, limit);
        prop_assert_eq!(t.set(burst[0], 0), ThrottleUpdate::Emitted);
        for (i, value) in burst.iter().enumerate().skip(1) {
            // All inputs land inside the first window.
            let now = (i as u64 * (limit - 1)) / burst.len() as u64;
            t.set(*value, now);
            prop_assert_eq!(*t.get(), burst[0]);
        }
        let last = *burst.last().unwrap();
        t.poll(limit);
        prop_assert_eq!(*t.get(), last);
    }

    #[test]
    fn throttle_emissions_respect_the_limit(
        inputs in proptest::collection::vec((0u32..10, 0u64..80), 1..=200),
        limit in 1u64..200,
    ) {
        let mut t = Throttled::new(u32::MAX, limit);
        let mut now = 0u64;
        let mut emits = Vec::new();
        for (value, gap) in inputs {
            now += gap;
            if t.poll(now).is_some() {
                emits.push(now);
            }
            if t.set(value, now) == ThrottleUpdate::Emitted {
                emits.push(now);
            }
        }
        for pair in emits.windows(2) {
            prop_assert!(pair[1] - pair[0] >= limit);
        }
    }
}
