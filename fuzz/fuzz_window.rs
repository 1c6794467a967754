//! Fuzz target for the pagination window calculator.
//!
//! Run with: cargo +nightly fuzz run fuzz_window
//!
//! Feeds arbitrary (current, max) pairs into `window()` and checks the
//! structural invariants of any window it produces.

#![no_main]

use craneboard_core::pagination::{PageItem, window};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pair: (u32, u32)| {
    let (current, max) = pair;
    let Some(w) = window(current, max) else {
        // None only for empty or out-of-range requests
        assert!(current == 0 || max == 0 || current > max);
        return;
    };

    assert_eq!(w.current, current);
    assert_eq!(w.prev, (current != 1).then(|| current - 1));
    assert_eq!(w.next, (current != max).then(|| current + 1));

    let pages: Vec<u32> = w
        .items
        .iter()
        .filter_map(|item| match item {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        })
        .collect();

    // First item is page 1, last is page max, current always present
    assert_eq!(w.items.first(), Some(&PageItem::Page(1)));
    assert_eq!(pages.last(), Some(&max));
    assert!(pages.contains(&current));

    // Page numbers strictly increase and stay in range
    assert!(pages.windows(2).all(|p| p[0] < p[1]));
    assert!(pages.iter().all(|&p| p >= 1 && p <= max));

    // An ellipsis never starts, ends, or doubles up
    assert_ne!(w.items.first(), Some(&PageItem::Ellipsis));
    assert_ne!(w.items.last(), Some(&PageItem::Ellipsis));
    assert!(
        w.items
            .windows(2)
            .all(|p| !(p[0] == PageItem::Ellipsis && p[1] == PageItem::Ellipsis))
    );

    // Window stays bounded no matter how large max gets
    assert!(w.items.len() <= 10);
});
