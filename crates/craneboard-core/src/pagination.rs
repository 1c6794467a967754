//! Pagination window calculation for paged list controls.
//!
//! Given a current page and a total page count, [`window`] computes the
//! abbreviated sequence of page indicators a client should render: the
//! first page, up to two pages either side of the current one, the last
//! page, and ellipsis markers for the collapsed ranges in between. The
//! fixed radius keeps the rendered control width bounded no matter how
//! many pages the list has.
//!
//! The window is a pure derived value. The API embeds it in every paged
//! response so clients never reimplement the abbreviation rules.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pages shown immediately before and after the current page.
const RADIUS: u32 = 2;

/// The string an [`PageItem::Ellipsis`] serializes to.
pub const ELLIPSIS: &str = "…";

/// One entry in the abbreviated page list: a navigable page number or an
/// inert ellipsis marker standing in for a collapsed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete, navigable page number.
    Page(u32),
    /// A collapsed range of hidden pages.
    Ellipsis,
}

// Serialized as a bare number or the string "…" so clients can render the
// item list directly.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

impl<'de> Deserialize<'de> for PageItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemVisitor;

        impl Visitor<'_> for ItemVisitor {
            type Value = PageItem;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a page number or an ellipsis string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PageItem, E> {
                u32::try_from(v)
                    .map(PageItem::Page)
                    .map_err(|_| E::custom("page number out of range"))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PageItem, E> {
                u32::try_from(v)
                    .map(PageItem::Page)
                    .map_err(|_| E::custom("page number out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PageItem, E> {
                if v == ELLIPSIS || v == "..." {
                    Ok(PageItem::Ellipsis)
                } else {
                    Err(E::custom("expected an ellipsis marker"))
                }
            }
        }

        deserializer.deserialize_any(ItemVisitor)
    }
}

/// The abbreviated page list for a pagination control.
///
/// Recomputed on every request from `(current, max)`; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// The active page (1-indexed).
    pub current: u32,
    /// `current - 1`, absent on the first page.
    pub prev: Option<u32>,
    /// `current + 1`, absent on the last page.
    pub next: Option<u32>,
    /// Ordered page indicators, starting at page 1.
    pub items: Vec<PageItem>,
}

/// Compute the page window for `current` out of `max` total pages.
///
/// Returns `None` when there is nothing to render: a zero `current` or
/// `max`, or a `current` beyond `max` (stale client state after the list
/// shrank). Callers must hide the pagination control in that case.
///
/// For a valid input the item list always begins with page 1, ends with
/// page `max`, and never contains two adjacent ellipsis markers.
pub fn window(current: u32, max: u32) -> Option<PageWindow> {
    if current == 0 || max == 0 || current > max {
        return None;
    }

    let prev = (current != 1).then(|| current - 1);
    let next = (current != max).then(|| current + 1);
    let mut items = vec![PageItem::Page(1)];

    if current == 1 && max == 1 {
        return Some(PageWindow {
            current,
            prev,
            next,
            items,
        });
    }

    // Collapsed range between page 1 and the window start. The > 4 threshold
    // avoids rendering "1 … 2" when page 1 already touches the window.
    if current > 4 {
        items.push(PageItem::Ellipsis);
    }

    let r1 = current.saturating_sub(RADIUS);
    let r2 = current.saturating_add(RADIUS + 1);

    for i in r1.max(2)..=r2.min(max) {
        items.push(PageItem::Page(i));
    }

    if r2.saturating_add(1) < max {
        items.push(PageItem::Ellipsis);
    }
    if r2 < max {
        items.push(PageItem::Page(max));
    }

    Some(PageWindow {
        current,
        prev,
        next,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|i| match i {
                PageItem::Page(n) => Some(*n),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_inputs_yield_nothing() {
        assert_eq!(window(0, 5), None);
        assert_eq!(window(3, 0), None);
        assert_eq!(window(0, 0), None);
    }

    #[test]
    fn test_current_beyond_max_yields_nothing() {
        assert_eq!(window(7, 5), None);
        assert_eq!(window(2, 1), None);
    }

    #[test]
    fn test_single_page() {
        let w = window(1, 1).unwrap();
        assert_eq!(w.current, 1);
        assert_eq!(w.prev, None);
        assert_eq!(w.next, None);
        assert_eq!(w.items, vec![PageItem::Page(1)]);
    }

    #[test]
    fn test_first_page_of_ten() {
        let w = window(1, 10).unwrap();
        assert_eq!(w.prev, None);
        assert_eq!(w.next, Some(2));
        assert_eq!(
            w.items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_last_page_of_ten() {
        let w = window(10, 10).unwrap();
        assert_eq!(w.prev, Some(9));
        assert_eq!(w.next, None);
        assert_eq!(
            w.items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_middle_page_has_both_ellipses() {
        let w = window(5, 10).unwrap();
        assert_eq!(w.prev, Some(4));
        assert_eq!(w.next, Some(6));
        assert_eq!(
            w.items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_two_pages() {
        let w = window(1, 2).unwrap();
        assert_eq!(w.items, vec![PageItem::Page(1), PageItem::Page(2)]);
        let w = window(2, 2).unwrap();
        assert_eq!(w.items, vec![PageItem::Page(1), PageItem::Page(2)]);
        assert_eq!(w.prev, Some(1));
        assert_eq!(w.next, None);
    }

    #[test]
    fn test_no_leading_ellipsis_at_threshold() {
        // current == 4 is the last page where page 1 still touches the window
        let w = window(4, 20).unwrap();
        assert_eq!(w.items[1], PageItem::Page(2));
        let w = window(5, 20).unwrap();
        assert_eq!(w.items[1], PageItem::Ellipsis);
    }

    #[test]
    fn test_window_invariants_hold_for_all_valid_inputs() {
        for max in 1..=60u32 {
            for current in 1..=max {
                let w = window(current, max).unwrap();

                assert_eq!(w.items[0], PageItem::Page(1), "({current}, {max})");

                let nums = pages(&w.items);
                assert_eq!(*nums.last().unwrap(), max, "({current}, {max})");
                assert!(nums.contains(&current), "({current}, {max})");
                assert!(
                    nums.windows(2).all(|p| p[0] < p[1]),
                    "not increasing at ({current}, {max}): {nums:?}"
                );

                let adjacent_ellipses = w
                    .items
                    .windows(2)
                    .any(|p| p[0] == PageItem::Ellipsis && p[1] == PageItem::Ellipsis);
                assert!(!adjacent_ellipses, "({current}, {max})");

                assert_eq!(w.prev, (current != 1).then(|| current - 1));
                assert_eq!(w.next, (current != max).then(|| current + 1));
            }
        }
    }

    #[test]
    fn test_serializes_numbers_and_ellipsis_strings() {
        let w = window(5, 10).unwrap();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["items"][0], 1);
        assert_eq!(json["items"][1], "…");
        assert_eq!(json["prev"], 4);
        assert_eq!(json["next"], 6);
    }

    #[test]
    fn test_round_trips_through_json() {
        let w = window(7, 31).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: PageWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
