//! # Pagination
//!
//! Pure page-window arithmetic over an in-memory collection, plus the
//! `{items, index, total}` envelope returned by list endpoints.
//!
//! The window for `(limit, index)` is `[limit * index, limit * index + limit)`
//! clipped to the collection bounds. Items keep insertion order; no sorting
//! is applied. A window past the end of the collection yields an empty item
//! list while `total` still reports the real collection size. `limit == 0`
//! produces an empty window by the same arithmetic and is not an error.

use serde::Serialize;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: usize = 10;

/// Zero-based page index used when the caller omits `index`.
pub const DEFAULT_INDEX: usize = 0;

/// Response wrapper for paginated list queries.
///
/// `total` is the full collection size at query time, not the length of
/// `items`. `index` echoes the requested page index.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub index: usize,
    pub total: usize,
}

/// Slice one page out of `items`.
pub fn paginate<T: Clone>(items: &[T], limit: usize, index: usize) -> Page<T> {
    let total = items.len();
    let start = limit.saturating_mul(index).min(total);
    let end = start.saturating_add(limit).min(total);

    Page {
        items: items[start..end].to_vec(),
        index,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(&collection(25), 10, 0);
        assert_eq!(page.items, (0..10).collect::<Vec<_>>());
        assert_eq!(page.index, 0);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate(&collection(25), 10, 2);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_page_beyond_collection_is_empty_with_real_total() {
        let page = paginate(&collection(5), 10, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.index, 3);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_zero_limit_yields_empty_page() {
        let page = paginate(&collection(5), 0, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_item_count_formula_holds() {
        // returned count == min(L, max(0, total - L*I)) for all windows
        let items = collection(23);
        for limit in 0..6 {
            for index in 0..6 {
                let page = paginate(&items, limit, index);
                let expected = limit.min(items.len().saturating_sub(limit * index));
                assert_eq!(page.items.len(), expected, "limit={} index={}", limit, index);
            }
        }
    }

    #[test]
    fn test_no_overflow_on_huge_index() {
        let page = paginate(&collection(3), usize::MAX, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
