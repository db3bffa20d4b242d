use std::ops::Range;

/// Smallest number of item rows a page shows, even on a cramped terminal
pub const MIN_PAGE_SIZE: usize = 5;

/// Compute the slice of items visible on screen
///
/// The page holds `rows_available` rows (never fewer than `min_page`), is
/// centred on `index` where possible and is clamped to the collection bounds.
pub fn visible_window(len: usize, index: usize, rows_available: usize, min_page: usize) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }

    let page = rows_available.max(min_page).max(1).min(len);
    let index = index.min(len - 1);
    let start = index.saturating_sub(page / 2).min(len - page);

    start..start + page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        assert_eq!(visible_window(0, 0, 10, MIN_PAGE_SIZE), 0..0);
    }

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_window(4, 2, 10, MIN_PAGE_SIZE), 0..4);
    }

    #[test]
    fn test_window_centres_on_index() {
        assert_eq!(visible_window(20, 10, 5, MIN_PAGE_SIZE), 8..13);
        assert_eq!(visible_window(20, 10, 6, MIN_PAGE_SIZE), 7..13);
    }

    #[test]
    fn test_window_clamped_at_edges() {
        assert_eq!(visible_window(20, 0, 5, MIN_PAGE_SIZE), 0..5);
        assert_eq!(visible_window(20, 1, 5, MIN_PAGE_SIZE), 0..5);
        assert_eq!(visible_window(20, 19, 5, MIN_PAGE_SIZE), 15..20);
        assert_eq!(visible_window(20, 18, 5, MIN_PAGE_SIZE), 15..20);
    }

    #[test]
    fn test_min_page_floor() {
        // No rows left on screen still shows a full minimum page
        assert_eq!(visible_window(20, 0, 0, MIN_PAGE_SIZE), 0..5);
        assert_eq!(visible_window(20, 0, 2, 3), 0..3);
    }

    #[test]
    fn test_index_out_of_range_is_clamped() {
        assert_eq!(visible_window(8, 50, 5, MIN_PAGE_SIZE), 3..8);
    }

    #[test]
    fn test_window_always_contains_index() {
        for len in 1..30 {
            for index in 0..len {
                for rows in 0..12 {
                    let window = visible_window(len, index, rows, MIN_PAGE_SIZE);
                    assert!(window.contains(&index), "len={len} index={index} rows={rows}");
                    assert!(window.end <= len);
                }
            }
        }
    }
}
