//! Client-side pagination over an already filtered list.
//!
//! Pages are 1-indexed.

/// Number of pages needed for `len` items (0 for an empty list)
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a page number into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `[(page-1)*size, page*size)` of `items`, truncated at the end.
///
/// Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// "Showing {from} to {to} of {total} results" for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based index of the first visible item (0 when nothing is visible)
    pub from: usize,
    /// 1-based index of the last visible item
    pub to: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let visible = page_slice_len(total, page, page_size);
        if visible == 0 {
            return Self { from: 0, to: 0, total };
        }
        let from = (page - 1) * page_size + 1;
        Self {
            from,
            to: from + visible - 1,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to == 0
    }

    pub fn label(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.from, self.to, self.total
        )
    }
}

fn page_slice_len(total: usize, page: usize, page_size: usize) -> usize {
    if page == 0 || page_size == 0 {
        return 0;
    }
    let start = (page - 1).saturating_mul(page_size);
    total.saturating_sub(start).min(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        for len in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(items.len(), 10);
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&items, page, 10);
                assert!(!slice.is_empty());
                assert!(slice.len() <= 10);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, items, "len = {}", len);
        }
    }

    #[test]
    fn test_page_slice_out_of_range() {
        let items: Vec<u32> = (0..5).collect();
        assert!(page_slice(&items, 0, 10).is_empty());
        assert!(page_slice(&items, 2, 10).is_empty());
        assert_eq!(page_slice(&items, 1, 2), &[0, 1]);
        assert_eq!(page_slice(&items, 3, 2), &[4]);
    }

    #[test]
    fn test_page_summary() {
        let first = PageSummary::new(25, 1, 10);
        assert_eq!(first.label(), "Showing 1 to 10 of 25 results");

        let last = PageSummary::new(25, 3, 10);
        assert_eq!(last.label(), "Showing 21 to 25 of 25 results");

        assert!(PageSummary::new(0, 1, 10).is_empty());
        assert!(PageSummary::new(5, 2, 10).is_empty());
    }
}
