//! # Pagination
//!
//! Pages are 1-indexed. [`paginate`] never clamps: asking for a page outside
//! `1..=total_pages` yields an empty slice, and keeping the cursor in range is
//! the job of whoever owns it (see [`PageCursor`]).
//!
//! The cursor must go back to page 1 whenever the filtered sequence it walks
//! changes. [`crate::browse::BrowseState`] enforces that by resetting the cursor
//! on every filter mutation.

use tracing::debug;

/// Grid page size used throughout the directory.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub page: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(len / page_size)`; zero for an empty sequence or a zero page size.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slices `[(page-1)*size, page*size)` out of `items`, clipped to its bounds.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let slice = if page == 0 || page > total {
        &items[0..0]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };
    debug!(page, total_pages = total, shown = slice.len(), "paginated");
    Page {
        items: slice,
        total_pages: total,
        page,
    }
}

/// Current page of a grid. Navigation is a no-op at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Jumps to `page` as given. Out-of-range pages render empty.
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_pages() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, PAGE_SIZE, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<u32> = (0..45).collect();
        let page = paginate(&items, PAGE_SIZE, 3);
        assert_eq!(page.items, &items[40..45]);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn pages_are_disjoint_and_exhaustive() {
        for len in [0usize, 1, 19, 20, 21, 40, 41, 99] {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, PAGE_SIZE);
            let mut seen = Vec::new();
            for p in 1..=total {
                seen.extend_from_slice(paginate(&items, PAGE_SIZE, p).items);
            }
            assert_eq!(seen, items, "len {}", len);
        }
    }

    #[test]
    fn out_of_range_requests_are_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(&items, PAGE_SIZE, 0).is_empty());
        assert!(paginate(&items, PAGE_SIZE, 2).is_empty());
        assert_eq!(paginate(&items, PAGE_SIZE, 2).total_pages, 1);
    }

    #[test]
    fn cursor_navigation_stops_at_the_ends() {
        let mut cursor = PageCursor::new();
        cursor.previous();
        assert_eq!(cursor.page(), 1);

        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.page(), 3);

        cursor.go_to(7);
        assert_eq!(cursor.page(), 7);
        cursor.reset();
        assert_eq!(cursor.page(), 1);
    }
}
