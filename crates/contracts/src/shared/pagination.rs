//! Client-side paging over in-memory lists (0-indexed pages).

/// Number of pages needed for `len` items; zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `page` within a list of `len` items.
pub fn page_range(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let start = page.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Slice of `items` shown on `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Last valid page for `len` items, used to keep the current page in bounds
/// after the list shrinks.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.min(total_pages(len, page_size).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 2, 10), &items[20..23]);
        assert!(page_slice(&items, 3, 10).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(4, 23, 10), 2);
        assert_eq!(clamp_page(1, 23, 10), 1);
        assert_eq!(clamp_page(3, 0, 10), 0);
    }
}
