/// One rendered page of a list.
///
/// Pages grow as prefixes: page `n` is the first `n * page_size` items, so
/// a "load more" press only ever appends rows and never reshuffles the ones
/// already on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    /// True while items beyond the current prefix remain.
    pub has_more: bool,
}

/// Cut the prefix for `page` (1-based) out of `items`.
///
/// Page 0 or a zero page size yields an empty slice (with `has_more` still
/// reporting whether anything exists), and a page past the end simply
/// yields everything with `has_more == false`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let end = page.saturating_mul(page_size).min(items.len());
    Page {
        visible: &items[..end],
        has_more: end < items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_grow_as_prefixes() {
        let items: Vec<u32> = (0..25).collect();

        let first = paginate(&items, 10, 1);
        assert_eq!(first.visible, &items[..10]);
        assert!(first.has_more);

        let second = paginate(&items, 10, 2);
        assert_eq!(second.visible, &items[..20]);
        assert!(second.has_more);
        // The first page is a prefix of the second.
        assert_eq!(&second.visible[..10], first.visible);

        let third = paginate(&items, 10, 3);
        assert_eq!(third.visible, &items[..]);
        assert!(!third.has_more);
    }

    #[test]
    fn exact_multiple_has_no_more() {
        let items: Vec<u32> = (0..20).collect();
        let page = paginate(&items, 10, 2);
        assert_eq!(page.visible.len(), 20);
        assert!(!page.has_more);
    }

    #[test]
    fn page_past_the_end_yields_everything() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, 10, 99);
        assert_eq!(page.visible, &items[..]);
        assert!(!page.has_more);
    }

    #[test]
    fn page_zero_yields_nothing() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 10, 0);
        assert!(page.visible.is_empty());
        assert!(page.has_more);
    }

    #[test]
    fn zero_page_size_yields_nothing() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, 0, 3);
        assert!(page.visible.is_empty());
        assert!(page.has_more);
    }

    #[test]
    fn empty_input_is_an_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 1);
        assert!(page.visible.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, usize::MAX, usize::MAX);
        assert_eq!(page.visible.len(), 3);
        assert!(!page.has_more);
    }
}
