// Which page buttons to show.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(u32),
    /// One or more skipped page numbers.
    Gap,
}

/// First, last, current, and the current page's neighbours, with a gap
/// marker wherever consecutive entries are not adjacent.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    let mut pages: Vec<u32> = [
        Some(1),
        current.checked_sub(1),
        Some(current),
        current.checked_add(1),
        Some(total),
    ]
    .into_iter()
    .flatten()
    .filter(|page| (1..=total).contains(page))
    .collect();
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        if previous.is_some_and(|p| p + 1 != page) {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn small_totals_have_no_gaps() {
        assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn gaps_on_both_sides() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn edge_pages() {
        assert_eq!(page_window(1, 6), vec![Page(1), Page(2), Gap, Page(6)]);
        assert_eq!(page_window(6, 6), vec![Page(1), Gap, Page(5), Page(6)]);
        assert_eq!(page_window(3, 6), vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(6)]);
    }

    #[test]
    fn huge_totals_stay_small() {
        assert_eq!(
            page_window(500_000_000, u32::MAX),
            vec![
                Page(1),
                Gap,
                Page(499_999_999),
                Page(500_000_000),
                Page(500_000_001),
                Gap,
                Page(u32::MAX),
            ]
        );
        assert_eq!(
            page_window(u32::MAX, u32::MAX),
            vec![Page(1), Gap, Page(u32::MAX - 1), Page(u32::MAX)]
        );
    }

    #[test]
    fn out_of_range_current_shows_ends_only() {
        assert_eq!(page_window(0, 4), vec![Page(1), Gap, Page(4)]);
        assert_eq!(page_window(9, 4), vec![Page(1), Gap, Page(4)]);
    }
}
