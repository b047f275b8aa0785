use serde::Serialize;

/// Rows shown on each roster page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// The page numbers to render as links, with `None` marking an ellipsis.
///
/// Keeps `left_edge` pages at the start, `right_edge` at the end, and a
/// window of `left_current`/`right_current` pages around the current one.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One renderable page of a roster: the rows plus everything the
/// pagination controls need.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Builds a page from the fetched rows and the total row count.
    ///
    /// The current page is clamped into `1..=total_pages` (an empty list
    /// still reports page 1), so prev/next can never point outside the
    /// range.
    pub fn from_total(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        let page = current_page.clamp(1, total_pages.max(1));

        let pages = page_window(total_pages, page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    /// A page with no rows at all, used when a list could not be loaded.
    pub fn unavailable() -> Self {
        Self::from_total(Vec::new(), 1, 0, DEFAULT_ITEMS_PER_PAGE)
    }
}
