/// How many pages to show on each side of the current page.
const WINDOW_RADIUS: u32 = 2;

/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the abbreviated list of page chips for `current` of `total_pages`.
///
/// Page 1 and the last page are always present, with a window of
/// [`WINDOW_RADIUS`] pages around `current` in between. Gaps are marked with
/// [`PageItem::Ellipsis`]. Returns an empty list when there is at most one page.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(WINDOW_RADIUS).max(2);
    let end = current
        .saturating_add(WINDOW_RADIUS)
        .min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if current.saturating_sub(WINDOW_RADIUS) > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if current.saturating_add(WINDOW_RADIUS) < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

/// Target of the "previous" control, `None` when disabled.
pub fn prev_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Target of the "next" control, `None` when disabled.
pub fn next_page(current: u32, total_pages: u32) -> Option<u32> {
    (current < total_pages).then(|| current + 1)
}
