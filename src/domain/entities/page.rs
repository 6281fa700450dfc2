pub const ITEMS_PER_PAGE: usize = 10;

pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    item_count.div_ceil(items_per_page)
}

/// Returns the 1-indexed `page` of `items`. Pages outside the range,
/// page 0 included, are empty rather than clamped.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    if page == 0 || items_per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}
