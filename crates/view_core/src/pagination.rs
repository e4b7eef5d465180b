/// Number of pages needed for `len` items; zero for an empty list.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The 1-indexed `page` of `items`. Pages outside the list (including page 0)
/// are empty rather than an error.
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

pub fn show_page_controls(page_count: usize) -> bool {
    page_count > 1
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
