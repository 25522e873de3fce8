/// Roster rows shown per page.
pub const ITEMS_PER_PAGE: usize = 5;

/// Client-side pager over the filtered roster. Pages are 1-based; navigation
/// is a no-op at either boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
}

impl Pager {
    /// A pager over `total_items` rows, starting on page 1.
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, ITEMS_PER_PAGE)
    }

    pub fn with_page_size(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_items,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    // Lowest page a cursor may rest on is 1, even for an empty list.
    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.last_page());
    }

    fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    fn end_index(&self) -> usize {
        (self.start_index() + self.items_per_page).min(self.total_items)
    }

    /// Visible slice for the current page, clipped to the list bounds.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = self.end_index().min(items.len());
        &items[start..end]
    }

    /// One-line summary of the rows currently shown, 1-based inclusive.
    pub fn summary(&self) -> String {
        let first = if self.total_items == 0 {
            0
        } else {
            self.start_index() + 1
        };
        format!(
            "Showing {first} to {} of {} employees",
            self.end_index(),
            self.total_items
        )
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
