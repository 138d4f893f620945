/// Prev/next pagination readout. `page` is 0-based as in the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub total_records: u64,
    pub rows_on_page: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u64 {
        self.total_records.div_ceil(self.per_page.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages()
    }

    fn offset(&self) -> u64 {
        self.page.saturating_mul(self.per_page)
    }

    pub fn first_item(&self) -> u64 {
        self.offset().saturating_add(1)
    }

    pub fn last_item(&self) -> u64 {
        self.offset().saturating_add(self.rows_on_page)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page.saturating_add(1), self.total_pages())
    }

    pub fn items_label(&self) -> String {
        format!(
            "Items {} to {} of {}",
            self.first_item(),
            self.last_item(),
            self.total_records
        )
    }
}
