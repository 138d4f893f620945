//! Table view state: `{page, month, search text}` plus the last committed
//! data. State changes hand back the fetches to issue; every fetch carries a
//! generation ticket and only the newest ticket of its kind may commit.

use crate::models::transaction::{MonthlyStatistics, TransactionPage, TransactionResponse};
use crate::ui::pagination::Pagination;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DEFAULT_MONTH: &str = "March";
pub const ITEMS_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub search: String,
    pub month: String,
    /// 1-based, as the API expects
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Records { ticket: Ticket, query: RecordsQuery },
    Statistics { ticket: Ticket, month: String },
}

#[derive(Debug, Clone)]
pub struct TableView {
    page: u64,
    month: String,
    search_text: String,
    per_page: u64,

    rows: Vec<TransactionResponse>,
    total_records: u64,
    statistics: MonthlyStatistics,
    loading_statistics: bool,

    records_generation: u64,
    statistics_generation: u64,
}

impl Default for TableView {
    fn default() -> Self {
        TableView {
            page: 0,
            month: DEFAULT_MONTH.to_string(),
            search_text: String::new(),
            per_page: ITEMS_PER_PAGE,
            rows: Vec::new(),
            total_records: 0,
            statistics: MonthlyStatistics::default(),
            loading_statistics: false,
            records_generation: 0,
            statistics_generation: 0,
        }
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an explicit state without issuing anything; call
    /// [`initial_fetches`](Self::initial_fetches) next.
    pub fn with_state(search_text: impl Into<String>, month: impl Into<String>, page: u64) -> Self {
        TableView {
            search_text: search_text.into(),
            month: month.into(),
            page,
            ..Self::default()
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn rows(&self) -> &[TransactionResponse] {
        &self.rows
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn statistics(&self) -> &MonthlyStatistics {
        &self.statistics
    }

    pub fn is_loading_statistics(&self) -> bool {
        self.loading_statistics
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
            total_records: self.total_records,
            rows_on_page: self.rows.len() as u64,
        }
    }

    pub fn initial_fetches(&mut self) -> Vec<Fetch> {
        vec![self.records_fetch(), self.statistics_fetch()]
    }

    /// New search text always goes back to the first page.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Vec<Fetch> {
        let text = text.into();
        let changed = text != self.search_text || self.page != 0;
        self.search_text = text;
        self.page = 0;
        if changed {
            vec![self.records_fetch()]
        } else {
            Vec::new()
        }
    }

    /// New month goes back to the first page and is the only change that
    /// refreshes statistics.
    pub fn set_month(&mut self, month: impl Into<String>) -> Vec<Fetch> {
        let month = month.into();
        let month_changed = month != self.month;
        let page_changed = self.page != 0;
        self.month = month;
        self.page = 0;

        let mut fetches = Vec::new();
        if month_changed || page_changed {
            fetches.push(self.records_fetch());
        }
        if month_changed {
            fetches.push(self.statistics_fetch());
        }
        fetches
    }

    pub fn set_page(&mut self, page: u64) -> Vec<Fetch> {
        if page == self.page {
            return Vec::new();
        }
        self.page = page;
        vec![self.records_fetch()]
    }

    pub fn next_page(&mut self) -> Vec<Fetch> {
        if self.pagination().has_next() {
            self.set_page(self.page + 1)
        } else {
            Vec::new()
        }
    }

    pub fn previous_page(&mut self) -> Vec<Fetch> {
        if self.pagination().has_previous() {
            self.set_page(self.page - 1)
        } else {
            Vec::new()
        }
    }

    /// Applies a records response; returns false when a newer request has
    /// been issued since.
    pub fn commit_records(&mut self, ticket: Ticket, page: TransactionPage) -> bool {
        if ticket.0 != self.records_generation {
            return false;
        }
        self.rows = page.transactions;
        self.total_records = page.total_transactions;
        true
    }

    pub fn commit_statistics(&mut self, ticket: Ticket, statistics: MonthlyStatistics) -> bool {
        if ticket.0 != self.statistics_generation {
            return false;
        }
        self.statistics = statistics;
        self.loading_statistics = false;
        true
    }

    /// A failed statistics fetch keeps the previous numbers but ends loading.
    pub fn fail_statistics(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.statistics_generation {
            return false;
        }
        self.loading_statistics = false;
        true
    }

    fn records_fetch(&mut self) -> Fetch {
        self.records_generation += 1;
        Fetch::Records {
            ticket: Ticket(self.records_generation),
            query: RecordsQuery {
                search: self.search_text.clone(),
                month: self.month.clone(),
                page: self.page.saturating_add(1),
                per_page: self.per_page,
            },
        }
    }

    fn statistics_fetch(&mut self) -> Fetch {
        self.statistics_generation += 1;
        self.loading_statistics = true;
        Fetch::Statistics {
            ticket: Ticket(self.statistics_generation),
            month: self.month.clone(),
        }
    }
}
