use serde::Deserialize;

use crate::database::store::TransactionStore;
use crate::errors::{AppError, Result};
use crate::models::filter::TransactionFilter;
use crate::models::transaction::{TransactionPage, TransactionResponse};

/// Raw `/transactions` query string. Numbers stay strings here so a bad value
/// turns into our own 400 body instead of the extractor's plain-text one.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionParams {
    pub search: Option<String>,
    pub month: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        PageRequest {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Records before this page. MongoDB takes `skip` as an int64, so an
    /// offset past `i64::MAX` is rejected rather than wrapped.
    pub fn skip(&self) -> Result<u64> {
        (self.page - 1)
            .checked_mul(self.per_page)
            .filter(|skip| i64::try_from(*skip).is_ok())
            .ok_or_else(|| AppError::invalid_data("page is out of range"))
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

pub(crate) fn parse_number(raw: Option<&str>, name: &str, default: u64) -> Result<i64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| AppError::invalid_data(format!("{} must be an integer", name))),
        None => Ok(default as i64),
    }
}

impl TransactionParams {
    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter::build(self.search.as_deref(), self.month.as_deref())
    }

    pub fn page_request(&self, default_per_page: u64) -> Result<PageRequest> {
        let page = parse_number(self.page.as_deref(), "page", 1)?;
        let per_page = parse_number(self.per_page.as_deref(), "perPage", default_per_page)?;
        Ok(PageRequest::new(page.max(1) as u64, per_page.max(1) as u64))
    }
}

pub async fn list_transactions(
    store: &dyn TransactionStore,
    filter: &TransactionFilter,
    request: PageRequest,
) -> Result<TransactionPage> {
    let skip = request.skip()?;
    let total_transactions = store.count(filter).await?;
    let transactions = store
        .find_page(filter, skip, request.per_page)
        .await?;

    Ok(TransactionPage {
        total_transactions,
        transactions: transactions.into_iter().map(TransactionResponse::from).collect(),
        current_page: request.page,
        total_pages: request.total_pages(total_transactions),
    })
}
