use serde::Deserialize;

use crate::database::store::TransactionStore;
use crate::errors::{AppError, Result};
use crate::models::filter::{MonthFilter, TransactionFilter};
use crate::models::transaction::MonthlyStatistics;

#[derive(Debug, Default, Deserialize)]
pub struct StatisticsParams {
    pub month: Option<String>,
}

impl StatisticsParams {
    pub fn required_month(&self) -> Result<&str> {
        self.month
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| AppError::missing("Month"))
    }
}

pub async fn monthly_statistics(
    store: &dyn TransactionStore,
    month: &str,
) -> Result<MonthlyStatistics> {
    let filter = TransactionFilter::Month(MonthFilter::parse(month));
    store.statistics(&filter).await
}

/// Statistics for `month` when given, otherwise across every record.
pub async fn combined_statistics(
    store: &dyn TransactionStore,
    month: Option<&str>,
) -> Result<MonthlyStatistics> {
    match month.filter(|m| !m.trim().is_empty()) {
        Some(month) => monthly_statistics(store, month).await,
        None => store.statistics(&TransactionFilter::All).await,
    }
}
