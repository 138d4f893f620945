use async_trait::async_trait;

use crate::errors::Result;
use crate::models::filter::TransactionFilter;
use crate::models::transaction::{MonthlyStatistics, Transaction};

/// The Record Store. Query and statistics paths only read; seeding is the only
/// writer.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Appends every record as new, returning how many were written.
    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<usize>;

    async fn count(&self, filter: &TransactionFilter) -> Result<u64>;

    /// Matching records in creation order, after skipping `skip`.
    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>>;

    async fn statistics(&self, filter: &TransactionFilter) -> Result<MonthlyStatistics>;

    async fn ping(&self) -> Result<()>;

    fn backend(&self) -> &'static str;
}
