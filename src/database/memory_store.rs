use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::database::store::TransactionStore;
use crate::errors::Result;
use crate::models::filter::TransactionFilter;
use crate::models::transaction::{MonthlyStatistics, Transaction};

/// In-process store. Filters go through [`TransactionFilter::matches`], which
/// agrees with the MongoDB query for ASCII text; see its notes on case folding.
/// Records keep insertion order, which is also `_id` order.
#[derive(Default)]
pub struct MemoryTransactionStore {
    records: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<usize> {
        let mut records = self.records.write().await;
        let inserted = transactions.len();
        records.extend(transactions.into_iter().map(|mut t| {
            t.object_id.get_or_insert_with(ObjectId::new);
            t
        }));
        Ok(inserted)
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|t| filter.matches(t)).count() as u64)
    }

    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|t| filter.matches(t))
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn statistics(&self, filter: &TransactionFilter) -> Result<MonthlyStatistics> {
        let records = self.records.read().await;
        Ok(MonthlyStatistics::accumulate(
            records.iter().filter(|t| filter.matches(t)),
        ))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
