use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::database::store::TransactionStore;
use crate::errors::Result;
use crate::models::filter::TransactionFilter;
use crate::models::transaction::{statistics_pipeline, MonthlyStatistics, Transaction};

#[derive(Clone)]
pub struct MongoTransactionStore {
    db: Database,
    collection: Collection<Transaction>,
}

impl MongoTransactionStore {
    pub fn new(db: Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        MongoTransactionStore { db, collection }
    }
}

#[async_trait]
impl TransactionStore for MongoTransactionStore {
    async fn insert_many(&self, transactions: Vec<Transaction>) -> Result<usize> {
        if transactions.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(&transactions).await?;
        tracing::debug!("   → Inserted {} documents", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        let filter = filter.to_document();
        tracing::debug!("   → Count filter: {:?}", filter);
        Ok(self.collection.count_documents(filter).await?)
    }

    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>> {
        let filter = filter.to_document();
        tracing::debug!("   → Find filter: {:?} skip={} limit={}", filter, skip, limit);

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit as i64)
            .await?;
        let transactions: Vec<Transaction> = cursor.try_collect().await?;
        Ok(transactions)
    }

    async fn statistics(&self, filter: &TransactionFilter) -> Result<MonthlyStatistics> {
        let pipeline = statistics_pipeline(filter.to_document());
        tracing::debug!("   → Aggregation pipeline: {:?}", pipeline);

        let cursor = self.collection.aggregate(pipeline).await?;
        let groups: Vec<Document> = cursor.try_collect().await?;

        Ok(groups
            .first()
            .map(MonthlyStatistics::from_group_document)
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
