use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use validator::Validate;

use crate::database::store::TransactionStore;
use crate::errors::{AppError, Result};
use crate::models::transaction::Transaction;

/// One listing as it appears in the remote product feed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedItem {
    pub id: i64,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub sold: Option<bool>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(rename = "dateOfSale")]
    pub date_of_sale: String,
}

impl FeedItem {
    pub fn into_transaction(self) -> Result<Transaction> {
        self.validate()?;
        let date_of_sale = parse_sale_date(&self.date_of_sale)?;

        Ok(Transaction {
            object_id: None,
            product_id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            sold: self.sold.unwrap_or(true),
            image: self.image.unwrap_or_default(),
            date_of_sale,
        })
    }
}

/// RFC 3339 first, then an offset-less timestamp or a bare date, both read as UTC.
pub fn parse_sale_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::invalid_data(format!("Invalid dateOfSale '{}'", raw)))
}

#[async_trait]
pub trait ProductFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FeedItem>>;
}

#[derive(Clone)]
pub struct HttpProductFeed {
    url: String,
    client: Client,
}

impl HttpProductFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ProductFeed for HttpProductFeed {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        tracing::info!("🌐 Fetching product feed from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::external_api(format!(
                "Product feed responded with status: {}",
                response.status()
            )));
        }

        let items: Vec<FeedItem> = response.json().await?;
        tracing::info!("   → Feed returned {} listings", items.len());
        Ok(items)
    }
}

/// Fetches the feed and appends every listing. Not idempotent: each call adds
/// a fresh copy of the whole feed.
pub async fn seed_database(store: &dyn TransactionStore, feed: &dyn ProductFeed) -> Result<usize> {
    let items = feed.fetch().await?;
    let transactions = items
        .into_iter()
        .map(FeedItem::into_transaction)
        .collect::<Result<Vec<_>>>()?;

    let inserted = store.insert_many(transactions).await?;
    tracing::info!("🌱 Seeded {} transactions into the {} store", inserted, store.backend());
    Ok(inserted)
}
