// Fixtures shared by the unit and router tests
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, http::StatusCode, Router};
use chrono::{DateTime, NaiveDate, Utc};
use tower::ServiceExt;

use crate::database::memory_store::MemoryTransactionStore;
use crate::errors::{AppError, Result};
use crate::models::transaction::Transaction;
use crate::services::seed_service::{FeedItem, ProductFeed};
use crate::state::AppState;

pub fn date(day: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn sample(
    product_id: i64,
    title: &str,
    description: &str,
    price: f64,
    sold: bool,
    day: &str,
) -> Transaction {
    Transaction {
        object_id: None,
        product_id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: "electronics".to_string(),
        sold,
        image: format!("https://img.example/{}.jpg", product_id),
        date_of_sale: date(day),
    }
}

pub fn feed_item(id: i64, title: &str, price: f64, sold: Option<bool>, date_of_sale: &str) -> FeedItem {
    FeedItem {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        price,
        category: "men's clothing".to_string(),
        sold,
        image: Some(format!("https://img.example/{}.jpg", id)),
        date_of_sale: date_of_sale.to_string(),
    }
}

/// A mixed catalogue: three March records, two February, one November.
pub fn catalogue() -> Vec<Transaction> {
    vec![
        sample(1, "Fjallraven Backpack", "Fits 15 inch laptops", 109.95, true, "2021-03-27"),
        sample(2, "Slim Fit T-Shirt", "Casual premium shirt", 22.3, false, "2022-03-10"),
        sample(3, "Cotton Jacket", "Great outerwear jacket", 55.99, true, "2021-03-01"),
        sample(4, "Smart Phone", "Android phone with 25 MP camera", 299.0, true, "2022-02-14"),
        sample(5, "Phone Case", "Rugged case", 25.0, false, "2021-02-02"),
        sample(6, "Gold Ring", "Classic ring", 25.0, true, "2021-11-20"),
    ]
}

pub struct StaticFeed(pub Vec<FeedItem>);

#[async_trait]
impl ProductFeed for StaticFeed {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        Ok(self.0.clone())
    }
}

pub struct FailingFeed;

#[async_trait]
impl ProductFeed for FailingFeed {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        Err(AppError::external_api("connection refused"))
    }
}

pub async fn memory_store(transactions: Vec<Transaction>) -> Arc<MemoryTransactionStore> {
    let store = Arc::new(MemoryTransactionStore::new());
    if !transactions.is_empty() {
        crate::database::store::TransactionStore::insert_many(store.as_ref(), transactions)
            .await
            .unwrap();
    }
    store
}

pub async fn test_state(transactions: Vec<Transaction>, feed: Arc<dyn ProductFeed>) -> AppState {
    AppState::new(memory_store(transactions).await, feed)
}

pub async fn test_router(transactions: Vec<Transaction>) -> Router {
    crate::build_router(test_state(transactions, Arc::new(StaticFeed(Vec::new()))).await)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
