use async_trait::async_trait;
use reqwest::Client;

use crate::errors::{AppError, Result};
use crate::models::transaction::{MonthlyStatistics, TransactionPage};
use crate::ui::view::RecordsQuery;

/// Where the table view gets its data from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn transactions(&self, query: &RecordsQuery) -> Result<TransactionPage>;

    async fn statistics(&self, month: &str) -> Result<MonthlyStatistics>;
}

/// Talks to a running server's JSON API. Public for front ends that run
/// outside the server process; the server itself reads through `AppState`.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body["message"].as_str().unwrap_or("no message").to_string();
            return Err(AppError::external_api(format!(
                "GET {} failed with status {}: {}",
                path, status, message
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn transactions(&self, query: &RecordsQuery) -> Result<TransactionPage> {
        self.get_json(
            "/transactions",
            &[
                ("search", query.search.clone()),
                ("month", query.month.clone()),
                ("page", query.page.to_string()),
                ("perPage", query.per_page.to_string()),
            ],
        )
        .await
    }

    async fn statistics(&self, month: &str) -> Result<MonthlyStatistics> {
        self.get_json("/statistics", &[("month", month.to_string())])
            .await
    }
}
