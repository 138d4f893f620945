use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::errors::Result;
use crate::models::filter::TransactionFilter;
use crate::models::transaction::{MonthlyStatistics, TransactionPage};
use crate::services::query_service::{list_transactions, parse_number, PageRequest};
use crate::services::statistics_service::monthly_statistics;
use crate::state::AppState;
use crate::ui::controller::TableController;
use crate::ui::render::render_table_page;
use crate::ui::source::DataSource;
use crate::ui::view::{RecordsQuery, TableView, DEFAULT_MONTH, ITEMS_PER_PAGE};

#[derive(Debug, Default, Deserialize)]
pub struct TableParams {
    pub search: Option<String>,
    pub month: Option<String>,
    /// 1-based; kept as text so a bad value gets the JSON error body
    pub page: Option<String>,
}

// In-process source: the page is rendered from the same services the JSON
// API uses, without a loopback HTTP hop.
#[async_trait]
impl DataSource for AppState {
    async fn transactions(&self, query: &RecordsQuery) -> Result<TransactionPage> {
        let filter = TransactionFilter::build(Some(query.search.as_str()), Some(query.month.as_str()));
        list_transactions(
            self.store.as_ref(),
            &filter,
            PageRequest::new(query.page, query.per_page),
        )
        .await
    }

    async fn statistics(&self, month: &str) -> Result<MonthlyStatistics> {
        monthly_statistics(self.store.as_ref(), month).await
    }
}

pub async fn table_page(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> Result<Html<String>> {
    tracing::info!("🖥️ GET / called with query: {:?}", params);

    let page = parse_number(params.page.as_deref(), "page", 1)?.max(1) as u64;
    PageRequest::new(page, ITEMS_PER_PAGE).skip()?;

    let month = params
        .month
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MONTH.to_string());
    let view = TableView::with_state(params.search.unwrap_or_default(), month, page - 1);

    let controller = TableController::new(Arc::new(state), view);
    controller.load().await;
    Ok(Html(controller.with_view(render_table_page).await))
}
