use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::errors::Result;
use crate::models::transaction::TransactionPage;
use crate::services::query_service::{list_transactions, TransactionParams};
use crate::state::AppState;

pub async fn get_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionParams>,
) -> Result<Json<TransactionPage>> {
    tracing::info!("🔍 GET /transactions called with query: {:?}", params);
    let start_time = std::time::Instant::now();

    let request = params.page_request(state.default_per_page)?;
    let filter = params.filter();
    tracing::debug!("   → Filter: {:?}", filter);

    let page = list_transactions(state.store.as_ref(), &filter, request).await?;

    tracing::info!(
        "✅ Returned {} of {} transactions in {:?}",
        page.transactions.len(),
        page.total_transactions,
        start_time.elapsed()
    );
    Ok(Json(page))
}
