use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::errors::Result;
use crate::models::transaction::MonthlyStatistics;
use crate::services::statistics_service::{combined_statistics, monthly_statistics, StatisticsParams};
use crate::state::AppState;

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> Result<Json<MonthlyStatistics>> {
    tracing::info!("📊 GET /statistics called with query: {:?}", params);

    let month = params.required_month()?;
    let statistics = monthly_statistics(state.store.as_ref(), month).await?;

    tracing::info!(
        "✅ {}: {} sold, {} not sold, total {}",
        month,
        statistics.total_sold_items,
        statistics.total_not_sold_items,
        statistics.total_sale_amount
    );
    Ok(Json(statistics))
}

pub async fn get_combined(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> Result<Json<Value>> {
    tracing::info!("📊 GET /combined called with query: {:?}", params);

    let statistics = combined_statistics(state.store.as_ref(), params.month.as_deref()).await?;
    Ok(Json(json!({ "statistics": statistics })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_support::{catalogue, get_json, test_router};

    #[tokio::test]
    async fn month_statistics() {
        let router = test_router(catalogue()).await;
        let (status, body) = get_json(&router, "/statistics?month=February").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSaleAmount"], 299.0);
        assert_eq!(body["totalSoldItems"], 1);
        assert_eq!(body["totalNotSoldItems"], 1);
    }

    #[tokio::test]
    async fn missing_month_is_a_client_error() {
        let router = test_router(catalogue()).await;
        for uri in ["/statistics", "/statistics?month="] {
            let (status, body) = get_json(&router, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], "Month is required");
        }
    }

    #[tokio::test]
    async fn month_without_records_is_zero() {
        let router = test_router(catalogue()).await;
        let (status, body) = get_json(&router, "/statistics?month=July").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSaleAmount"], 0.0);
        assert_eq!(body["totalSoldItems"], 0);
        assert_eq!(body["totalNotSoldItems"], 0);
    }

    #[tokio::test]
    async fn combined_wraps_statistics() {
        let router = test_router(catalogue()).await;

        let (status, body) = get_json(&router, "/combined").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statistics"]["totalSoldItems"], 4);
        assert_eq!(body["statistics"]["totalNotSoldItems"], 2);

        let (_, body) = get_json(&router, "/combined?month=November").await;
        assert_eq!(body["statistics"]["totalSaleAmount"], 25.0);
    }
}
