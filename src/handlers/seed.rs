use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::errors::{AppError, Result};
use crate::services::seed_service::seed_database;
use crate::state::AppState;

pub async fn seed(State(state): State<AppState>) -> Result<Json<Value>> {
    tracing::info!("🌱 GET /seed called");
    let start_time = std::time::Instant::now();

    // Anything that goes wrong while seeding is reported as 503
    let inserted = seed_database(state.store.as_ref(), state.feed.as_ref())
        .await
        .map_err(|e| AppError::unavailable(e.to_string()))?;

    tracing::info!("✅ Seeded {} transactions in {:?}", inserted, start_time.elapsed());
    Ok(Json(json!({
        "message": "Database seeded successfully",
        "inserted": inserted,
    })))
}
