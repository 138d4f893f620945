use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;

use state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::transactions::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// `status` is `healthy` while the store answers a ping, `degraded` otherwise.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let status = match state.store.ping().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("⚠️ Store ping failed: {}", e);
            "degraded"
        }
    };

    Json(json!({
        "status": status,
        "store": state.store.backend(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
