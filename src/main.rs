use std::sync::Arc;

use axum::Router;

use transaction_browser::build_router;
use transaction_browser::config::{AppConfig, StoreBackend};
use transaction_browser::database::connection::get_db_client;
use transaction_browser::database::memory_store::MemoryTransactionStore;
use transaction_browser::database::mongo_store::MongoTransactionStore;
use transaction_browser::database::store::TransactionStore;
use transaction_browser::errors;
use transaction_browser::services::seed_service::HttpProductFeed;
use transaction_browser::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env()?;
    let app_state = initialize_app_state(&config).await?;

    let app = build_router(app_state);
    start_server(app, &config).await
}

async fn initialize_app_state(config: &AppConfig) -> errors::Result<AppState> {
    let store: Arc<dyn TransactionStore> = match config.store {
        StoreBackend::Mongo => {
            tracing::info!("🔧 Connecting to MongoDB...");
            let db = get_db_client(config).await?;
            Arc::new(MongoTransactionStore::new(db, &config.collection_name))
        }
        StoreBackend::Memory => {
            tracing::warn!("⚠️ Using the in-memory store; data is lost on restart");
            Arc::new(MemoryTransactionStore::new())
        }
    };

    tracing::info!("🌐 Seed feed: {}", config.seed_url);
    let feed = Arc::new(HttpProductFeed::new(config.seed_url.clone()));

    Ok(AppState::new(store, feed).with_default_per_page(config.default_per_page))
}

async fn start_server(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    tracing::info!("🚀 Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
        e
    })?;
    axum::serve(listener, app).await?;
    Ok(())
}
