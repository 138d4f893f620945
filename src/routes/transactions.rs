use axum::{routing::get, Router};

use crate::handlers::{seed, statistics, table, transactions};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // GET / - Server-rendered table view
        // Example: /?search=phone&month=March&page=1
        .route("/", get(table::table_page))

        // GET /seed - Load the remote feed into the store (not idempotent)
        .route("/seed", get(seed::seed))

        // GET /transactions - Filtered, paginated records
        // Example: /transactions?search=jacket&page=1&perPage=10
        .route("/transactions", get(transactions::get_transactions))

        // GET /statistics - Sold / not sold totals for one month
        // Example: /statistics?month=March
        .route("/statistics", get(statistics::get_statistics))

        // GET /combined - Statistics wrapped under a single key
        .route("/combined", get(statistics::get_combined))
}
