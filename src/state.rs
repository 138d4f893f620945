use std::sync::Arc;

use crate::config::DEFAULT_PER_PAGE;
use crate::database::store::TransactionStore;
use crate::services::seed_service::ProductFeed;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub feed: Arc<dyn ProductFeed>,
    pub default_per_page: u64,
}

impl AppState {
    pub fn new(store: Arc<dyn TransactionStore>, feed: Arc<dyn ProductFeed>) -> Self {
        AppState {
            store,
            feed,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_default_per_page(mut self, per_page: u64) -> Self {
        self.default_per_page = per_page;
        self
    }
}
