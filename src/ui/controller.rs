use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::ui::source::DataSource;
use crate::ui::view::{Fetch, TableView};

/// Runs the fetches a [`TableView`] asks for and commits the results. Stale
/// responses are rejected by the view's tickets, so fetches can be spawned
/// and left to finish in any order.
pub struct TableController<S> {
    source: Arc<S>,
    view: Arc<Mutex<TableView>>,
}

impl<S> Clone for TableController<S> {
    fn clone(&self) -> Self {
        TableController {
            source: Arc::clone(&self.source),
            view: Arc::clone(&self.view),
        }
    }
}

impl<S: DataSource + 'static> TableController<S> {
    pub fn new(source: Arc<S>, view: TableView) -> Self {
        TableController {
            source,
            view: Arc::new(Mutex::new(view)),
        }
    }

    pub async fn with_view<R>(&self, f: impl FnOnce(&TableView) -> R) -> R {
        let view = self.view.lock().await;
        f(&view)
    }

    pub async fn load(&self) {
        let fetches = self.view.lock().await.initial_fetches();
        self.run(fetches).await;
    }

    pub async fn set_search_text(&self, text: impl Into<String>) {
        let fetches = self.view.lock().await.set_search_text(text);
        self.run(fetches).await;
    }

    pub async fn set_month(&self, month: impl Into<String>) {
        let fetches = self.view.lock().await.set_month(month);
        self.run(fetches).await;
    }

    pub async fn set_page(&self, page: u64) {
        let fetches = self.view.lock().await.set_page(page);
        self.run(fetches).await;
    }

    /// Fire-and-forget variant of [`run`](Self::run), for interactive callers
    /// that keep accepting input while fetches are in flight. Results land in
    /// the shared view; stale ones are dropped by ticket.
    pub fn spawn(&self, fetches: Vec<Fetch>) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.run(fetches).await })
    }

    /// Issues all fetches concurrently; the view lock is never held across a
    /// request.
    pub async fn run(&self, fetches: Vec<Fetch>) {
        join_all(fetches.into_iter().map(|fetch| self.execute(fetch))).await;
    }

    /// Applies a state change under the view lock and hands back its
    /// fetches without running them; pair with [`spawn`](Self::spawn) or
    /// [`run`](Self::run).
    pub async fn update(&self, f: impl FnOnce(&mut TableView) -> Vec<Fetch>) -> Vec<Fetch> {
        let mut view = self.view.lock().await;
        f(&mut view)
    }

    async fn execute(&self, fetch: Fetch) {
        match fetch {
            Fetch::Records { ticket, query } => match self.source.transactions(&query).await {
                Ok(page) => {
                    if !self.view.lock().await.commit_records(ticket, page) {
                        tracing::debug!("Dropped stale records response {:?}", ticket);
                    }
                }
                Err(e) => tracing::warn!("Error fetching transactions: {}", e),
            },
            Fetch::Statistics { ticket, month } => match self.source.statistics(&month).await {
                Ok(statistics) => {
                    if !self.view.lock().await.commit_statistics(ticket, statistics) {
                        tracing::debug!("Dropped stale statistics response {:?}", ticket);
                    }
                }
                Err(e) => {
                    tracing::warn!("Error fetching statistics for {}: {}", month, e);
                    self.view.lock().await.fail_statistics(ticket);
                }
            },
        }
    }
}
