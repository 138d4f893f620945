//! The transaction table front end.
//!
//! The server's `GET /` drives a [`controller::TableController`] over the
//! in-process [`source::DataSource`] for `AppState`. Clients outside the
//! server process (a desktop shell, a terminal UI) drive the same controller
//! over HTTP with [`source::ApiClient`], reacting to input with
//! [`controller::TableController::update`] and
//! [`controller::TableController::spawn`] so a slow request never blocks the
//! next keystroke:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use transaction_browser::ui::{controller::TableController, source::ApiClient, view::TableView};
//! # async fn demo() {
//! let controller = TableController::new(Arc::new(ApiClient::new("http://localhost:5000")), TableView::new());
//! controller.load().await;
//!
//! let fetches = controller.update(|view| view.set_search_text("phone")).await;
//! controller.spawn(fetches).await.ok();
//! let html = controller.with_view(transaction_browser::ui::render::render_table_page).await;
//! # drop(html);
//! # }
//! ```

pub mod controller;
pub mod highlight;
pub mod pagination;
pub mod render;
pub mod source;
pub mod view;
