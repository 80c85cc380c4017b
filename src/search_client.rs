pub mod app;
pub mod command;
pub mod favorites;
pub mod render;
pub mod state;
pub mod storage;

use log::{info, warn};
use tokio::sync::Mutex;

use crate::clients::proxy_api::BookApi;
use crate::search_client::state::{RequestTicket, SearchState};

/// Search results and pagination, driven against a [`BookApi`].
///
/// The state lock is never held while a request is in flight, so lookups
/// and load-mores may overlap; the most recently started one wins.
pub struct SearchClient<A: BookApi> {
    api: A,
    state: Mutex<SearchState>,
}

impl<A: BookApi> SearchClient<A> {
    pub fn new(api: A) -> Self {
        Self { api, state: Mutex::new(SearchState::default()) }
    }

    /// Liveness probe against the proxy. Only logs.
    pub async fn check_health(&self) -> bool {
        match self.api.health().await {
            Ok(message) => {
                info!("proxy: {}", message);
                true
            }
            Err(err) => {
                warn!("proxy unreachable: {}", err);
                false
            }
        }
    }

    /// Returns `false` if the response arrived after a newer request started.
    pub async fn lookup(&self, keyword: &str) -> bool {
        info!("lookup: {}", keyword);
        let ticket = self.state.lock().await.begin_lookup(keyword);
        self.run(ticket).await
    }

    pub async fn load_more(&self) -> bool {
        let ticket = self.state.lock().await.begin_load_more();
        self.run(ticket).await
    }

    async fn run(&self, ticket: RequestTicket) -> bool {
        let result = self.api.search(&ticket.keyword, ticket.start_index).await;
        self.state.lock().await.apply(&ticket, result)
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.lock().await.clone()
    }
}
