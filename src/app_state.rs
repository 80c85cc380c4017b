use std::sync::Arc;

use crate::clients::books_client::BooksClient;
use crate::config::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub books_client: Arc<BooksClient>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, client: reqwest::Client) -> Self {
        let books_client = Arc::new(BooksClient::new(client, config.upstream_url.clone()));
        Self { config, books_client }
    }
}
