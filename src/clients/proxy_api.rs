use async_trait::async_trait;
use log::info;
use reqwest::StatusCode;

use crate::models::book::{BookRecord, BooksResponse, MessageResponse};
use crate::models::errors::{HttpError, SearchError};

/// What the search client needs from the proxy service.
#[async_trait]
pub trait BookApi: Send + Sync {
    async fn health(&self) -> Result<String, HttpError>;

    async fn search(&self, keyword: &str, start_index: u32) -> Result<Vec<BookRecord>, SearchError>;
}

pub struct ProxyApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyApiClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl BookApi for ProxyApiClient {
    async fn health(&self) -> Result<String, HttpError> {
        let result = self.client.get(format!("{}/", &self.base_url))
            .send().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        info!("GET {} {}", result.url(), result.status());
        if !result.status().is_success() {
            return Err(HttpError { message: format!("{}, {}", result.status(), result.url()) });
        }

        let json = result.json::<MessageResponse>().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        Ok(json.message)
    }

    async fn search(&self, keyword: &str, start_index: u32) -> Result<Vec<BookRecord>, SearchError> {
        let result = self.client.get(format!("{}/get_title", &self.base_url))
            .query(&[("keyword", keyword.to_string()), ("startindex", start_index.to_string())])
            .send().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        info!("GET {} {}", result.url(), result.status());
        if result.status() == StatusCode::NOT_FOUND {
            return Err(SearchError::NotFound);
        }
        if !result.status().is_success() {
            return Err(HttpError { message: format!("{}, {}", result.status(), result.url()) }.into());
        }

        let json = result.json::<BooksResponse>().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        Ok(json.books)
    }
}
