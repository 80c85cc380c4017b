use log::info;

use crate::models::book::BookRecord;
use crate::models::errors::{HttpError, SearchError};
use crate::models::volumes::VolumesResponse;

pub const PAGE_SIZE: u32 = 10;

/// Upstream book catalog (Google Books `volumes` endpoint).
pub struct BooksClient {
    client: reqwest::Client,
    base_uri: String,
}

impl BooksClient {
    pub fn new(client: reqwest::Client, base_uri: String) -> Self {
        Self { client, base_uri }
    }

    pub async fn get_volumes(&self, keyword: &str, start_index: u32) -> Result<VolumesResponse, HttpError> {
        let result = self.client.get(&self.base_uri)
            .query(&[
                ("q", keyword.to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
                ("startIndex", start_index.to_string()),
            ])
            .send().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        info!("GET {} {}", result.url(), result.status());
        if !result.status().is_success() {
            return Err(HttpError { message: format!("{}, {}", result.status(), result.url()) });
        }

        let json = result.json::<VolumesResponse>().await
            .map_err(|err| HttpError { message: err.to_string() })?;

        Ok(json)
    }

    /// One upstream request, no retries.
    pub async fn search(&self, keyword: &str, start_index: u32) -> Result<Vec<BookRecord>, SearchError> {
        info!("search keyword: {}, start index: {}", keyword, start_index);
        let volumes = self.get_volumes(keyword, start_index).await?;

        volumes.into_books().ok_or(SearchError::NotFound)
    }
}
