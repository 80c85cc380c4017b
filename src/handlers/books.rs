use axum::extract::{Query, State};
use axum::Json;
use log::info;
use serde_derive::Deserialize;

use crate::app_state::AppState;
use crate::models::book::{BooksResponse, MessageResponse};
use crate::models::errors::SearchError;

#[derive(Deserialize, Debug)]
pub struct TitleQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub startindex: u32,
}

pub async fn health() -> Json<MessageResponse> {
    info!("accept GET request");
    Json(MessageResponse { message: "OK".to_string() })
}

pub async fn get_title(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<BooksResponse>, SearchError> {
    info!("accept book info GET request");
    let books = state.books_client.search(&query.keyword, query.startindex).await?;

    Ok(Json(BooksResponse { books }))
}
