use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::models::errors::{ApiError, SearchError};

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::NotFound => StatusCode::NOT_FOUND,
            SearchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let body = match &self {
            SearchError::NotFound => ApiError::new(self.to_string()),
            SearchError::Upstream(cause) => {
                error!("upstream error: {}", cause);
                ApiError::with_cause(self.to_string(), cause)
            }
        };

        (code, Json(body)).into_response()
    }
}
