use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers::books::{get_title, health};

pub fn routes(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(&state.config.allowed_origin)?;

    Ok(Router::new()
        .route("/", get(health))
        .route("/get_title", get(get_title))
        .layer(cors)
        .with_state(state))
}

/// Cross-origin access for the single configured front-end origin.
fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(origin)?)
        .allow_methods([Method::GET]))
}
