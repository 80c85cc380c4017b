use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};

use crate::app_state::AppState;
use crate::config::app_config::AppConfig;
use crate::routes::routes;

pub async fn start(config: Arc<AppConfig>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState::new(config.clone(), reqwest::Client::new());
    let app = routes(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let server = axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    info!("server running at: http://localhost:{}", config.port);
    info!("upstream catalog: {}", config.upstream_url);
    server.await?;

    info!("server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
