use std::sync::Arc;

use book_lookup::config::app_config::AppConfig;
use book_lookup::server;
use log::{error, LevelFilter};

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match AppConfig::new() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = server::start(config).await {
        error!("{}", err);
        std::process::exit(1);
    }
}
