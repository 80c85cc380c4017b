use std::io::Write;

use book_lookup::clients::proxy_api::ProxyApiClient;
use book_lookup::config::client_config::ClientConfig;
use book_lookup::search_client::app::{App, Flow};
use book_lookup::search_client::favorites::FavoritesRepository;
use book_lookup::search_client::storage::FileStorage;
use book_lookup::search_client::SearchClient;
use log::{error, info, LevelFilter};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match ClientConfig::new() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };
    info!("proxy: {}, storage: {}", config.proxy_url, config.storage_dir.display());

    let api = ProxyApiClient::new(reqwest::Client::new(), config.proxy_url.clone());
    let favorites = FavoritesRepository::load(FileStorage::new(config.storage_dir.clone()));
    let mut app = App::new(SearchClient::new(api), favorites);

    println!("Book Lookup");
    println!("{}", app.start().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!("could not read input: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let (flow, output) = app.handle_line(&line).await;
        if flow == Flow::Quit {
            break;
        }
        println!("{}", output);
    }
}
