use log::error;

use crate::clients::proxy_api::BookApi;
use crate::search_client::command::{Command, HELP};
use crate::search_client::favorites::FavoritesRepository;
use crate::search_client::render::render;
use crate::search_client::storage::FavoritesStorage;
use crate::search_client::SearchClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front-end state: search results plus the injected favorites.
pub struct App<A: BookApi, S: FavoritesStorage> {
    client: SearchClient<A>,
    favorites: FavoritesRepository<S>,
}

impl<A: BookApi, S: FavoritesStorage> App<A, S> {
    pub fn new(client: SearchClient<A>, favorites: FavoritesRepository<S>) -> Self {
        Self { client, favorites }
    }

    pub fn favorites(&self) -> &FavoritesRepository<S> {
        &self.favorites
    }

    pub async fn start(&self) -> String {
        self.client.check_health().await;
        self.view().await
    }

    pub async fn view(&self) -> String {
        let state = self.client.snapshot().await;
        render(&state, self.favorites.books())
    }

    pub async fn handle_line(&mut self, line: &str) -> (Flow, String) {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command).await,
            Err(err) => (Flow::Continue, format!("{}\n{}", err, HELP)),
        }
    }

    pub async fn handle(&mut self, command: Command) -> (Flow, String) {
        match command {
            Command::Lookup(keyword) => {
                self.client.lookup(&keyword).await;
            }
            Command::LoadMore => {
                self.client.load_more().await;
            }
            Command::ToggleFavorite(position) => {
                let state = self.client.snapshot().await;
                let book = match position.checked_sub(1).and_then(|i| state.books().get(i)) {
                    Some(book) => book,
                    None => return (Flow::Continue, format!("no result #{}", position)),
                };
                if let Err(err) = self.favorites.toggle(book) {
                    error!("could not save favorites: {}", err);
                }
            }
            Command::RemoveFavorite(position) => {
                let book = match position.checked_sub(1).and_then(|i| self.favorites.books().get(i)) {
                    Some(book) => book.clone(),
                    None => return (Flow::Continue, format!("no favorite #{}", position)),
                };
                if let Err(err) = self.favorites.remove(&book) {
                    error!("could not save favorites: {}", err);
                }
            }
            Command::Show => {}
            Command::Help => return (Flow::Continue, HELP.to_string()),
            Command::Quit => return (Flow::Quit, String::new()),
        }

        (Flow::Continue, self.view().await)
    }
}
