pub mod app_state;
pub mod clients;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod search_client;
pub mod server;

#[cfg(test)]
mod test_support;
