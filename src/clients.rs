pub mod books_client;
pub mod proxy_api;
