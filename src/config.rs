pub mod app_config;
pub mod client_config;
