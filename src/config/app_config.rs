use std::env;
use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde_derive::{Deserialize, Serialize};

pub const CONFIG_ENV_PREFIX: &str = "book_lookup";
const CONFIG_DIR_ENV: &str = "BOOK_LOOKUP_CONF_DIR";
const CONFIG_FILE: &str = "config.yml";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub upstream_url: String,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = config_directory()?;

        let mut config = Config::builder();
        if config_dir.join(CONFIG_FILE).exists() {
            config = config.add_source(File::from(config_dir.join(CONFIG_FILE)))
        }

        config = config.add_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
            .set_default("port", "3000")?
            .set_default("upstream_url", "https://www.googleapis.com/books/v1/volumes")?
            .set_default("allowed_origin", "http://localhost:5173")?;

        config.build()?.try_deserialize()
    }
}

/// `BOOK_LOOKUP_CONF_DIR` when set, the working directory otherwise.
pub fn config_directory() -> Result<PathBuf, ConfigError> {
    let config_dir = match env::var(CONFIG_DIR_ENV) {
        Ok(path) => PathBuf::from(path),
        Err(_) => env::current_dir()
            .map_err(|err| ConfigError::Message(format!("can't read current dir: {}", err)))?
    };

    fs::create_dir_all(&config_dir)
        .map_err(|err| ConfigError::Message(format!("can't create config directory: {}", err)))?;

    Ok(config_dir)
}
