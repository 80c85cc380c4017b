use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde_derive::{Deserialize, Serialize};

use crate::config::app_config::{config_directory, CONFIG_ENV_PREFIX};

const CLIENT_CONFIG_FILE: &str = "client.yml";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub proxy_url: String,
    pub storage_dir: PathBuf,
}

impl ClientConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = config_directory()?;
        let default_storage = config_dir.join("storage");
        let default_storage = default_storage.to_str()
            .ok_or_else(|| ConfigError::Message("storage path is not valid utf-8".to_string()))?;

        let mut config = Config::builder();
        if config_dir.join(CLIENT_CONFIG_FILE).exists() {
            config = config.add_source(File::from(config_dir.join(CLIENT_CONFIG_FILE)))
        }

        config = config.add_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
            .set_default("proxy_url", "http://localhost:3000")?
            .set_default("storage_dir", default_storage)?;

        config.build()?.try_deserialize()
    }
}
