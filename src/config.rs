use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::NotefulError;

/// Path of the optional TOML file merged over the defaults.
pub const CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `NOTEFUL_BASIC__DATABASE_URL`.
pub const ENV_PREFIX: &str = "NOTEFUL_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Prefix every resource route is nested under. Empty mounts at `/`.
    pub api_root: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:noteful.db".to_string(),
            loglevel: "info".to_string(),
            api_root: String::new(),
            body_limit: 1024 * 1024,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `NOTEFUL_*` env vars.
    pub fn load() -> Result<Self, NotefulError> {
        Self::figment().extract().map_err(Into::into)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `api_root` normalized to either "" or "/segment" without a trailing slash.
    pub fn api_root(&self) -> String {
        let trimmed = self.basic.api_root.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}
