use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::display::translation::DEFAULT_LOCALE;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub instance_id: String,
}

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// JSON translation table; an empty table is served when unset
    pub table_path: Option<PathBuf>,
    /// Locale whose labels and templates are rendered
    pub locale: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            table_path: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                instance_id: env::var("INSTANCE_ID")
                    .or_else(|_| env::var("HOSTNAME"))
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
            translation: TranslationConfig {
                table_path: env::var("TRANSLATION_TABLE_PATH")
                    .ok()
                    .filter(|p| !p.trim().is_empty())
                    .map(PathBuf::from),
                locale: env::var("TRANSLATION_LOCALE")
                    .ok()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
