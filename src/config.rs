use std::env;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load `DATABASE_URL`, `ADDRESS` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT `{value}`, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
        }
    }
}
