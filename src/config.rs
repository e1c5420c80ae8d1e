use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Unset means the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub default_page: u32,
    pub default_items_per_page: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("CC_BIND_ADDR", "127.0.0.1:8080")
            .parse::<SocketAddr>()
            .context("CC_BIND_ADDR must be a valid host:port")?;

        let database_url = std::env::var("CC_DATABASE_URL").ok();

        let db_max_connections = env_string("CC_DB_MAX_CONNECTIONS", "10")
            .parse::<u32>()
            .context("CC_DB_MAX_CONNECTIONS must be u32")?;

        let default_page = env_string("CC_DEFAULT_PAGE", "0")
            .parse::<u32>()
            .context("CC_DEFAULT_PAGE must be u32")?;

        let default_items_per_page = env_string("CC_DEFAULT_ITEMS_PER_PAGE", "10")
            .parse::<u32>()
            .context("CC_DEFAULT_ITEMS_PER_PAGE must be u32")?;

        Ok(Self {
            bind_addr,
            database_url,
            db_max_connections,
            default_page,
            default_items_per_page,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
