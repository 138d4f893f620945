// config.rs
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::errors::{AppError, Result};

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
pub const DEFAULT_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::configuration(format!(
                "STORE must be 'mongo' or 'memory', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub database_name: String,
    pub collection_name: String,
    pub seed_url: String,
    pub default_per_page: u64,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = match lookup("STORE") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::Mongo,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store == StoreBackend::Mongo && database_url.is_none() {
            return Err(AppError::configuration(
                "DATABASE_URL must be set when STORE=mongo",
            ));
        }

        let default_per_page = match lookup("DEFAULT_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::configuration("DEFAULT_PER_PAGE must be a positive number")
                })?,
            None => DEFAULT_PER_PAGE,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::configuration("PORT must be a number"))?,
            None => 5000,
        };

        Ok(AppConfig {
            store,
            database_url,
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "transactions_db".to_string()),
            collection_name: lookup("TRANSACTIONS_COLLECTION")
                .unwrap_or_else(|| "transactions".to_string()),
            seed_url: lookup("SEED_URL").unwrap_or_else(|| DEFAULT_SEED_URL.to_string()),
            default_per_page,
            port,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid HOST '{}'", self.host)))
    }
}
