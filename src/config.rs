use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub concurrency_limit: usize,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable optional
    /// values fall back to their defaults; a zero concurrency limit is an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "APP_PORT", 3000);
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10);
        let concurrency_limit = parse_or(&lookup, "APP_CONCURRENCY_LIMIT", 100);
        // Zero admits no requests.
        if concurrency_limit == 0 {
            anyhow::bail!("APP_CONCURRENCY_LIMIT must be at least 1");
        }
        let body_limit_bytes = parse_or(&lookup, "APP_BODY_LIMIT_BYTES", 1024 * 1024);
        Ok(Self {
            port,
            database_url,
            host,
            db_max_connections,
            concurrency_limit,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}
