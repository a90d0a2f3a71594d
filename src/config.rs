use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub photo_store_url: String,
    pub upload_timeout: Duration,
    pub feed_limit: i64,
}

impl Config {
    /// Read configuration from the environment. Only DATABASE_URL is
    /// required; everything else has a local-dev default.
    pub fn from_env() -> Result<Self, env::VarError> {
        let database_url = env::var("DATABASE_URL")?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let photo_store_url = env::var("PHOTO_STORE_URL")
            .unwrap_or_else(|_| "http://localhost:8004/photos".to_string());
        let upload_timeout = Duration::from_secs(
            env::var("UPLOAD_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        );

        let feed_limit: i64 = env::var("FEED_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Ok(Config {
            database_url,
            host,
            port,
            photo_store_url,
            upload_timeout,
            feed_limit,
        })
    }
}
