use std::env;
use std::time::Duration;

use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::core::error::{AppError, Result};

/// Database connection settings.
///
/// Pool bounds are fixed so resource usage stays bounded under load: a
/// maximum of concurrently open connections, a minimum kept idle, and a
/// maximum per-connection lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            user: env::var("DB_USER").unwrap_or_else(|_| "user".to_string()),
            pass: env::var("DB_PASS")
                .map_err(|_| AppError::Configuration("DB_PASS not set".to_string()))?,
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("DB_PORT").unwrap_or_else(|_| "3306".to_string()),
            name: env::var("DB_NAME").unwrap_or_else(|_| "invopay".to_string()),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "90".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DB_MAX_CONNECTIONS".to_string())
                })?,
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DB_MIN_CONNECTIONS".to_string())
                })?,
            max_lifetime_secs: env::var("DB_MAX_LIFETIME_SECS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DB_MAX_LIFETIME_SECS".to_string())
                })?,
        })
    }

    /// Connection string for the MySQL database
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.pass, self.host, self.port, self.name
        )
    }

    /// Create the MySQL connection pool. Called once at startup, before
    /// the server begins accepting requests.
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .acquire_timeout(Duration::from_secs(30))
            .connect(&self.url())
            .await
            .map_err(AppError::Database)
    }
}
