use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: data/sales_profit.db)
    pub database_path: String,

    /// Shared secret for HS256 access tokens (required)
    pub jwt_secret: String,

    /// Access token lifetime in minutes (default: 60)
    pub access_token_expire_mins: u64,

    /// Session idle timeout in seconds (default: 1800)
    pub session_idle_timeout_secs: u64,

    /// Name of the session cookie (default: sp_session)
    pub session_cookie_name: String,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/sales_profit.db".to_string()),

            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_default(),

            access_token_expire_mins: std::env::var("ACCESS_TOKEN_EXPIRE_MINS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),

            session_idle_timeout_secs: std::env::var("SESSION_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30 * 60),

            session_cookie_name: std::env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "sp_session".to_string()),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> ServerErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ServerError::MissingJwtSecret);
        }

        Ok(())
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    pub fn access_token_lifetime(&self) -> Duration {
        Duration::from_secs(self.access_token_expire_mins * 60)
    }
}
