use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

/// Address the HTTP server binds to when `SERVER_ADDRESS` is unset.
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
/// Deadline for submission and cascade-delete transactions when
/// `TRANSACTION_TIMEOUT_SECS` is unset.
pub const DEFAULT_TRANSACTION_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,

    pub server_address: String,
    pub transaction_timeout: Duration,

    /// Single origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_address =
            lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());

        let transaction_timeout = match lookup("TRANSACTION_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    name: "TRANSACTION_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "TRANSACTION_TIMEOUT_SECS".to_string(),
                        reason: "must be at least 1".to_string(),
                    }
                    .into());
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            server_address,
            transaction_timeout,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|value| !value.is_empty()),
        })
    }
}
