use crate::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "na1";
pub const DEFAULT_DATA_VERSION: &str = "10.1.1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub region: String,
    pub data_version: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY").filter(|key| !key.trim().is_empty());
        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let data_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DATA_VERSION.to_string());

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("HTTP_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_key,
            region,
            data_version,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Only the live gameplay API needs a key; the static CDN is public.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
        })
    }
}
