use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Default base URL of the public SpaceX catalog API.
pub const DEFAULT_SPACEX_API_URL: &str = "https://api.spacexdata.com/v5";

/// Runtime configuration, read from the environment at startup.
///
/// Every variable has a default so a plain `cargo run` works without a
/// `.env` file; invalid values fail startup rather than being ignored.
pub struct Config {
    pub spacex_api_url: String,
    pub user_agent: String,
    /// How long a cached catalog result stays fresh before a new request
    /// triggers a refetch. Zero means every new request refetches (in-flight
    /// requests are still shared).
    pub cache_stale_time: Duration,
    /// How long an unused cache entry survives before the GC task evicts it.
    pub cache_gc_time: Duration,
    /// Whether a failed catalog fetch is retried once before surfacing.
    pub cache_retry: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            spacex_api_url: std::env::var("SPACEX_API_URL")
                .unwrap_or_else(|_| DEFAULT_SPACEX_API_URL.to_string()),
            user_agent: std::env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("starlog/{}", env!("CARGO_PKG_VERSION"))),
            cache_stale_time: Duration::from_secs(env_parse("CACHE_STALE_SECS", 0)?),
            cache_gc_time: Duration::from_secs(env_parse("CACHE_GC_SECS", 900)?),
            cache_retry: env_parse("CACHE_RETRY", false)?,
        })
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
