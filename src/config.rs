use crate::constants::{FORECAST_API_URL, FORECAST_URL_ENV, GEOCODING_API_URL, GEOCODING_URL_ENV};

/// Upstream endpoints used by the weather pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_API_URL.to_string(),
            forecast_url: FORECAST_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads endpoint overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; blank values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            geocoding_url: resolve(GEOCODING_URL_ENV, GEOCODING_API_URL),
            forecast_url: resolve(FORECAST_URL_ENV, FORECAST_API_URL),
        }
    }
}
