//! Configuration for the `Routecast` application
//!
//! Everything is sourced from environment variables; there is no config
//! file. Only the weather API key is required, the rest has defaults.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Default base URL of the weather data service
pub const DEFAULT_WEATHER_BASE_URL: &str = "http://dataservice.accuweather.com";

/// Default base URL of the translation endpoint
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translate.googleapis.com";

const DEFAULT_SOURCE_LANG: &str = "ru";
const DEFAULT_TARGET_LANG: &str = "en";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Runtime configuration for API clients
#[derive(Debug, Clone)]
pub struct RoutecastConfig {
    /// Weather API key
    pub api_key: String,
    /// Base URL for the weather data service
    pub weather_base_url: String,
    /// Base URL for the translation endpoint
    pub translate_base_url: String,
    /// Language city names are entered in
    pub source_lang: String,
    /// Language the geocoding endpoint expects
    pub target_lang: String,
    /// Transport timeout in seconds
    pub timeout_seconds: u64,
}

impl RoutecastConfig {
    /// Load configuration from `ROUTECAST_*` environment variables
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("ROUTECAST_API_KEY").context("Missing ROUTECAST_API_KEY env var")?;

        let config = Self {
            api_key,
            weather_base_url: env::var("ROUTECAST_WEATHER_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string()),
            translate_base_url: env::var("ROUTECAST_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_BASE_URL.to_string()),
            source_lang: env::var("ROUTECAST_SOURCE_LANG")
                .unwrap_or_else(|_| DEFAULT_SOURCE_LANG.to_string()),
            target_lang: env::var("ROUTECAST_TARGET_LANG")
                .unwrap_or_else(|_| DEFAULT_TARGET_LANG.to_string()),
            timeout_seconds: env::var("ROUTECAST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Build a configuration with defaults around the given API key
    #[must_use]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            translate_base_url: DEFAULT_TRANSLATE_BASE_URL.to_string(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            bail!("Weather API key cannot be empty");
        }
        if self.api_key.len() > 100 {
            bail!("Weather API key appears to be invalid (too long)");
        }
        for url in [&self.weather_base_url, &self.translate_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("Base URL must be a valid HTTP or HTTPS URL: {url}");
            }
        }
        if self.source_lang.is_empty() || self.target_lang.is_empty() {
            bail!("Translation languages cannot be empty");
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            bail!("Transport timeout must be between 1 and 300 seconds");
        }
        Ok(())
    }

    /// Transport timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
