//! `Routecast` - Weather-aware travel route checking
//!
//! This library resolves free-text city names through translation and
//! geocoding, fetches hourly or multi-day forecasts, normalizes the
//! partially-optional payloads and classifies each city on a route as
//! good or bad weather.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod normalize;
pub mod route;
pub mod translate;

// Re-export core types for public API
pub use api::{ForecastPayload, WeatherApiClient};
pub use classify::{MissingDataPolicy, WeatherClassifier};
pub use config::RoutecastConfig;
pub use error::RoutecastError;
pub use location_resolver::LocationResolver;
pub use models::{CityReport, DayConditions, GeoCoordinate, Horizon, ResolvedCity, RouteReport};
pub use normalize::normalize;
pub use route::{RouteError, RouteEvaluator};
pub use translate::{GoogleTranslator, IdentityTranslator, Translate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RoutecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
