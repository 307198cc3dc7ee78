//! Location resolution
//!
//! Turns a free-text city name into the opaque location key and coordinates
//! the forecast endpoints require: translate the name, search the city
//! index, take the first match.

use tracing::debug;

use crate::api::WeatherApiClient;
use crate::error::RoutecastError;
use crate::models::{GeoCoordinate, ResolvedCity};
use crate::translate::Translate;

/// Service for resolving city names
pub struct LocationResolver<'a> {
    api: &'a WeatherApiClient,
    translator: &'a dyn Translate,
}

impl<'a> LocationResolver<'a> {
    /// Create a resolver over an API client and a translator
    pub fn new(api: &'a WeatherApiClient, translator: &'a dyn Translate) -> Self {
        Self { api, translator }
    }

    /// Resolve a city name into a [`ResolvedCity`]
    ///
    /// The first search match is used deterministically; there is no
    /// disambiguation among multiple candidates.
    pub fn resolve(&self, city_name: &str) -> Result<ResolvedCity, RoutecastError> {
        debug!("Resolving city '{}'", city_name);

        let translated = self.translator.translate(city_name)?;
        let results = self.api.search_cities(&translated)?;

        let Some(first) = results.into_iter().next() else {
            return Err(RoutecastError::not_found(city_name));
        };

        let Some(location_key) = first.key else {
            return Err(RoutecastError::malformed_location(
                city_name,
                "first match is missing the Key field",
            ));
        };

        let Some(position) = first.geo_position else {
            return Err(RoutecastError::malformed_location(
                city_name,
                "first match is missing the GeoPosition field",
            ));
        };

        let resolved = ResolvedCity {
            query_name: city_name.to_string(),
            translated_name: translated,
            location_key,
            geo: GeoCoordinate::new(position.latitude, position.longitude),
        };

        debug!(
            "Resolved '{}' to key {} at ({})",
            city_name,
            resolved.location_key,
            resolved.geo.format()
        );
        Ok(resolved)
    }
}
