//! Route aggregation
//!
//! Walks the user-supplied city sequence strictly in order, resolving and
//! fetching one city at a time. The first failure aborts the whole route
//! and is attributed to the city it happened on; no partial results.

use thiserror::Error;
use tracing::info;

use crate::api::WeatherApiClient;
use crate::classify::WeatherClassifier;
use crate::config::RoutecastConfig;
use crate::error::RoutecastError;
use crate::location_resolver::LocationResolver;
use crate::models::{CityReport, Horizon, RouteReport};
use crate::normalize::normalize;
use crate::translate::{GoogleTranslator, Translate};

/// Error evaluating a route
#[derive(Error, Debug)]
pub enum RouteError {
    /// The route needs at least a start and an end city
    #[error("A route needs at least a start and an end city")]
    TooFewCities,

    /// A single city failed and took the route down with it
    #[error("{city}: {source}")]
    City {
        city: String,
        #[source]
        source: RoutecastError,
    },
}

impl RouteError {
    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RouteError::TooFewCities => {
                "Enter both a start and an end city.".to_string()
            }
            RouteError::City { city, source } => {
                format!("Error for {}: {}", city, source.user_message())
            }
        }
    }
}

/// Evaluates the weather along an ordered list of cities
pub struct RouteEvaluator {
    api: WeatherApiClient,
    translator: Box<dyn Translate>,
    classifier: WeatherClassifier,
}

impl RouteEvaluator {
    /// Create an evaluator with the default translation service
    pub fn new(config: &RoutecastConfig) -> Result<Self, RoutecastError> {
        let translator = GoogleTranslator::new(config)?;
        Self::with_translator(config, Box::new(translator))
    }

    /// Create an evaluator with a custom translator
    pub fn with_translator(
        config: &RoutecastConfig,
        translator: Box<dyn Translate>,
    ) -> Result<Self, RoutecastError> {
        Ok(Self {
            api: WeatherApiClient::new(config)?,
            translator,
            classifier: WeatherClassifier::default(),
        })
    }

    /// Evaluate a route: start, optional intermediates, end
    ///
    /// Cities are processed sequentially in the given order. Each city costs
    /// one translation, one geocode and one forecast call; the first error
    /// aborts the evaluation.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        cities: &[S],
        horizon: Horizon,
    ) -> Result<RouteReport, RouteError> {
        if cities.len() < 2 {
            return Err(RouteError::TooFewCities);
        }

        info!("Evaluating a {}-city route over {}", cities.len(), horizon);

        let resolver = LocationResolver::new(&self.api, self.translator.as_ref());
        let mut reports = Vec::with_capacity(cities.len());

        for city_name in cities {
            let city_name = city_name.as_ref();
            let report = self
                .evaluate_city(&resolver, city_name, horizon)
                .map_err(|source| RouteError::City {
                    city: city_name.to_string(),
                    source,
                })?;
            reports.push(report);
        }

        Ok(RouteReport { cities: reports })
    }

    fn evaluate_city(
        &self,
        resolver: &LocationResolver<'_>,
        city_name: &str,
        horizon: Horizon,
    ) -> Result<CityReport, RoutecastError> {
        let city = resolver.resolve(city_name)?;
        let payload = self.api.forecast(&city.location_key, horizon)?;
        let conditions = normalize(&payload)?;

        let bad_weather = conditions.iter().any(|c| self.classifier.is_bad(c));
        info!(
            "{} ({}): {} periods, verdict {}",
            city.query_name,
            city.location_key,
            conditions.len(),
            if bad_weather { "bad" } else { "good" }
        );

        Ok(CityReport {
            city,
            conditions,
            bad_weather,
        })
    }
}
