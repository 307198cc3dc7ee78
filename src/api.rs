//! Weather API client
//!
//! HTTP client for the AccuWeather-style data service: city search keyed by
//! a free-text query and horizon-specific forecast endpoints keyed by an
//! opaque location key. One blocking GET per call, no retries, no caching;
//! the transport timeout is the only recovery mechanism.

use reqwest::blocking::{Client, Response};
use tracing::{debug, info, warn};

use crate::config::RoutecastConfig;
use crate::error::RoutecastError;
use crate::models::Horizon;

/// Client for the weather data service
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Raw decoded forecast payload, shape depends on the horizon
#[derive(Debug, Clone)]
pub enum ForecastPayload {
    /// Array of hourly periods (single entry for the 1-hour endpoint)
    Hourly(Vec<accuweather::HourlyPeriod>),
    /// Daily response with one period per requested day
    Daily(accuweather::DailyResponse),
}

impl ForecastPayload {
    /// Number of forecast periods in the payload
    #[must_use]
    pub fn period_count(&self) -> usize {
        match self {
            Self::Hourly(periods) => periods.len(),
            Self::Daily(response) => response.daily_forecasts.len(),
        }
    }
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &RoutecastConfig) -> Result<Self, RoutecastError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("Routecast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.weather_base_url.clone(),
        })
    }

    /// Search the city index for a (translated) free-text name
    ///
    /// Returns the raw result list in endpoint order; the resolver applies
    /// the first-match policy on top of it.
    pub fn search_cities(
        &self,
        query: &str,
    ) -> Result<Vec<accuweather::CitySearchResult>, RoutecastError> {
        info!("Searching city index for '{}'", query);

        let url = format!(
            "{}/locations/v1/cities/search?apikey={}&q={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );

        let response = self.get(&url, "locations/v1/cities/search")?;
        let results: Vec<accuweather::CitySearchResult> = response.json().map_err(|e| {
            RoutecastError::connectivity(format!("invalid city search response: {e}"))
        })?;

        if results.is_empty() {
            warn!("City search returned no results for '{}'", query);
        } else {
            debug!("City search returned {} results for '{}'", results.len(), query);
        }

        Ok(results)
    }

    /// Fetch the raw forecast for a location key over the given horizon
    ///
    /// The payload is returned undecorated; normalization happens later.
    pub fn forecast(
        &self,
        location_key: &str,
        horizon: Horizon,
    ) -> Result<ForecastPayload, RoutecastError> {
        let path = horizon.endpoint_path();
        info!("Fetching {} forecast for location key {}", horizon, location_key);

        let url = format!(
            "{}/forecasts/v1/{}/{}?apikey={}&metric=true",
            self.base_url, path, location_key, self.api_key
        );

        let response = self.get(&url, path)?;

        let payload = if horizon.is_daily() {
            let decoded: accuweather::DailyResponse = response.json().map_err(|e| {
                RoutecastError::connectivity(format!("invalid daily forecast response: {e}"))
            })?;
            ForecastPayload::Daily(decoded)
        } else {
            let decoded: Vec<accuweather::HourlyPeriod> = response.json().map_err(|e| {
                RoutecastError::connectivity(format!("invalid hourly forecast response: {e}"))
            })?;
            ForecastPayload::Hourly(decoded)
        };

        debug!(
            "Forecast for {} carries {} periods",
            location_key,
            payload.period_count()
        );
        Ok(payload)
    }

    /// Issue one GET and check the status; the URL is logged without its key
    fn get(&self, url: &str, endpoint: &str) -> Result<Response, RoutecastError> {
        debug!("GET {}/{}", self.base_url, endpoint);

        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            warn!("Weather service returned HTTP {} for {}", status, endpoint);
            return Err(RoutecastError::connectivity(format!(
                "weather service returned HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown error")
            )));
        }

        Ok(response)
    }
}

/// Upstream response structures
pub mod accuweather {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Serialize};

    /// A measured value with its unit
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct MetricValue {
        #[serde(rename = "Value")]
        pub value: Option<f64>,
        #[serde(rename = "Unit")]
        pub unit: Option<String>,
    }

    /// Wind block; speed is nested another level down
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct Wind {
        #[serde(rename = "Speed")]
        pub speed: Option<MetricValue>,
    }

    /// Coordinates of a city search match
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct GeoPosition {
        #[serde(rename = "Latitude")]
        pub latitude: f64,
        #[serde(rename = "Longitude")]
        pub longitude: f64,
    }

    /// One element of the city search response array
    ///
    /// `Key` and `GeoPosition` are optional here so that an incomplete match
    /// surfaces as a malformed-location error instead of a decode failure.
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct CitySearchResult {
        #[serde(rename = "Key")]
        pub key: Option<String>,
        #[serde(rename = "LocalizedName")]
        pub localized_name: Option<String>,
        #[serde(rename = "EnglishName")]
        pub english_name: Option<String>,
        #[serde(rename = "GeoPosition")]
        pub geo_position: Option<GeoPosition>,
    }

    /// One period of the hourly forecast array
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct HourlyPeriod {
        #[serde(rename = "DateTime")]
        pub date_time: Option<DateTime<FixedOffset>>,
        #[serde(rename = "IconPhrase")]
        pub icon_phrase: Option<String>,
        #[serde(rename = "Temperature")]
        pub temperature: Option<MetricValue>,
        #[serde(rename = "Wind")]
        pub wind: Option<Wind>,
        #[serde(rename = "PrecipitationProbability")]
        pub precipitation_probability: Option<f64>,
        #[serde(rename = "RelativeHumidity")]
        pub relative_humidity: Option<f64>,
    }

    /// Daily forecast response object
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct DailyResponse {
        #[serde(rename = "DailyForecasts", default)]
        pub daily_forecasts: Vec<DailyPeriod>,
    }

    /// One day of a daily forecast
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct DailyPeriod {
        #[serde(rename = "Date")]
        pub date: Option<DateTime<FixedOffset>>,
        #[serde(rename = "Temperature")]
        pub temperature: Option<TemperatureRange>,
        #[serde(rename = "Day")]
        pub day: Option<DayPart>,
    }

    /// Min/max temperature span of a day
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct TemperatureRange {
        #[serde(rename = "Minimum")]
        pub minimum: Option<MetricValue>,
        #[serde(rename = "Maximum")]
        pub maximum: Option<MetricValue>,
    }

    /// Daytime block of a daily period
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct DayPart {
        #[serde(rename = "IconPhrase")]
        pub icon_phrase: Option<String>,
        #[serde(rename = "Wind")]
        pub wind: Option<Wind>,
        #[serde(rename = "PrecipitationProbability")]
        pub precipitation_probability: Option<f64>,
        #[serde(rename = "PrecipitationIntensity")]
        pub precipitation_intensity: Option<String>,
        #[serde(rename = "RelativeHumidity")]
        pub relative_humidity: Option<HumidityRange>,
    }

    /// Humidity span of a daytime block
    #[derive(Debug, Serialize, Deserialize, Clone)]
    pub struct HumidityRange {
        #[serde(rename = "Minimum")]
        pub minimum: Option<f64>,
        #[serde(rename = "Maximum")]
        pub maximum: Option<f64>,
        #[serde(rename = "Average")]
        pub average: Option<f64>,
    }
}
