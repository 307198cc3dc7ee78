//! Forecast horizon, normalized records and route reports

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoutecastError;
use crate::models::location::ResolvedCity;

/// Textual marker used when the daily payload carries no precipitation
/// intensity for a period.
pub const NO_PRECIPITATION_MARKER: &str = "No precipitation";

/// Requested forecast span and granularity
///
/// The set is closed: anything else must be rejected at parse time with
/// [`RoutecastError::UnsupportedHorizon`], never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// Next hour, one forecast period
    Hourly,
    /// One day, one forecast period
    Daily1,
    /// Five days, five forecast periods
    Daily5,
}

impl Horizon {
    /// Map a day count to a daily horizon
    pub fn try_from_days(days: u32) -> Result<Self, RoutecastError> {
        match days {
            1 => Ok(Self::Daily1),
            5 => Ok(Self::Daily5),
            other => Err(RoutecastError::unsupported_horizon(other.to_string())),
        }
    }

    /// Path segment of the horizon-specific forecast endpoint
    #[must_use]
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Hourly => "hourly/1hour",
            Self::Daily1 => "daily/1day",
            Self::Daily5 => "daily/5day",
        }
    }

    /// Whether this horizon uses the daily payload shape
    #[must_use]
    pub fn is_daily(self) -> bool {
        matches!(self, Self::Daily1 | Self::Daily5)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hourly => "next hour",
            Self::Daily1 => "1 day",
            Self::Daily5 => "5 days",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Horizon {
    type Err = RoutecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" | "hour" | "1h" => Ok(Self::Hourly),
            "1" | "1d" | "day" => Ok(Self::Daily1),
            "5" | "5d" | "week" => Ok(Self::Daily5),
            other => Err(RoutecastError::unsupported_horizon(other)),
        }
    }
}

/// One normalized forecast period
///
/// `None` marks a field the upstream payload did not carry; it is distinct
/// from a real zero and stays distinct all the way to the classifier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayConditions {
    /// Start of the forecast period, when the payload carried one
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Wind speed in the unit supplied by the upstream API
    pub wind_speed: Option<f64>,
    /// Precipitation probability in percent
    pub precipitation_probability: Option<f64>,
    /// Textual precipitation intensity (daily payloads only)
    pub precipitation_intensity: Option<String>,
    /// Relative humidity in percent; displayed but never classified
    pub humidity: Option<f64>,
}

impl DayConditions {
    fn format_reading(value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => format!("{v:.1}{unit}"),
            None => "no data".to_string(),
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        Self::format_reading(self.temperature, "°C")
    }

    /// Format wind speed
    #[must_use]
    pub fn format_wind(&self) -> String {
        Self::format_reading(self.wind_speed, "")
    }

    /// Format precipitation probability
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        match (&self.precipitation_probability, &self.precipitation_intensity) {
            (Some(p), _) => format!("{p:.0}%"),
            (None, Some(intensity)) => intensity.clone(),
            (None, None) => "no data".to_string(),
        }
    }

    /// Format relative humidity
    #[must_use]
    pub fn format_humidity(&self) -> String {
        match self.humidity {
            Some(h) => format!("{h:.0}%"),
            None => "no data".to_string(),
        }
    }
}

/// Per-city slice of a route report
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CityReport {
    /// The resolved city
    pub city: ResolvedCity,
    /// Normalized forecast periods, one per hour or day
    pub conditions: Vec<DayConditions>,
    /// True if any period classified as bad weather
    pub bad_weather: bool,
}

impl CityReport {
    /// Human-readable verdict for rendering
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.bad_weather { "Bad" } else { "Good" }
    }
}

/// Result of evaluating a whole route, in user-supplied order
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RouteReport {
    /// One report per city: start, intermediates, end
    pub cities: Vec<CityReport>,
}

impl RouteReport {
    /// Great-circle distance of each leg between consecutive cities, in km
    #[must_use]
    pub fn leg_distances_km(&self) -> Vec<f64> {
        self.cities
            .windows(2)
            .map(|pair| pair[0].city.geo.distance_km(&pair[1].city.geo))
            .collect()
    }

    /// Total route length in kilometers
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.leg_distances_km().iter().sum()
    }

    /// True if every city on the route classified as good weather
    #[must_use]
    pub fn all_clear(&self) -> bool {
        self.cities.iter().all(|c| !c.bad_weather)
    }
}
