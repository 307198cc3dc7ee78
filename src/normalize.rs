//! Forecast normalization
//!
//! Flattens the heterogeneous upstream payloads into [`DayConditions`]
//! records. Temperature is the one field every period must carry; every
//! other field may be absent in any combination and becomes `None` without
//! raising. The nested optional chains (`Wind.Speed.Value`,
//! `Day.RelativeHumidity.Average`) are walked defensively.

use crate::api::{ForecastPayload, accuweather};
use crate::error::RoutecastError;
use crate::models::DayConditions;
use crate::models::forecast::NO_PRECIPITATION_MARKER;

/// Normalize a raw forecast payload into one record per period
pub fn normalize(payload: &ForecastPayload) -> Result<Vec<DayConditions>, RoutecastError> {
    match payload {
        ForecastPayload::Hourly(periods) => periods.iter().map(normalize_hourly).collect(),
        ForecastPayload::Daily(response) => response
            .daily_forecasts
            .iter()
            .map(normalize_daily)
            .collect(),
    }
}

fn normalize_hourly(
    period: &accuweather::HourlyPeriod,
) -> Result<DayConditions, RoutecastError> {
    let temperature = period
        .temperature
        .as_ref()
        .and_then(|t| t.value)
        .ok_or_else(|| {
            RoutecastError::malformed_forecast("hourly period is missing Temperature.Value")
        })?;

    Ok(DayConditions {
        timestamp: period.date_time,
        temperature: Some(temperature),
        wind_speed: period
            .wind
            .as_ref()
            .and_then(|w| w.speed.as_ref())
            .and_then(|s| s.value),
        precipitation_probability: period.precipitation_probability,
        precipitation_intensity: None,
        humidity: period.relative_humidity,
    })
}

fn normalize_daily(period: &accuweather::DailyPeriod) -> Result<DayConditions, RoutecastError> {
    let range = period.temperature.as_ref().ok_or_else(|| {
        RoutecastError::malformed_forecast("daily period is missing the Temperature block")
    })?;
    let minimum = range.minimum.as_ref().and_then(|m| m.value).ok_or_else(|| {
        RoutecastError::malformed_forecast("daily period is missing Temperature.Minimum.Value")
    })?;
    let maximum = range.maximum.as_ref().and_then(|m| m.value).ok_or_else(|| {
        RoutecastError::malformed_forecast("daily period is missing Temperature.Maximum.Value")
    })?;

    let day = period.day.as_ref();

    Ok(DayConditions {
        timestamp: period.date,
        // A single representative reading per day: the midpoint of the span
        temperature: Some((minimum + maximum) / 2.0),
        wind_speed: day
            .and_then(|d| d.wind.as_ref())
            .and_then(|w| w.speed.as_ref())
            .and_then(|s| s.value),
        precipitation_probability: day.and_then(|d| d.precipitation_probability),
        precipitation_intensity: Some(
            day.and_then(|d| d.precipitation_intensity.clone())
                .unwrap_or_else(|| NO_PRECIPITATION_MARKER.to_string()),
        ),
        humidity: day
            .and_then(|d| d.relative_humidity.as_ref())
            .and_then(|h| h.average),
    })
}
