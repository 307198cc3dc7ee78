//! Bad-weather classification
//!
//! A pure, total verdict over a normalized record against fixed thresholds.
//! Wind speed is compared in whatever unit the upstream API supplied; no
//! conversion is performed.

use crate::models::DayConditions;

/// Lower temperature bound in degrees Celsius
pub const MIN_TEMPERATURE_C: f64 = 0.0;
/// Upper temperature bound in degrees Celsius
pub const MAX_TEMPERATURE_C: f64 = 35.0;
/// Wind speed threshold, upstream unit
pub const MAX_WIND_SPEED: f64 = 50.0;
/// Precipitation probability threshold in percent
pub const MAX_PRECIPITATION_PROBABILITY: f64 = 70.0;

/// How a missing reading counts toward the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDataPolicy {
    /// A missing reading is conservatively treated as bad weather
    #[default]
    TreatAsBad,
    /// A missing reading is ignored and only present readings are judged
    TreatAsGood,
}

/// Threshold classifier for normalized forecast records
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherClassifier {
    /// Policy for records with unavailable readings
    pub missing_data: MissingDataPolicy,
}

impl WeatherClassifier {
    /// Create a classifier with the given missing-data policy
    #[must_use]
    pub fn new(missing_data: MissingDataPolicy) -> Self {
        Self { missing_data }
    }

    /// Verdict for a single forecast period
    ///
    /// Humidity is part of the record but does not affect the verdict.
    #[must_use]
    pub fn is_bad(&self, conditions: &DayConditions) -> bool {
        let readings = [
            conditions.temperature,
            conditions.wind_speed,
            conditions.precipitation_probability,
        ];

        if self.missing_data == MissingDataPolicy::TreatAsBad
            && readings.iter().any(Option::is_none)
        {
            return true;
        }

        if let Some(temperature) = conditions.temperature {
            if temperature < MIN_TEMPERATURE_C || temperature > MAX_TEMPERATURE_C {
                return true;
            }
        }
        if let Some(wind_speed) = conditions.wind_speed {
            if wind_speed > MAX_WIND_SPEED {
                return true;
            }
        }
        if let Some(probability) = conditions.precipitation_probability {
            if probability > MAX_PRECIPITATION_PROBABILITY {
                return true;
            }
        }

        false
    }
}
