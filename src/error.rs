//! Error types and handling for the `Routecast` library

use thiserror::Error;

/// Main error type for weather lookups
#[derive(Error, Debug)]
pub enum RoutecastError {
    /// Transport failures and non-2xx upstream responses
    #[error("Connectivity error: {message}")]
    Connectivity { message: String },

    /// Geocoding returned an empty result set for the city
    #[error("City not found: '{city}'")]
    NotFound { city: String },

    /// Geocoding match is missing an expected field
    #[error("Malformed location data for '{city}': {detail}")]
    MalformedLocation { city: String, detail: String },

    /// Forecast span outside the supported set
    #[error("Unsupported forecast horizon: {value}")]
    UnsupportedHorizon { value: String },

    /// Forecast period is missing a required field
    #[error("Malformed forecast payload: {detail}")]
    MalformedForecast { detail: String },

    /// Anything not anticipated above
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl RoutecastError {
    /// Create a new connectivity error
    pub fn connectivity<S: Into<String>>(message: S) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a city
    pub fn not_found<S: Into<String>>(city: S) -> Self {
        Self::NotFound { city: city.into() }
    }

    /// Create a new malformed-location error
    pub fn malformed_location<S: Into<String>, D: Into<String>>(city: S, detail: D) -> Self {
        Self::MalformedLocation {
            city: city.into(),
            detail: detail.into(),
        }
    }

    /// Create a new unsupported-horizon error
    pub fn unsupported_horizon<S: Into<String>>(value: S) -> Self {
        Self::UnsupportedHorizon {
            value: value.into(),
        }
    }

    /// Create a new malformed-forecast error
    pub fn malformed_forecast<S: Into<String>>(detail: S) -> Self {
        Self::MalformedForecast {
            detail: detail.into(),
        }
    }

    /// Create a new unexpected error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RoutecastError::Connectivity { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            RoutecastError::NotFound { city } => {
                format!("City '{city}' was not found.")
            }
            RoutecastError::MalformedLocation { city, .. } => {
                format!("Location data for '{city}' is incomplete.")
            }
            RoutecastError::UnsupportedHorizon { value } => {
                format!("Forecast span '{value}' is not supported. Use hourly, 1 or 5 days.")
            }
            RoutecastError::MalformedForecast { .. } => {
                "The weather service returned incomplete forecast data.".to_string()
            }
            RoutecastError::Unexpected { .. } => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for RoutecastError {
    fn from(err: reqwest::Error) -> Self {
        RoutecastError::connectivity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let conn_err = RoutecastError::connectivity("socket closed");
        assert!(matches!(conn_err, RoutecastError::Connectivity { .. }));

        let nf_err = RoutecastError::not_found("Atlantis");
        assert!(matches!(nf_err, RoutecastError::NotFound { .. }));

        let horizon_err = RoutecastError::unsupported_horizon("3");
        assert!(matches!(
            horizon_err,
            RoutecastError::UnsupportedHorizon { .. }
        ));
    }

    #[test]
    fn test_user_messages() {
        let conn_err = RoutecastError::connectivity("test");
        assert!(conn_err.user_message().contains("internet connection"));

        let nf_err = RoutecastError::not_found("Atlantis");
        assert!(nf_err.user_message().contains("Atlantis"));

        let malformed = RoutecastError::malformed_location("Paris", "missing Key");
        assert!(malformed.user_message().contains("Paris"));

        let horizon_err = RoutecastError::unsupported_horizon("3");
        assert!(horizon_err.user_message().contains('3'));
    }

    #[test]
    fn test_display_carries_detail() {
        let err = RoutecastError::malformed_forecast("missing Temperature.Value");
        assert!(err.to_string().contains("missing Temperature.Value"));
    }
}
