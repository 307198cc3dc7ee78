//! Location models for resolved cities

use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        let from = haversine::Location {
            latitude: self.latitude,
            longitude: self.longitude,
        };
        let to = haversine::Location {
            latitude: other.latitude,
            longitude: other.longitude,
        };
        haversine::distance(from, to, haversine::Units::Kilometers)
    }

    /// Format as a "lat, lon" string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A city resolved against the geocoding endpoint
///
/// Request-scoped: built per route evaluation and discarded afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedCity {
    /// City name exactly as the user entered it
    pub query_name: String,
    /// Name after translation to the geocoding endpoint's language
    pub translated_name: String,
    /// Opaque identifier required by the forecast endpoint
    pub location_key: String,
    /// Coordinates of the first geocoding match
    pub geo: GeoCoordinate,
}
