//! Data models for route evaluation

pub mod forecast;
pub mod location;

pub use forecast::{CityReport, DayConditions, Horizon, RouteReport};
pub use location::{GeoCoordinate, ResolvedCity};
