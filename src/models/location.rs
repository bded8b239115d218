//! Coordinate model for geographic positions

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check whether both components are within valid geographic ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Format coordinate as a "lat, lon" string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Outcome of geolocation: a coordinate plus provenance.
///
/// The aggregation cycle treats the coordinate as immutable once obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Coordinate to key provider requests by
    pub coordinate: Coordinate,
    /// Display label; set only when the coordinate is the fallback
    pub label: Option<String>,
    /// True when this is the fixed fallback, not a measurement
    pub is_fallback: bool,
}

impl ResolvedLocation {
    /// A location obtained from the host environment
    #[must_use]
    pub fn measured(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            label: None,
            is_fallback: false,
        }
    }

    /// The fixed fallback location with its sentinel label
    #[must_use]
    pub fn fallback(coordinate: Coordinate, label: &str) -> Self {
        Self {
            coordinate,
            label: Some(label.to_string()),
            is_fallback: true,
        }
    }
}
