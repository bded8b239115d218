//! Weather snapshot and forecast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather conditions at one location, normalized to canonical units
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f32,
    /// Provider condition code (e.g. "01d")
    pub condition_code: String,
    /// Human-readable condition description
    pub condition_text: String,
    /// Display name of the observed location
    pub location_label: String,
    /// When this snapshot was taken
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} m/s", self.wind_speed)
    }
}

/// One day of forecast, reduced from the provider's sub-daily readings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// Short weekday label (e.g. "Mon")
    pub day_label: String,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Provider condition code
    pub condition_code: String,
    /// Human-readable condition description
    pub condition_text: String,
}

/// Current conditions plus the bounded daily forecast for one location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    /// Current conditions
    pub current: WeatherSnapshot,
    /// At most 4 daily entries, chronologically ordered, never padded
    pub forecast: Vec<ForecastDay>,
}
