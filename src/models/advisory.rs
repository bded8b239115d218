//! Crop advisory models served by the stub provider API

use serde::{Deserialize, Serialize};

/// A crop recommendation with growing conditions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCrop {
    /// Crop name
    pub name: String,
    /// Growing season (Kharif, Rabi, ...)
    pub season: String,
    /// Water requirement description
    pub water_requirement: String,
    /// Short guidance on soil and irrigation
    pub description: String,
    /// Regions where the crop does well
    pub suitable_regions: Vec<String>,
}

/// An active or upcoming weather alert
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    /// Alert kind (e.g. "Heat Wave")
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Severity label (Low, Medium, High)
    pub severity: String,
    /// Date the alert becomes active (ISO 8601)
    pub start_date: String,
    /// What farmers should do about it
    pub description: String,
}

/// Advisory bundle returned by the crop-advisory endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropAdvisory {
    pub recommended_crops: Vec<RecommendedCrop>,
    pub soil_types: Vec<String>,
    pub weather_alerts: Vec<WeatherAlert>,
}
