//! HTTP API: stub provider endpoints plus the aggregated dashboard
//!
//! The weather, market-price and crop-advisory endpoints implement the fixed
//! data-provider contract the frontend and the market source adapter consume;
//! they return representative constants. The dashboard endpoint exposes the
//! aggregator's current view-model.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::{CropAdvisory, DashboardViewModel, RecommendedCrop, WeatherAlert};

/// Shared state for the API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Live view of the published dashboard view-model
    pub dashboard: watch::Receiver<DashboardViewModel>,
}

/// Stub weather reading returned by the weather endpoint
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubWeather {
    pub temperature: f32,
    pub humidity: u8,
    pub precipitation: f32,
    pub weather_type: String,
}

/// One crop row in the market-price provider contract
#[derive(Serialize, Deserialize)]
pub struct StubCrop {
    pub name: String,
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    pub unit: String,
    pub trend: String,
}

/// Market-price provider response shape
#[derive(Serialize, Deserialize)]
pub struct StubMarketPrices {
    pub crops: Vec<StubCrop>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/weather/{latitude}/{longitude}", get(get_weather))
        .route("/market-prices", get(get_market_prices))
        .route("/crop-advisory", get(get_crop_advisory))
        .route("/dashboard", get(get_dashboard))
        .with_state(state)
}

async fn get_weather(Path((_latitude, _longitude)): Path<(f64, f64)>) -> Json<StubWeather> {
    Json(StubWeather {
        temperature: 28.0,
        humidity: 70,
        precipitation: 0.1,
        weather_type: "sunny".to_string(),
    })
}

async fn get_market_prices() -> Json<StubMarketPrices> {
    let crops = [
        ("Rice", 2500.0, "stable"),
        ("Wheat", 2000.0, "up"),
        ("Tomato", 30.0, "down"),
    ];

    Json(StubMarketPrices {
        crops: crops
            .iter()
            .map(|(name, price, trend)| StubCrop {
                name: (*name).to_string(),
                current_price: *price,
                unit: "kg".to_string(),
                trend: (*trend).to_string(),
            })
            .collect(),
        last_updated: Utc::now().to_rfc3339(),
    })
}

async fn get_crop_advisory() -> Json<CropAdvisory> {
    Json(advisory_data())
}

async fn get_dashboard(State(state): State<ApiState>) -> Json<DashboardViewModel> {
    Json(state.dashboard.borrow().clone())
}

/// Representative advisory data served by the stub endpoint
fn advisory_data() -> CropAdvisory {
    let today = Utc::now().date_naive();

    CropAdvisory {
        recommended_crops: vec![
            RecommendedCrop {
                name: "Rice".to_string(),
                season: "Kharif".to_string(),
                water_requirement: "High (1500-2500 mm)".to_string(),
                description: "Ideal for alluvial soil with good water retention.".to_string(),
                suitable_regions: vec![
                    "Punjab".to_string(),
                    "Haryana".to_string(),
                    "West Bengal".to_string(),
                    "Andhra Pradesh".to_string(),
                ],
            },
            RecommendedCrop {
                name: "Wheat".to_string(),
                season: "Rabi".to_string(),
                water_requirement: "Medium (400-600 mm)".to_string(),
                description: "Thrives in well-drained loamy soil with moderate irrigation."
                    .to_string(),
                suitable_regions: vec![
                    "Punjab".to_string(),
                    "Haryana".to_string(),
                    "Uttar Pradesh".to_string(),
                    "Madhya Pradesh".to_string(),
                ],
            },
            RecommendedCrop {
                name: "Maize".to_string(),
                season: "Kharif".to_string(),
                water_requirement: "Medium (500-800 mm)".to_string(),
                description: "Grows well in well-drained loamy to sandy loam soil.".to_string(),
                suitable_regions: vec![
                    "Karnataka".to_string(),
                    "Andhra Pradesh".to_string(),
                    "Bihar".to_string(),
                    "Uttar Pradesh".to_string(),
                ],
            },
        ],
        soil_types: vec![
            "Alluvial".to_string(),
            "Black".to_string(),
            "Red".to_string(),
            "Laterite".to_string(),
            "Mountain".to_string(),
            "Desert".to_string(),
        ],
        weather_alerts: vec![
            WeatherAlert {
                alert_type: "Heat Wave".to_string(),
                severity: "High".to_string(),
                start_date: (today + chrono::Duration::days(1)).to_string(),
                description: "Expected temperature rise above 40°C. Ensure adequate irrigation."
                    .to_string(),
            },
            WeatherAlert {
                alert_type: "Heavy Rainfall".to_string(),
                severity: "Medium".to_string(),
                start_date: (today + chrono::Duration::days(3)).to_string(),
                description: "Heavy rainfall expected. Ensure proper drainage in fields."
                    .to_string(),
            },
        ],
    }
}
