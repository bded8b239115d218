//! Current-weather source adapter
//!
//! Fetches current conditions keyed by coordinate and remaps the provider's
//! raw shape into a `WeatherSnapshot`. Unit and naming differences between
//! the provider and the canonical model are resolved here, not by callers.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::SourceError;
use crate::config::ProvidersConfig;
use crate::models::{Coordinate, WeatherSnapshot};

use super::get_json;

/// Raw current-weather response; absence of any required field fails the
/// whole snapshot
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f32,
}

/// Fetch current weather for a coordinate
#[instrument(skip(client, config), fields(lat = coord.latitude, lon = coord.longitude))]
pub async fn fetch(
    client: &Client,
    config: &ProvidersConfig,
    coord: Coordinate,
) -> std::result::Result<WeatherSnapshot, SourceError> {
    let url = request_url(config, coord);
    debug!("Fetching current weather");

    let response: CurrentResponse = get_json(client, &url, config.timeout_ms).await?;
    snapshot_from_response(response)
}

fn request_url(config: &ProvidersConfig, coord: Coordinate) -> String {
    let mut url = format!(
        "{}/weather?lat={}&lon={}&units=metric",
        config.weather_base_url, coord.latitude, coord.longitude
    );
    if let Some(key) = &config.api_key {
        url.push_str(&format!("&appid={key}"));
    }
    url
}

fn snapshot_from_response(
    response: CurrentResponse,
) -> std::result::Result<WeatherSnapshot, SourceError> {
    let condition = response
        .weather
        .first()
        .ok_or_else(|| SourceError::invalid("empty weather condition list"))?;

    Ok(WeatherSnapshot {
        temperature: response.main.temp,
        humidity: response.main.humidity,
        wind_speed: response.wind.speed,
        condition_code: condition.icon.clone(),
        condition_text: condition.description.clone(),
        location_label: response.name,
        observed_at: Utc::now(),
    })
}
