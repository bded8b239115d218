//! Weather-forecast source adapter
//!
//! The provider returns a time-ordered list of sub-daily readings. The
//! adapter reduces that list to at most one entry per calendar day for the
//! next 4 distinct days, keeping the first reading of each day. Callers
//! always see a chronologically ordered, truncated sequence.

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::SourceError;
use crate::config::ProvidersConfig;
use crate::models::{Coordinate, ForecastDay};

use super::get_json;

/// Maximum number of daily entries a forecast may carry
pub const MAX_FORECAST_DAYS: usize = 4;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastReading>,
}

/// One sub-daily reading from the provider
#[derive(Debug, Deserialize)]
struct ForecastReading {
    /// Unix timestamp of the reading
    dt: i64,
    main: ReadingMain,
    weather: Vec<ReadingCondition>,
}

#[derive(Debug, Deserialize)]
struct ReadingMain {
    temp: f32,
}

#[derive(Debug, Deserialize)]
struct ReadingCondition {
    description: String,
    icon: String,
}

/// Fetch the daily forecast for a coordinate
#[instrument(skip(client, config), fields(lat = coord.latitude, lon = coord.longitude))]
pub async fn fetch(
    client: &Client,
    config: &ProvidersConfig,
    coord: Coordinate,
) -> std::result::Result<Vec<ForecastDay>, SourceError> {
    let url = request_url(config, coord);
    debug!("Fetching weather forecast");

    let response: ForecastResponse = get_json(client, &url, config.timeout_ms).await?;
    reduce_to_daily(response.list)
}

fn request_url(config: &ProvidersConfig, coord: Coordinate) -> String {
    let mut url = format!(
        "{}/forecast?lat={}&lon={}&units=metric",
        config.weather_base_url, coord.latitude, coord.longitude
    );
    if let Some(key) = &config.api_key {
        url.push_str(&format!("&appid={key}"));
    }
    url
}

/// Reduce sub-daily readings to one `ForecastDay` per calendar day.
///
/// Keeps the first reading of each of the first `MAX_FORECAST_DAYS` distinct
/// days, in chronological order; the result is truncated, never padded.
fn reduce_to_daily(
    mut readings: Vec<ForecastReading>,
) -> std::result::Result<Vec<ForecastDay>, SourceError> {
    readings.sort_by_key(|r| r.dt);

    let mut days = Vec::with_capacity(MAX_FORECAST_DAYS);
    let mut last_date = None;

    for reading in readings {
        let timestamp = DateTime::from_timestamp(reading.dt, 0)
            .ok_or_else(|| SourceError::invalid(format!("invalid timestamp {}", reading.dt)))?;
        let date = timestamp.date_naive();

        if last_date == Some(date) {
            continue;
        }
        last_date = Some(date);

        let condition = reading
            .weather
            .first()
            .ok_or_else(|| SourceError::invalid("empty weather condition list"))?;

        days.push(ForecastDay {
            day_label: timestamp.format("%a").to_string(),
            temperature: reading.main.temp,
            condition_code: condition.icon.clone(),
            condition_text: condition.description.clone(),
        });

        if days.len() == MAX_FORECAST_DAYS {
            break;
        }
    }

    Ok(days)
}
