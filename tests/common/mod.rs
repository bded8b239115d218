//! Shared helpers for provider-simulation tests
#![allow(dead_code)]

use std::time::Duration;

use agridash::AgriDashConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Per-call adapter bound used in tests (ms)
pub const TEST_TIMEOUT_MS: u64 = 250;

/// Delay long enough to trip the per-call bound
pub const PROVIDER_DELAY: Duration = Duration::from_millis(600);

/// How one simulated provider behaves for a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Timeout,
    Invalid,
}

/// Config pointing every provider at the mock server
pub fn test_config(server: &MockServer) -> AgriDashConfig {
    let mut config = AgriDashConfig::default();
    config.providers.weather_base_url = server.uri();
    config.providers.market_base_url = server.uri();
    config.providers.timeout_ms = TEST_TIMEOUT_MS;
    config
}

pub fn current_weather_body() -> serde_json::Value {
    json!({
        "main": {"temp": 26.5, "humidity": 60},
        "weather": [{"description": "scattered clouds", "icon": "03d"}],
        "wind": {"speed": 3.4},
        "name": "Pune"
    })
}

pub fn forecast_body() -> serde_json::Value {
    // 2024-07-01 00:00:00 UTC; three readings per day over three days
    let base: i64 = 1_719_792_000;
    let list: Vec<serde_json::Value> = (0..3)
        .flat_map(|day| {
            [0i64, 6, 12].into_iter().map(move |hour| {
                json!({
                    "dt": base + day * 86_400 + hour * 3600,
                    "main": {"temp": 24.0 + day as f64},
                    "weather": [{"description": "light rain", "icon": "10d"}]
                })
            })
        })
        .collect();
    json!({"list": list})
}

pub fn market_body() -> serde_json::Value {
    json!({
        "crops": [
            {"name": "Rice", "currentPrice": 2500.0, "unit": "kg", "trend": "stable"},
            {"name": "Wheat", "currentPrice": 2000.0, "unit": "kg", "trend": "up"},
            {"name": "Tomato", "currentPrice": 30.0, "unit": "kg", "trend": "down"}
        ]
    })
}

fn response_for(outcome: Outcome, body: serde_json::Value) -> ResponseTemplate {
    match outcome {
        Outcome::Success => ResponseTemplate::new(200).set_body_json(body),
        Outcome::Timeout => ResponseTemplate::new(200)
            .set_body_json(body)
            .set_delay(PROVIDER_DELAY),
        Outcome::Invalid => ResponseTemplate::new(500),
    }
}

/// Mount the three provider endpoints with the given behaviors
pub async fn mount_providers(
    server: &MockServer,
    current: Outcome,
    forecast: Outcome,
    market: Outcome,
) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response_for(current, current_weather_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response_for(forecast, forecast_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/market-prices"))
        .respond_with(response_for(market, market_body()))
        .mount(server)
        .await;
}
