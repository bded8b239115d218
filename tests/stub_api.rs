//! Stub provider API served over HTTP

use std::net::SocketAddr;

use agridash::api::{self, ApiState};
use agridash::{AgriDashConfig, Aggregator, PriceTrend};
use axum::Router;

async fn serve_api() -> SocketAddr {
    let aggregator = Aggregator::new(AgriDashConfig::default()).unwrap();
    let state = ApiState {
        dashboard: aggregator.subscribe(),
    };
    let app = Router::new().nest("/api", api::router(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn weather_endpoint_returns_fixed_reading() {
    let addr = serve_api().await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/weather/28.6/77.2"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["temperature"], 28.0);
    assert_eq!(body["humidity"], 70);
    assert_eq!(body["weatherType"], "sunny");
}

#[tokio::test]
async fn advisory_endpoint_returns_provider_contract() {
    let addr = serve_api().await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/crop-advisory"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["recommendedCrops"].as_array().unwrap().len(), 3);
    assert_eq!(body["recommendedCrops"][0]["name"], "Rice");
    assert_eq!(body["soilTypes"].as_array().unwrap().len(), 6);
    assert_eq!(body["weatherAlerts"][0]["type"], "Heat Wave");
}

#[tokio::test]
async fn dashboard_endpoint_exposes_current_view_model() {
    let addr = serve_api().await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/dashboard"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // No cycle has run for this aggregator, so the loading placeholder shows.
    assert_eq!(body["is_loading"], true);
    assert!(body["weather"].is_null());
}

#[tokio::test]
async fn market_adapter_consumes_own_stub_endpoint() {
    let addr = serve_api().await;

    let mut config = AgriDashConfig::default();
    config.providers.market_base_url = format!("http://{addr}");
    // No weather provider behind this server; that slice degrades alone.
    config.providers.weather_base_url = format!("http://{addr}/missing");
    config.providers.timeout_ms = 500;
    let aggregator = Aggregator::new(config).unwrap();

    let vm = aggregator.run_cycle().await;

    let market = vm.market.expect("market slice");
    let names: Vec<&str> = market.iter().map(|e| e.crop_name.as_str()).collect();
    assert_eq!(names, vec!["Rice", "Wheat", "Tomato"]);
    assert_eq!(market[1].trend, PriceTrend::Up);
    assert!(market.iter().all(|e| e.best_selling_time.is_none()));
}
