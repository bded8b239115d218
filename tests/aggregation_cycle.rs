//! Aggregation cycle behavior against simulated providers

mod common;

use agridash::aggregator::{MARKET_SAMPLE_NOTICE, WEATHER_STALE_NOTICE};
use agridash::{Aggregator, DashboardViewModel};
use rstest::rstest;
use wiremock::MockServer;

use common::{Outcome, market_body, mount_providers, test_config};

fn aggregator_for(server: &MockServer) -> Aggregator {
    Aggregator::new(test_config(server)).expect("aggregator should build")
}

/// Every combination of provider outcomes ends in a terminal, renderable
/// view-model with both slices populated.
#[rstest]
#[tokio::test]
async fn cycle_terminates_for_all_outcome_combinations(
    #[values(Outcome::Success, Outcome::Timeout, Outcome::Invalid)] current: Outcome,
    #[values(Outcome::Success, Outcome::Timeout, Outcome::Invalid)] forecast: Outcome,
    #[values(Outcome::Success, Outcome::Timeout, Outcome::Invalid)] market: Outcome,
) {
    let server = MockServer::start().await;
    mount_providers(&server, current, forecast, market).await;
    let aggregator = aggregator_for(&server);

    let vm = aggregator.run_cycle().await;

    assert!(!vm.is_loading);
    assert!(vm.weather.is_some());
    assert!(vm.market.is_some());

    let fully_successful =
        current == Outcome::Success && forecast == Outcome::Success && market == Outcome::Success;
    assert_eq!(vm.error.is_none(), fully_successful);
}

#[tokio::test]
async fn market_failure_keeps_weather_fresh_and_substitutes_five_crops() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Success, Outcome::Success, Outcome::Invalid).await;
    let aggregator = aggregator_for(&server);

    let vm = aggregator.run_cycle().await;

    // Weather slice is the real provider data, not a placeholder. The
    // geolocation fallback relabels the location with its sentinel.
    let weather = vm.weather.expect("weather slice populated");
    assert_eq!(weather.current.location_label, "New Delhi, IN");
    assert_eq!(weather.current.temperature, 26.5);
    assert_eq!(weather.forecast.len(), 3);

    // Market slice is the fixed placeholder list of exactly 5 crops.
    let market = vm.market.expect("market slice populated");
    assert_eq!(market.len(), 5);
    assert_eq!(vm.error.as_deref(), Some(MARKET_SAMPLE_NOTICE));
}

#[tokio::test]
async fn weather_failure_does_not_block_market() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Timeout, Outcome::Timeout, Outcome::Success).await;
    let aggregator = aggregator_for(&server);

    let vm = aggregator.run_cycle().await;

    let market = vm.market.expect("market slice populated");
    assert_eq!(market.len(), 3);
    assert_eq!(market[0].crop_name, "Rice");

    let weather = vm.weather.expect("weather slice populated");
    assert_eq!(weather.current.location_label, "Sample Location");
    assert!(vm.error.as_deref().unwrap().contains("sample data"));
}

#[tokio::test]
async fn all_sources_failing_still_yields_renderable_view_model() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Invalid, Outcome::Invalid, Outcome::Timeout).await;
    let aggregator = aggregator_for(&server);

    let vm = aggregator.run_cycle().await;

    assert!(!vm.is_loading);
    let weather = vm.weather.expect("placeholder weather");
    assert_eq!(weather.current.location_label, "Sample Location");
    assert_eq!(weather.forecast.len(), 4);
    assert_eq!(vm.market.expect("placeholder market").len(), 5);
    assert!(vm.error.is_some());
}

#[tokio::test]
async fn weather_outage_reuses_last_known_report() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Success, Outcome::Success, Outcome::Success).await;
    let aggregator = aggregator_for(&server);

    let first = aggregator.run_cycle().await;
    let first_weather = first.weather.expect("fresh weather");

    // Weather goes down, market stays up.
    server.reset().await;
    mount_providers(&server, Outcome::Invalid, Outcome::Invalid, Outcome::Success).await;

    let second = aggregator.run_cycle().await;
    let second_weather = second.weather.expect("last-known weather");

    assert_eq!(second_weather, first_weather);
    assert_eq!(second.error.as_deref(), Some(WEATHER_STALE_NOTICE));
    assert_eq!(second.market.expect("fresh market").len(), 3);
}

#[tokio::test]
async fn identical_responses_produce_identical_view_models_modulo_timestamp() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Success, Outcome::Success, Outcome::Success).await;
    let aggregator = aggregator_for(&server);

    let first = aggregator.run_cycle().await;
    let second = aggregator.run_cycle().await;

    assert_equal_modulo_timestamp(&first, &second);
}

#[tokio::test]
async fn subscriber_observes_terminal_view_model() {
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Success, Outcome::Success, Outcome::Success).await;
    let aggregator = aggregator_for(&server);

    let mut rx = aggregator.subscribe();
    assert!(rx.borrow().is_loading);

    aggregator.run_cycle().await;

    let vm = rx.wait_for(|vm| !vm.is_loading).await.unwrap().clone();
    assert!(vm.weather.is_some());
    assert!(vm.market.is_some());
}

fn assert_equal_modulo_timestamp(a: &DashboardViewModel, b: &DashboardViewModel) {
    let wa = a.weather.as_ref().expect("first weather");
    let wb = b.weather.as_ref().expect("second weather");

    assert_eq!(wa.current.temperature, wb.current.temperature);
    assert_eq!(wa.current.humidity, wb.current.humidity);
    assert_eq!(wa.current.wind_speed, wb.current.wind_speed);
    assert_eq!(wa.current.condition_code, wb.current.condition_code);
    assert_eq!(wa.current.condition_text, wb.current.condition_text);
    assert_eq!(wa.current.location_label, wb.current.location_label);
    assert_eq!(wa.forecast, wb.forecast);

    assert_eq!(a.market, b.market);
    assert_eq!(a.error, b.error);
    assert_eq!(a.is_loading, b.is_loading);
}

#[tokio::test]
async fn market_provider_contract_round_trips() {
    // The stub server's market contract decodes into canonical entries.
    let server = MockServer::start().await;
    mount_providers(&server, Outcome::Invalid, Outcome::Invalid, Outcome::Success).await;
    let aggregator = aggregator_for(&server);

    let vm = aggregator.run_cycle().await;
    let market = vm.market.expect("market slice");

    let names: Vec<&str> = market.iter().map(|e| e.crop_name.as_str()).collect();
    let expected: Vec<String> = market_body()["crops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());
}
