//! Dashboard aggregation
//!
//! Orchestrates the geolocation resolver and the three source adapters,
//! merges their possibly partial results into one view-model and publishes
//! it wholesale. Each source degrades independently: the dashboard never
//! goes blank because one upstream integration is down, and a cycle always
//! ends in a terminal, renderable view-model.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::{Mutex, watch};
use tracing::{info, instrument, warn};

use crate::config::AgriDashConfig;
use crate::geolocation::GeolocationResolver;
use crate::models::{
    DashboardViewModel, ForecastDay, MarketEntry, PriceTrend, WeatherReport, WeatherSnapshot,
};
use crate::sources;

/// Notice shown when the weather slice fell back to sample data
pub const WEATHER_SAMPLE_NOTICE: &str = "Weather service unavailable. Showing sample data.";
/// Notice shown when the weather slice reuses the last known report
pub const WEATHER_STALE_NOTICE: &str =
    "Weather service unavailable. Showing last known conditions.";
/// Notice shown when the market slice fell back to sample data
pub const MARKET_SAMPLE_NOTICE: &str = "Market service unavailable. Showing sample data.";

/// Gathers data from the unreliable upstream sources and owns the published
/// view-model. The aggregator is the sole writer; every publish replaces the
/// whole view-model atomically.
pub struct Aggregator {
    client: Client,
    config: AgriDashConfig,
    resolver: GeolocationResolver,
    /// Last successfully fetched weather report, kept for the session
    last_weather: Mutex<Option<WeatherReport>>,
    publisher: watch::Sender<DashboardViewModel>,
}

impl Aggregator {
    /// Create an aggregator from configuration
    pub fn new(config: AgriDashConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.providers.timeout_ms))
            .user_agent("AgriDash/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        let resolver = GeolocationResolver::from_config(&config.geolocation);
        let (publisher, _) = watch::channel(DashboardViewModel::loading());

        Ok(Self {
            client,
            config,
            resolver,
            last_weather: Mutex::new(None),
            publisher,
        })
    }

    /// Subscribe to view-model updates.
    ///
    /// The receiver immediately holds the loading placeholder and then sees
    /// one fresh view-model per completed cycle. This is the only interface
    /// the presentation layer consumes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardViewModel> {
        self.publisher.subscribe()
    }

    /// Run one aggregation cycle and publish the resulting view-model.
    ///
    /// The cycle completes even if every adapter fails; the returned
    /// view-model is always terminal and renderable.
    #[instrument(skip(self))]
    pub async fn run_cycle(&self) -> DashboardViewModel {
        info!("Starting aggregation cycle");
        self.publisher.send_replace(DashboardViewModel::loading());

        let location = self.resolver.resolve().await;
        let coord = location.coordinate;

        // Independent fan-out: a failure in any one source must not cancel
        // or delay the others.
        let (current, forecast, market) = tokio::join!(
            sources::weather::fetch(&self.client, &self.config.providers, coord),
            sources::forecast::fetch(&self.client, &self.config.providers, coord),
            sources::market::fetch(&self.client, &self.config.providers),
        );

        let mut notices = Vec::new();

        let weather = match (current, forecast) {
            (Ok(mut snapshot), Ok(forecast)) => {
                // The fallback coordinate is not a measurement; label the
                // snapshot with the sentinel so the UI can say so.
                if location.is_fallback {
                    if let Some(label) = &location.label {
                        snapshot.location_label.clone_from(label);
                    }
                }
                let report = WeatherReport {
                    current: snapshot,
                    forecast,
                };
                *self.last_weather.lock().await = Some(report.clone());
                report
            }
            (current, forecast) => {
                if let Err(e) = &current {
                    warn!("Current weather unavailable: {e}");
                }
                if let Err(e) = &forecast {
                    warn!("Weather forecast unavailable: {e}");
                }
                match self.last_weather.lock().await.clone() {
                    Some(report) => {
                        notices.push(WEATHER_STALE_NOTICE);
                        report
                    }
                    None => {
                        notices.push(WEATHER_SAMPLE_NOTICE);
                        sample_weather_report(Utc::now())
                    }
                }
            }
        };

        let market = match market {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Market prices unavailable: {e}");
                notices.push(MARKET_SAMPLE_NOTICE);
                sample_market_entries()
            }
        };

        let error = if notices.is_empty() {
            None
        } else {
            Some(notices.join(" "))
        };

        let view_model = DashboardViewModel::completed(weather, market, error);
        self.publisher.send_replace(view_model.clone());
        info!("Aggregation cycle complete");
        view_model
    }
}

/// Placeholder weather shown when no real or last-known report exists
fn sample_weather_report(now: DateTime<Utc>) -> WeatherReport {
    let temperatures = [29.0, 31.0, 28.0, 30.0];
    let forecast = temperatures
        .iter()
        .enumerate()
        .map(|(offset, temperature)| ForecastDay {
            day_label: (now + chrono::Duration::days(offset as i64 + 1))
                .format("%a")
                .to_string(),
            temperature: *temperature,
            condition_code: "01d".to_string(),
            condition_text: "clear sky".to_string(),
        })
        .collect();

    WeatherReport {
        current: WeatherSnapshot {
            temperature: 28.0,
            humidity: 45,
            wind_speed: 2.5,
            condition_code: "01d".to_string(),
            condition_text: "clear sky".to_string(),
            location_label: "Sample Location".to_string(),
            observed_at: now,
        },
        forecast,
    }
}

/// Placeholder market list shown when the market provider is down
fn sample_market_entries() -> Vec<MarketEntry> {
    let crops = [
        ("Wheat", 24.50, PriceTrend::Up),
        ("Rice", 32.75, PriceTrend::Stable),
        ("Corn", 18.30, PriceTrend::Down),
        ("Soybean", 42.10, PriceTrend::Up),
        ("Cotton", 65.25, PriceTrend::Stable),
    ];

    crops
        .iter()
        .map(|(name, price, trend)| MarketEntry {
            crop_name: (*name).to_string(),
            current_price: *price,
            trend: *trend,
            best_selling_time: None,
        })
        .collect()
}
