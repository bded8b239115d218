//! `AgriDash` - Farm dashboard aggregation service
//!
//! This library gathers weather, forecast and market price data from
//! unreliable upstream providers, degrades gracefully per source and
//! publishes one merged dashboard view-model on a periodic refresh cycle.

pub mod aggregator;
pub mod api;
pub mod calculators;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod models;
pub mod scheduler;
pub mod sources;
pub mod web;

// Re-export core types for public API
pub use aggregator::Aggregator;
pub use config::AgriDashConfig;
pub use error::{AgriDashError, SourceError};
pub use geolocation::{GeolocationResolver, LocationProvider, StaticLocationProvider};
pub use models::{
    Coordinate, DashboardViewModel, ForecastDay, MarketEntry, PriceTrend, WeatherReport,
    WeatherSnapshot,
};
pub use scheduler::RefreshScheduler;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AgriDashError>;
