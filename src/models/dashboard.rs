//! Dashboard view-model, the single artifact handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{MarketEntry, WeatherReport};

/// Everything the dashboard renders for one aggregation cycle.
///
/// Rebuilt wholesale at the end of each cycle and published as an atomic
/// replacement; never mutated in place. Once a cycle completes, each slice
/// independently carries data (fresh, last-known or placeholder) and
/// `is_loading` is false.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardViewModel {
    /// Weather slice: current conditions and forecast
    pub weather: Option<WeatherReport>,
    /// Market slice: crop prices
    pub market: Option<Vec<MarketEntry>>,
    /// Non-fatal degradation notice, if any slice fell back to sample data
    pub error: Option<String>,
    /// True only while a cycle is in flight
    pub is_loading: bool,
}

impl DashboardViewModel {
    /// The empty view-model published at the start of a cycle
    #[must_use]
    pub fn loading() -> Self {
        Self {
            weather: None,
            market: None,
            error: None,
            is_loading: true,
        }
    }

    /// A completed view-model with both slices populated
    #[must_use]
    pub fn completed(
        weather: WeatherReport,
        market: Vec<MarketEntry>,
        error: Option<String>,
    ) -> Self {
        Self {
            weather: Some(weather),
            market: Some(market),
            error,
            is_loading: false,
        }
    }
}
