//! Market price models

use serde::{Deserialize, Serialize};

/// Direction a crop price is moving
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    /// Arrow glyph used by the presentation layer
    #[must_use]
    pub fn arrow(&self) -> &'static str {
        match self {
            PriceTrend::Up => "↑",
            PriceTrend::Down => "↓",
            PriceTrend::Stable => "→",
        }
    }
}

/// Price information for a single crop; crop names are unique per response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarketEntry {
    /// Crop name
    pub crop_name: String,
    /// Current price per kg
    pub current_price: f64,
    /// Price movement direction
    pub trend: PriceTrend,
    /// Recommended selling window, when the provider knows one
    pub best_selling_time: Option<String>,
}
