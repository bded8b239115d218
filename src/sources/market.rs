//! Market-price source adapter
//!
//! Fetches the crop price list from the market provider. The call takes no
//! coordinate; the provider serves one national price table.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::SourceError;
use crate::config::ProvidersConfig;
use crate::models::{MarketEntry, PriceTrend};

use super::get_json;

#[derive(Debug, Deserialize)]
struct MarketResponse {
    crops: Vec<CropPrice>,
}

/// One crop row in the provider's shape
#[derive(Debug, Deserialize)]
struct CropPrice {
    name: String,
    #[serde(rename = "currentPrice")]
    current_price: f64,
    trend: PriceTrend,
    #[serde(rename = "bestSellingTime")]
    best_selling_time: Option<String>,
}

/// Fetch current market prices
#[instrument(skip(client, config))]
pub async fn fetch(
    client: &Client,
    config: &ProvidersConfig,
) -> std::result::Result<Vec<MarketEntry>, SourceError> {
    let url = format!("{}/api/market-prices", config.market_base_url);
    debug!("Fetching market prices");

    let response: MarketResponse = get_json(client, &url, config.timeout_ms).await?;
    Ok(entries_from_response(response))
}

/// Remap provider rows to canonical entries, keeping the first row per crop
/// name so names stay unique within one response
fn entries_from_response(response: MarketResponse) -> Vec<MarketEntry> {
    let mut seen = std::collections::HashSet::new();
    response
        .crops
        .into_iter()
        .filter(|crop| seen.insert(crop.name.clone()))
        .map(|crop| MarketEntry {
            crop_name: crop.name,
            current_price: crop.current_price,
            trend: crop.trend,
            best_selling_time: crop.best_selling_time,
        })
        .collect()
}
