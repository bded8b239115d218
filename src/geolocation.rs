//! Geolocation Resolution Module
//!
//! Obtains a coordinate pair from the host environment with a bounded wait.
//! Resolution never fails: a missing capability, a denied or erroring
//! provider, or an elapsed wait all produce the fixed fallback coordinate,
//! tagged so downstream consumers know it is not a measurement.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::SourceError;
use crate::config::GeolocationConfig;
use crate::models::{Coordinate, ResolvedLocation};

/// Fallback coordinate used when no location capability is available
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 28.6139,
    longitude: 77.2090,
};

/// Sentinel label marking the fallback coordinate as such
pub const FALLBACK_LABEL: &str = "New Delhi, IN";

/// A source of host coordinates.
///
/// Returns `SourceError::CapabilityUnavailable` when the host cannot or will
/// not provide a position; the resolver converts that into the fallback.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Attempt to obtain the current coordinate
    async fn locate(&self) -> std::result::Result<Coordinate, SourceError>;
}

/// Provider backed by a fixed deployment coordinate from configuration
pub struct StaticLocationProvider {
    coordinate: Coordinate,
}

impl StaticLocationProvider {
    /// Create a provider that always reports the given coordinate
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn locate(&self) -> std::result::Result<Coordinate, SourceError> {
        if self.coordinate.is_valid() {
            Ok(self.coordinate)
        } else {
            Err(SourceError::CapabilityUnavailable)
        }
    }
}

/// Service resolving a coordinate for each aggregation cycle
pub struct GeolocationResolver {
    provider: Option<Arc<dyn LocationProvider>>,
    wait: Duration,
}

impl GeolocationResolver {
    /// Create a resolver over an optional provider with the given wait bound
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LocationProvider>>, wait: Duration) -> Self {
        Self { provider, wait }
    }

    /// Build a resolver from configuration; configured coordinates become a
    /// static provider, absence means no capability
    #[must_use]
    pub fn from_config(config: &GeolocationConfig) -> Self {
        let provider: Option<Arc<dyn LocationProvider>> = match (config.latitude, config.longitude)
        {
            (Some(lat), Some(lon)) => Some(Arc::new(StaticLocationProvider::new(Coordinate::new(
                lat, lon,
            )))),
            _ => None,
        };
        Self::new(provider, Duration::from_millis(config.timeout_ms))
    }

    /// Resolve a coordinate. Never fails: absence of capability is a normal
    /// outcome and yields the fallback coordinate with its sentinel label.
    pub async fn resolve(&self) -> ResolvedLocation {
        let Some(provider) = &self.provider else {
            debug!("No location capability, using fallback coordinate");
            return ResolvedLocation::fallback(FALLBACK_COORDINATE, FALLBACK_LABEL);
        };

        match tokio::time::timeout(self.wait, provider.locate()).await {
            Ok(Ok(coordinate)) if coordinate.is_valid() => {
                debug!("Resolved host coordinate: {}", coordinate.format());
                ResolvedLocation::measured(coordinate)
            }
            Ok(Ok(coordinate)) => {
                warn!(
                    "Provider returned out-of-range coordinate {}, using fallback",
                    coordinate.format()
                );
                ResolvedLocation::fallback(FALLBACK_COORDINATE, FALLBACK_LABEL)
            }
            Ok(Err(e)) => {
                debug!("Location provider unavailable ({e}), using fallback coordinate");
                ResolvedLocation::fallback(FALLBACK_COORDINATE, FALLBACK_LABEL)
            }
            Err(_) => {
                warn!(
                    "Geolocation did not answer within {} ms, using fallback coordinate",
                    self.wait.as_millis()
                );
                ResolvedLocation::fallback(FALLBACK_COORDINATE, FALLBACK_LABEL)
            }
        }
    }
}
