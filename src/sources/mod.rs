//! Source adapters for the external data providers
//!
//! One adapter per provider. Each applies the per-call timeout, maps the
//! provider wire shape onto the canonical models and isolates failures to
//! its own source. Adapters are stateless and safe to invoke concurrently.

pub mod forecast;
pub mod market;
pub mod weather;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::SourceError;

/// GET a JSON payload within the per-call bound.
///
/// Elapsing the bound yields `Timeout`; a non-2xx status, a network failure
/// or an undecodable body yields `InvalidResponse`. The caller never sees a
/// partially decoded payload.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout_ms: u64,
) -> std::result::Result<T, SourceError> {
    let request = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport_error(&e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::invalid(format!("HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| map_transport_error(&e, timeout_ms))
    };

    match tokio::time::timeout(Duration::from_millis(timeout_ms), request).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout { timeout_ms }),
    }
}

fn map_transport_error(error: &reqwest::Error, timeout_ms: u64) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout { timeout_ms }
    } else if error.is_decode() {
        SourceError::invalid(format!("malformed payload: {error}"))
    } else {
        SourceError::invalid(format!("network error: {error}"))
    }
}
