//! Configuration management for the `AgriDash` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AgriDashError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AgriDash` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgriDashConfig {
    /// Upstream provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Geolocation configuration
    #[serde(default)]
    pub geolocation: GeolocationConfig,
    /// Refresh cycle configuration
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Upstream provider settings shared by the source adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL for the weather provider
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Base URL for the market price provider
    #[serde(default = "default_market_base_url")]
    pub market_base_url: String,
    /// Weather provider API key, if the deployment has one
    pub api_key: Option<String>,
    /// Per-call timeout in milliseconds
    #[serde(default = "default_source_timeout_ms")]
    pub timeout_ms: u64,
}

/// Geolocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Bounded wait for the host location capability, in milliseconds
    #[serde(default = "default_geolocation_timeout_ms")]
    pub timeout_ms: u64,
    /// Deployment latitude; unset means no location capability
    pub latitude: Option<f64>,
    /// Deployment longitude; unset means no location capability
    pub longitude: Option<f64>,
}

/// Refresh cycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Minutes between aggregation cycles
    #[serde(default = "default_refresh_interval")]
    pub interval_minutes: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the stub API and dashboard endpoints bind to
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory the static frontend bundle is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_market_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_source_timeout_ms() -> u64 {
    5000
}

fn default_geolocation_timeout_ms() -> u64 {
    5000
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            market_base_url: default_market_base_url(),
            api_key: None,
            timeout_ms: default_source_timeout_ms(),
        }
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_geolocation_timeout_ms(),
            latitude: None,
            longitude: None,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_minutes: default_refresh_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl AgriDashConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with AGRIDASH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("AGRIDASH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: AgriDashConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_geolocation()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.providers.timeout_ms == 0 || self.providers.timeout_ms > 300_000 {
            return Err(AgriDashError::config(
                "Provider timeout must be between 1 ms and 300000 ms",
            )
            .into());
        }

        if self.geolocation.timeout_ms == 0 || self.geolocation.timeout_ms > 300_000 {
            return Err(AgriDashError::config(
                "Geolocation timeout must be between 1 ms and 300000 ms",
            )
            .into());
        }

        if self.refresh.interval_minutes == 0 || self.refresh.interval_minutes > 1440 {
            return Err(AgriDashError::config(
                "Refresh interval must be between 1 and 1440 minutes",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AgriDashError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AgriDashError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [
            &self.providers.weather_base_url,
            &self.providers.market_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AgriDashError::config(format!(
                    "Provider base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate geolocation coordinates when configured
    fn validate_geolocation(&self) -> Result<()> {
        match (self.geolocation.latitude, self.geolocation.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(AgriDashError::config(format!(
                        "Latitude must be between -90 and 90, got: {lat}"
                    ))
                    .into());
                }
                if !(-180.0..=180.0).contains(&lon) {
                    return Err(AgriDashError::config(format!(
                        "Longitude must be between -180 and 180, got: {lon}"
                    ))
                    .into());
                }
                Ok(())
            }
            (None, None) => Ok(()),
            _ => Err(AgriDashError::config(
                "Geolocation requires both latitude and longitude or neither",
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgriDashConfig::default();
        assert_eq!(
            config.providers.weather_base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.providers.market_base_url, "http://localhost:5000");
        assert_eq!(config.providers.timeout_ms, 5000);
        assert_eq!(config.geolocation.timeout_ms, 5000);
        assert_eq!(config.refresh.interval_minutes, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 5000);
        assert!(config.providers.api_key.is_none());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AgriDashConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AgriDashConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log level")
        );
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AgriDashConfig::default();
        config.refresh.interval_minutes = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Refresh interval")
        );
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AgriDashConfig::default();
        config.providers.market_base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_partial_geolocation() {
        let mut config = AgriDashConfig::default();
        config.geolocation.latitude = Some(28.6139);
        assert!(config.validate().is_err());

        config.geolocation.longitude = Some(77.2090);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_out_of_range_geolocation() {
        let mut config = AgriDashConfig::default();
        config.geolocation.latitude = Some(120.0);
        config.geolocation.longitude = Some(77.2090);
        assert!(config.validate().is_err());
    }
}
