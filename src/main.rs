use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use agridash::api::ApiState;
use agridash::{AgriDashConfig, Aggregator, RefreshScheduler, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AgriDashConfig::load()?;
    init_tracing(&config);

    let aggregator = Arc::new(Aggregator::new(config.clone())?);
    let scheduler = RefreshScheduler::start(
        Arc::clone(&aggregator),
        Duration::from_secs(config.refresh.interval_minutes * 60),
    );

    let state = ApiState {
        dashboard: aggregator.subscribe(),
    };

    tokio::select! {
        result = web::run(config.server.port, &config.server.static_dir, state) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }

    scheduler.shutdown().await;
    Ok(())
}

fn init_tracing(config: &AgriDashConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
