//! Talent Hub status monitor
//!
//! Polls `GET {base_url}/system/status` on the configured interval and logs
//! every change of the backend's state. Stops on Ctrl-C.
//!
//! Usage:
//!   TALENT_HUB__MONITOR__BASE_URL=https://api.campus.edu talent-hub-monitor

use std::error::Error;
use std::sync::Arc;

use talent_hub::adapters::{HttpStatusSource, StatusMonitor, StatusMonitorConfig};
use talent_hub::config::{AppConfig, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(|| tracing_subscriber::fmt::layer().with_target(true)))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let source = HttpStatusSource::new(&config.monitor.base_url, config.monitor.request_timeout())?;
    tracing::info!(
        url = source.status_url(),
        interval_secs = config.monitor.poll_interval_secs,
        "starting status monitor"
    );

    let monitor = Arc::new(StatusMonitor::with_config(
        Arc::new(source),
        StatusMonitorConfig::default().with_poll_interval(config.monitor.poll_interval()),
    ));
    let handle = monitor.start();
    handle
        .report_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for Ctrl-C");
            }
        })
        .await;

    handle.shutdown().await;
    Ok(())
}
