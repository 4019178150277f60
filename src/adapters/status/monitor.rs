//! StatusMonitor - Background poller for the admin dashboard status badge.
//!
//! Polls a [`StatusSource`] on a fixed interval and publishes the latest
//! [`SystemStatus`] through a `watch` channel. The monitor owns its state:
//! dashboards subscribe to the channel instead of sharing a mutable field.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `poll_interval` | 30s | Time between status checks |
//!
//! ## Shutdown
//!
//! [`StatusMonitor::start`] returns a [`MonitorHandle`]. Calling
//! [`MonitorHandle::shutdown`] (or dropping the handle) stops the loop, even
//! while a fetch is in flight.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::foundation::Timestamp;
use crate::domain::monitoring::SystemStatus;
use crate::ports::{StatusError, StatusSource};

/// Configuration for the StatusMonitor service.
#[derive(Debug, Clone)]
pub struct StatusMonitorConfig {
    /// Time between status checks.
    pub poll_interval: Duration,
}

impl Default for StatusMonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
        }
    }
}

impl StatusMonitorConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Polls backend health and publishes it.
pub struct StatusMonitor {
    source: Arc<dyn StatusSource>,
    config: StatusMonitorConfig,
    status_tx: watch::Sender<SystemStatus>,
}

impl StatusMonitor {
    /// Create a monitor with the default 30 second interval.
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        Self::with_config(source, StatusMonitorConfig::default())
    }

    pub fn with_config(source: Arc<dyn StatusSource>, config: StatusMonitorConfig) -> Self {
        let (status_tx, _) = watch::channel(SystemStatus::Unknown);
        Self {
            source,
            config,
            status_tx,
        }
    }

    /// Receiver that sees every published status.
    pub fn subscribe(&self) -> watch::Receiver<SystemStatus> {
        self.status_tx.subscribe()
    }

    /// Most recently published status.
    pub fn current(&self) -> SystemStatus {
        self.status_tx.borrow().clone()
    }

    /// Run exactly one status check and publish the result.
    pub async fn poll_once(&self) -> SystemStatus {
        let checked_at = Timestamp::now();
        let status = match self.source.fetch_status().await {
            Ok(payload) => SystemStatus::from_payload(payload, checked_at),
            Err(StatusError::Unreachable(reason)) => SystemStatus::Offline { reason, checked_at },
            Err(err) => SystemStatus::Error {
                message: err.to_string(),
                checked_at,
            },
        };

        let previous = self.status_tx.send_replace(status.clone());
        if previous.differs_in_state(&status) {
            tracing::info!(from = previous.label(), to = status.label(), "system status changed");
        } else {
            tracing::debug!(status = %status, "system status unchanged");
        }

        status
    }

    /// Run the polling loop until the shutdown signal is received.
    ///
    /// The first check runs immediately. A check still in flight when the
    /// signal arrives is abandoned without publishing.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = stop_requested(&mut shutdown) => break,

                _ = interval.tick() => {
                    tokio::select! {
                        biased;

                        _ = stop_requested(&mut shutdown) => break,
                        _ = self.poll_once() => {}
                    }
                }
            }
        }

        tracing::debug!("status monitor stopping");
    }

    /// Spawn the polling loop on the current runtime.
    pub fn start(self: Arc<Self>) -> MonitorHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let status = self.subscribe();
        let task = tokio::spawn(async move { self.run(shutdown_rx).await });

        MonitorHandle {
            shutdown_tx,
            status,
            task: Some(task),
        }
    }
}

/// Resolves once `true` is sent or the sender is gone.
async fn stop_requested(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

/// Owner of a running monitor. Dropping it stops the loop.
pub struct MonitorHandle {
    shutdown_tx: watch::Sender<bool>,
    status: watch::Receiver<SystemStatus>,
    task: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    pub fn subscribe(&self) -> watch::Receiver<SystemStatus> {
        self.status.clone()
    }

    pub fn current(&self) -> SystemStatus {
        self.status.borrow().clone()
    }

    /// Logs every published status until `stop` resolves or the monitor
    /// goes away. `stop` is polled from the first iteration on, so a signal
    /// that fires between two status changes is never lost.
    pub async fn report_until<F>(&self, stop: F)
    where
        F: Future<Output = ()>,
    {
        let mut status = self.subscribe();
        tokio::pin!(stop);

        loop {
            tokio::select! {
                biased;

                _ = &mut stop => {
                    tracing::info!("shutdown requested");
                    return;
                }

                changed = status.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let current = status.borrow_and_update().clone();
                    if current.is_online() {
                        tracing::info!(%current, "backend status");
                    } else {
                        tracing::warn!(%current, "backend status");
                    }
                }
            }
        }
    }

    /// Signal the loop to stop and wait for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "status monitor task failed");
            }
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
