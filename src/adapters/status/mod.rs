//! Backend status adapters.
//!
//! - `http_source` - `reqwest` client for `GET /system/status`
//! - `monitor` - interval poller publishing the dashboard status

mod http_source;
mod monitor;

pub use http_source::HttpStatusSource;
pub use monitor::{MonitorHandle, StatusMonitor, StatusMonitorConfig};
