//! HTTP adapter for the backend status endpoint.
//!
//! Issues `GET {base_url}/system/status` and decodes the JSON report:
//!
//! ```json
//! { "status": "online", "counts": { "users": 12, "events": 4, "posts": 9, "registrations": 31 } }
//! ```
//!
//! Transport failures (refused, DNS, timeout) map to `StatusError::Unreachable`;
//! a non-2xx answer maps to `StatusError::Http`; a body that is not a status
//! document maps to `StatusError::Decode`.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::monitoring::StatusPayload;
use crate::ports::{StatusError, StatusSource};

const STATUS_PATH: &str = "/system/status";

/// `StatusSource` over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    status_url: String,
    http_client: reqwest::Client,
}

impl HttpStatusSource {
    /// Builds a client with the given per-request timeout.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, StatusError> {
        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| StatusError::Unreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            status_url: status_url(base_url),
            http_client,
        })
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}

fn status_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), STATUS_PATH)
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self) -> Result<StatusPayload, StatusError> {
        tracing::debug!(url = %self.status_url, "fetching system status");

        let response = self
            .http_client
            .get(&self.status_url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %self.status_url, error = %e, "status endpoint unreachable");
                StatusError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %self.status_url, %status, "status endpoint returned an error");
            return Err(StatusError::Http(status.as_u16()));
        }

        response.json::<StatusPayload>().await.map_err(|e| {
            tracing::error!(error = %e, "failed to decode status body");
            StatusError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response, then closes.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn status_url_strips_trailing_slash() {
        assert_eq!(status_url("http://api.campus.edu/"), "http://api.campus.edu/system/status");
        assert_eq!(status_url("http://api.campus.edu"), "http://api.campus.edu/system/status");
    }

    #[tokio::test]
    async fn decodes_online_report() {
        let base = serve_once(
            "200 OK",
            r#"{"status":"online","counts":{"users":3,"events":2,"posts":5,"registrations":7}}"#,
        )
        .await;
        let source = HttpStatusSource::new(&base, Duration::from_secs(5)).unwrap();

        let payload = source.fetch_status().await.unwrap();
        assert_eq!(payload.status, "online");
        assert_eq!(payload.counts.events, 2);
        assert_eq!(payload.counts.registrations, 7);
    }

    #[tokio::test]
    async fn non_success_maps_to_http_error() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let source = HttpStatusSource::new(&base, Duration::from_secs(5)).unwrap();

        assert_eq!(source.fetch_status().await.unwrap_err(), StatusError::Http(503));
    }

    #[tokio::test]
    async fn garbage_body_maps_to_decode_error() {
        let base = serve_once("200 OK", "not json").await;
        let source = HttpStatusSource::new(&base, Duration::from_secs(5)).unwrap();

        assert!(matches!(source.fetch_status().await, Err(StatusError::Decode(_))));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpStatusSource::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        assert!(matches!(source.fetch_status().await, Err(StatusError::Unreachable(_))));
    }
}
