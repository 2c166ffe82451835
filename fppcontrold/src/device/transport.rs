//! reqwest-backed transport for the device HTTP API

use super::{DeviceResult, DeviceTransport};
use async_trait::async_trait;
use fppcontrol_core::{DeviceError, DeviceMethod, DeviceRequest, GatewayError, ProxyOutcome};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Sends device requests over HTTP with a fixed per-call timeout.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> fppcontrol_core::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fppcontrold/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> DeviceError {
        if err.is_timeout() {
            DeviceError::timed_out(format!(
                "no response within {}ms: {}",
                self.timeout.as_millis(),
                err
            ))
        } else if err.is_connect() {
            DeviceError::unreachable(err.to_string())
        } else {
            DeviceError::other(err.to_string())
        }
    }
}

#[async_trait]
impl DeviceTransport for HttpTransport {
    async fn send(&self, request: &DeviceRequest) -> DeviceResult {
        let builder = match request.method {
            DeviceMethod::Get => self.client.get(&request.url),
        };

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();

        // An unreadable body still counts as a completed call
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read device response body from {}: {}", request.url, e);
                String::new()
            }
        };

        Ok(ProxyOutcome::new(status, body))
    }
}
