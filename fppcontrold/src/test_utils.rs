//! Test utilities for the daemon
//!
//! Provides a recording in-memory transport and a mock FPP device served
//! over real HTTP.

use crate::device::{DeviceResult, DeviceTransport};
use anyhow::Result;
use async_trait::async_trait;
use axum::{http::StatusCode, http::Uri, Router};
use fppcontrol_core::{DeviceRequest, ProxyOutcome};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Responder = dyn Fn(&str) -> DeviceResult + Send + Sync;

/// In-memory transport that records every URL it is asked to fetch.
pub(crate) struct RecordingTransport {
    urls: Mutex<Vec<String>>,
    responder: Box<Responder>,
}

impl RecordingTransport {
    /// Answer every request with 200 and `body`.
    pub fn ok(body: &str) -> Self {
        let body = body.to_string();
        Self::with_responder(move |_| Ok(ProxyOutcome::new(200, body.clone())))
    }

    /// Answer each request with whatever `responder` returns for its URL.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&str) -> DeviceResult + Send + Sync + 'static,
    {
        Self {
            urls: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// URLs requested so far, in order.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeviceTransport for RecordingTransport {
    async fn send(&self, request: &DeviceRequest) -> DeviceResult {
        self.urls.lock().unwrap().push(request.url.clone());
        (self.responder)(&request.url)
    }
}

/// Mock FPP device listening on an ephemeral port.
///
/// - `/api/sequence/missing/start` answers 404
/// - `/api/sequence/slow/start` answers after 2 seconds
/// - `/api/sequence/{name}/start` answers "Sequence Started"
/// - anything else answers 200 with an empty body
pub(crate) struct MockDevice {
    url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockDevice {
    pub async fn start() -> Result<Self> {
        let paths = Arc::new(Mutex::new(Vec::new()));
        let recorded = paths.clone();

        let app = Router::new().fallback(move |uri: Uri| {
            let recorded = recorded.clone();
            async move {
                let path = urlencoding::decode(uri.path())
                    .map(|p| p.into_owned())
                    .unwrap_or_else(|_| uri.path().to_string());
                recorded.lock().unwrap().push(path.clone());
                respond(&path).await
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock device error: {}", e);
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            paths,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decoded request paths received so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

async fn respond(path: &str) -> (StatusCode, String) {
    match path {
        "/api/sequence/missing/start" => (StatusCode::NOT_FOUND, "Sequence not found".to_string()),
        "/api/sequence/slow/start" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            (StatusCode::OK, "late".to_string())
        }
        p if p.starts_with("/api/sequence/") && p.ends_with("/start") => {
            (StatusCode::OK, "Sequence Started".to_string())
        }
        _ => (StatusCode::OK, String::new()),
    }
}
