//! API module for the FPP control gateway
//!
//! Contains the Axum router, shared state, and error responses.

pub(crate) mod handlers;

use crate::device::{DeviceClient, DeviceTransport};
use crate::sequencer::FadeSequencer;
use handlers::info::method_not_allowed;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use fppcontrol_core::{CommandTranslator, StaticConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

/// Application state shared across all handlers
#[derive(Clone)]
pub(crate) struct AppState {
    /// Static configuration (buttons, presets, device settings)
    pub config: Arc<StaticConfig>,
    /// Device command executor
    pub device: Arc<DeviceClient>,
    /// Fade-out follow-up scheduler
    pub sequencer: FadeSequencer,
}

impl AppState {
    /// Create new application state
    pub fn new(config: StaticConfig, transport: Arc<dyn DeviceTransport>) -> Self {
        let device = Arc::new(DeviceClient::new(
            CommandTranslator::new(&config.device.url),
            transport,
        ));
        let sequencer = FadeSequencer::new(device.clone(), &config.fade);

        Self {
            config: Arc::new(config),
            device,
            sequencer,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Request tracing at INFO, so every request is logged under the default filter.
fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Create the main API router with all endpoints
pub(crate) fn create_router(state: AppState) -> Router {
    info!("Setting up API router...");

    let middleware_stack = ServiceBuilder::new()
        .layer(trace_layer())
        .layer(cors_layer(&state.config.server.cors_origins));

    Router::new()
        // Control page and metadata
        .route(
            "/",
            get(handlers::info::control_page).fallback(method_not_allowed),
        )
        .route(
            "/version",
            get(handlers::info::version).fallback(method_not_allowed),
        )
        .route(
            "/api/buttons",
            get(handlers::info::list_buttons).fallback(method_not_allowed),
        )
        // Sequence endpoints
        .route(
            "/api/sequence/:name/:action",
            post(handlers::sequences::sequence_action).fallback(method_not_allowed),
        )
        .route(
            "/api/stop",
            post(handlers::sequences::stop_all).fallback(method_not_allowed),
        )
        // Playlist endpoints
        .route(
            "/api/playlist/:name/:action",
            post(handlers::playlists::playlist_action).fallback(method_not_allowed),
        )
        // Effect endpoints
        .route(
            "/api/effect/:name/start",
            post(handlers::commands::start_effect).fallback(method_not_allowed),
        )
        // Command endpoints
        .route(
            "/api/command-preset/:slot",
            post(handlers::commands::trigger_preset).fallback(method_not_allowed),
        )
        .route(
            "/api/command/:name/:params",
            post(handlers::commands::named_command).fallback(method_not_allowed),
        )
        .fallback(handlers::info::not_found)
        .layer(middleware_stack)
        .with_state(state)
}

/// Error handling utilities
pub(crate) mod error {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use fppcontrol_core::api::{ErrorResponse, UpstreamErrorResponse};
    use fppcontrol_core::GatewayError;
    use tracing::{error, warn};

    /// Error returned by route handlers
    #[derive(Debug)]
    pub enum ApiError {
        /// An error produced by the gateway itself
        Local {
            status_code: StatusCode,
            message: String,
        },
        /// The device answered with a non-2xx status; reported as 502
        Upstream { status: u16, body: String },
    }

    impl ApiError {
        /// Create a new API error
        pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
            Self::Local {
                status_code,
                message: message.into(),
            }
        }

        /// Create a bad request error
        pub fn bad_request(message: impl Into<String>) -> Self {
            Self::new(StatusCode::BAD_REQUEST, message)
        }

        pub fn not_found(message: impl Into<String>) -> Self {
            Self::new(StatusCode::NOT_FOUND, message)
        }

        pub fn method_not_allowed(message: impl Into<String>) -> Self {
            Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
        }

        /// Create an internal server error
        pub fn internal_error(message: impl Into<String>) -> Self {
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
        }

        /// Create a gateway timeout error (device did not answer in time)
        pub fn gateway_timeout(message: impl Into<String>) -> Self {
            Self::new(StatusCode::GATEWAY_TIMEOUT, message)
        }

        pub fn upstream(status: u16, body: impl Into<String>) -> Self {
            Self::Upstream {
                status,
                body: body.into(),
            }
        }

        pub fn status_code(&self) -> StatusCode {
            match self {
                Self::Local { status_code, .. } => *status_code,
                Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            }
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            let status_code = self.status_code();
            match self {
                Self::Local { message, .. } => {
                    if status_code.is_client_error() {
                        warn!("API Error {}: {}", status_code, message);
                    } else {
                        error!("API Error {}: {}", status_code, message);
                    }
                    let body = ErrorResponse::new(message, status_code.as_u16());
                    (status_code, Json(body)).into_response()
                }
                Self::Upstream { status, body } => {
                    error!("Device responded with error {}: {}", status, body);
                    let body = UpstreamErrorResponse::new(status, body);
                    (status_code, Json(body)).into_response()
                }
            }
        }
    }

    /// Convert GatewayError to ApiError
    impl From<GatewayError> for ApiError {
        fn from(err: GatewayError) -> Self {
            match err {
                GatewayError::InvalidInput(msg) => Self::bad_request(msg),
                GatewayError::Upstream { status, body } => Self::upstream(status, body),
                GatewayError::Device(e) if e.is_timeout() => {
                    Self::gateway_timeout(format!("Failed to reach device: {}", e))
                }
                GatewayError::Device(e) => {
                    Self::internal_error(format!("Failed to reach device: {}", e))
                }
                _ => Self::internal_error(err.to_string()),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use fppcontrol_core::DeviceError;

        #[test]
        fn test_gateway_error_mapping() {
            let cases = [
                (
                    GatewayError::InvalidInput("bad".to_string()),
                    StatusCode::BAD_REQUEST,
                ),
                (
                    GatewayError::Upstream {
                        status: 404,
                        body: String::new(),
                    },
                    StatusCode::BAD_GATEWAY,
                ),
                (
                    GatewayError::Device(DeviceError::timed_out("slow")),
                    StatusCode::GATEWAY_TIMEOUT,
                ),
                (
                    GatewayError::Device(DeviceError::unreachable("refused")),
                    StatusCode::INTERNAL_SERVER_ERROR,
                ),
                (
                    GatewayError::Device(DeviceError::other("reset")),
                    StatusCode::INTERNAL_SERVER_ERROR,
                ),
                (
                    GatewayError::Config("x".to_string()),
                    StatusCode::INTERNAL_SERVER_ERROR,
                ),
            ];

            for (err, expected) in cases {
                assert_eq!(ApiError::from(err).status_code(), expected);
            }
        }

        #[test]
        fn test_upstream_response_status() {
            let response = ApiError::upstream(404, "missing").into_response();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }
}
