//! Control page, version, and metadata handlers

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::ui;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
    Json,
};
use fppcontrol_core::api::ButtonsResponse;
use tracing::debug;

/// Serve the touch control page.
///
/// # Endpoint
///
/// `GET /`
pub(crate) async fn control_page(State(state): State<AppState>) -> Html<String> {
    debug!("Request: GET /");

    Html(ui::render_control_page(
        &state.config.buttons,
        &state.config.presets,
    ))
}

/// Report the gateway version as plain text.
///
/// # Endpoint
///
/// `GET /version`
pub(crate) async fn version() -> String {
    format!("FPPWebControl v{}", env!("CARGO_PKG_VERSION"))
}

/// List the configured buttons and preset tiles.
///
/// # Endpoint
///
/// `GET /api/buttons`
pub(crate) async fn list_buttons(State(state): State<AppState>) -> Json<ButtonsResponse> {
    debug!("Request: GET /api/buttons");

    Json(ButtonsResponse {
        buttons: state.config.buttons.clone(),
        presets: state.config.presets.clone(),
    })
}

/// Fallback for known routes called with an unsupported method.
pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} is not allowed on {}", method, uri.path()))
}

/// Fallback for unknown routes.
pub(crate) async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
