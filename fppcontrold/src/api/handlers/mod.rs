//! API request handlers for the gateway REST API.
//!
//! # Handler Modules
//!
//! - [`info`] - Control page, version, button list, and 404 fallback
//! - [`sequences`] - Sequence start/stop and stop-all
//! - [`playlists`] - Playlist start/stop
//! - [`commands`] - Effects, command presets, and named commands
//!
//! Device-backed handlers validate their path parameters first, so an
//! invalid request never produces an outbound call. Device results are
//! turned into responses by [`respond`].

pub mod commands;
pub mod info;
pub mod playlists;
pub mod sequences;

use crate::api::error::ApiError;
use crate::device::DeviceResult;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use fppcontrol_core::GatewayError;
use serde::de::DeserializeOwned;

/// Path parameters whose rejection is reported as a JSON `ApiError`.
///
/// Segments that do not percent-decode to UTF-8 are a 400 like any other
/// invalid input.
pub(crate) struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(params)) => Ok(PathParams(params)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

/// Map a device result onto the public response.
///
/// - 2xx: 200 with the device's body, or `OK` when the body is empty
/// - non-2xx: 502 carrying the device status and body
/// - no response: 504 on timeout, 500 otherwise
pub(crate) fn respond(result: DeviceResult) -> Result<Response, ApiError> {
    let outcome = result.map_err(GatewayError::from)?;

    if !outcome.ok {
        return Err(GatewayError::Upstream {
            status: outcome.status_code,
            body: outcome.body_text,
        }
        .into());
    }

    let body = if outcome.body_text.is_empty() {
        "OK".to_string()
    } else {
        outcome.body_text
    };
    Ok(body.into_response())
}
