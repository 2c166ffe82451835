//! Playlist handlers

use super::{respond, PathParams};
use crate::api::error::ApiError;
use crate::api::AppState;
use axum::{
    extract::State,
    response::Response,
};
use fppcontrol_core::validation::validate_name;
use fppcontrol_core::DeviceCommand;
use tracing::debug;

/// Start or stop a playlist.
///
/// # Endpoint
///
/// `POST /api/playlist/:name/:action` with `action` one of `start`, `stop`
///
/// The device stops whichever playlist is playing, so `stop` only
/// validates `name`.
pub(crate) async fn playlist_action(
    State(state): State<AppState>,
    PathParams((name, action)): PathParams<(String, String)>,
) -> Result<Response, ApiError> {
    debug!("Request: POST /api/playlist/{}/{}", name, action);

    validate_name("playlist", &name)?;

    let command = match action.as_str() {
        "start" => DeviceCommand::StartPlaylist(name),
        "stop" => DeviceCommand::StopPlaylist,
        other => {
            return Err(ApiError::bad_request(format!(
                "Invalid playlist action '{}'",
                other
            )))
        }
    };

    respond(state.device.execute(&command).await)
}
