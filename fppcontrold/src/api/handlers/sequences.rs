//! Sequence handlers

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

/// Start or stop a sequence.
///
/// # Endpoint
///
/// `POST /api/sequence/:name/:action` with `action` one of `start`, `stop`
///
/// # Behavior
///
/// - `start` stops the current sequence, then starts `name`; whether a
///   failed stop aborts the start is `chain.start_sequence`
/// - `stop` stops whatever sequence is running; `name` is validated but not sent
pub(crate) async fn sequence_action(
    State(state): State<AppState>,
    PathParams((name, action)): PathParams<(String, String)>,
) -> Result<Response, ApiError> {
    debug!("Request: POST /api/sequence/{}/{}", name, action);

    validate_name("sequence", &name)?;

    let result = match action.as_str() {
        "start" => {
            let steps = [
                DeviceCommand::StopCurrentSequence,
                DeviceCommand::StartSequence(name),
            ];
            state
                .device
                .execute_chain(&steps, state.config.chain.start_sequence)
                .await
        }
        "stop" => state.device.execute(&DeviceCommand::StopCurrentSequence).await,
        other => {
            return Err(ApiError::bad_request(format!(
                "Invalid sequence action '{}'",
                other
            )))
        }
    };

    respond(result)
}

/// Stop the playlist and the current sequence.
///
/// # Endpoint
///
/// `POST /api/stop`
///
/// With the default best-effort policy both stops are attempted and only
/// the sequence stop is reported.
pub(crate) async fn stop_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    debug!("Request: POST /api/stop");

    let steps = [
        DeviceCommand::StopPlaylist,
        DeviceCommand::StopCurrentSequence,
    ];
    respond(
        state
            .device
            .execute_chain(&steps, state.config.chain.stop_all)
            .await,
    )
}
