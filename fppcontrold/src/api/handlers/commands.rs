//! Command handlers: effects, command presets, and named commands

use super::{respond, PathParams};
use crate::api::error::ApiError;
use crate::api::AppState;
use axum::{
    extract::State,
    response::Response,
};
use fppcontrol_core::validation::{is_valid_name, validate_name, validate_slot};
use fppcontrol_core::{DeviceCommand, ProxyRequest};
use tracing::debug;

/// Start an effect by name.
///
/// # Endpoint
///
/// `POST /api/effect/:name/start`
pub(crate) async fn start_effect(
    State(state): State<AppState>,
    PathParams(name): PathParams<String>,
) -> Result<Response, ApiError> {
    debug!("Request: POST /api/effect/{}/start", name);

    validate_name("effect", &name)?;

    respond(state.device.execute(&DeviceCommand::StartEffect(name)).await)
}

/// Trigger a command preset slot.
///
/// # Endpoint
///
/// `POST /api/command-preset/:slot`
///
/// # Behavior
///
/// The fade-out slot answers with the trigger's own result and schedules
/// the delayed stop + follow-up preset in the background. Other slots are
/// a single trigger.
pub(crate) async fn trigger_preset(
    State(state): State<AppState>,
    PathParams(slot): PathParams<String>,
) -> Result<Response, ApiError> {
    debug!("Request: POST /api/command-preset/{}", slot);

    validate_slot(&slot)?;

    let result = if state.sequencer.is_fade_out_slot(&slot) {
        state.sequencer.fade_out().await
    } else {
        state
            .device
            .execute(&DeviceCommand::TriggerPreset(slot))
            .await
    };

    respond(result)
}

/// Pass a named command through to the device.
///
/// # Endpoint
///
/// `POST /api/command/:name/:params`
///
/// Commands listed in the suffix table get their fixed trailing arguments
/// appended after `params`.
pub(crate) async fn named_command(
    State(state): State<AppState>,
    PathParams((name, params)): PathParams<(String, String)>,
) -> Result<Response, ApiError> {
    debug!("Request: POST /api/command/{}/{}", name, params);

    validate_name("command", &name)?;
    if !is_valid_name(&params) {
        return Err(ApiError::bad_request("Invalid command parameters"));
    }

    let command = DeviceCommand::Named(ProxyRequest::new(name, Some(params)));
    respond(state.device.execute(&command).await)
}
