//! API models for the gateway's REST surface

use crate::types::{ButtonConfig, PresetButton};
use serde::{Deserialize, Serialize};

/// Message and status of a locally produced error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

/// Body of every error response except device errors: `{"error": {"message", "status"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                status,
            },
        }
    }
}

/// Body returned when the device answered with a non-2xx status.
///
/// Carries the device's own status and body untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub status: u16,
    pub body: String,
}

impl UpstreamErrorResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            error: "Device responded with error".to_string(),
            status,
            body: body.into(),
        }
    }
}

/// Configured control-page tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonsResponse {
    pub buttons: Vec<ButtonConfig>,
    pub presets: Vec<PresetButton>,
}
