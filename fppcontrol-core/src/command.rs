//! Translation of logical gateway actions into device API requests
//!
//! The device exposes a GET-based HTTP API. Every action the gateway
//! supports maps onto exactly one URL below the configured base address:
//!
//! | Action                  | Device path                                  |
//! |-------------------------|----------------------------------------------|
//! | stop current sequence   | `/api/sequence/current/stop`                 |
//! | start sequence          | `/api/sequence/{name}/start`                 |
//! | start playlist          | `/api/playlist/{name}/start`                 |
//! | stop playlist           | `/api/playlists/stop`                        |
//! | start effect            | `/api/command/Effect Start/{name}/...`       |
//! | trigger preset slot     | `/api/command/Trigger Command Preset Slot/{slot}` |
//! | named command           | `/api/command/{command}/{param}/...`         |
//!
//! Path segments are percent-encoded. Some named commands take fixed
//! trailing arguments, listed in [`COMMAND_SUFFIXES`].

use crate::types::ProxyRequest;
use std::fmt;

/// Device command that runs an `.eseq` effect.
pub const EFFECT_START_COMMAND: &str = "Effect Start";

/// Device command that runs an `.fseq` sequence as a background effect.
pub const FSEQ_EFFECT_START_COMMAND: &str = "FSEQ Effect Start";

/// Device command that fires a saved command preset by slot number.
pub const TRIGGER_PRESET_COMMAND: &str = "Trigger Command Preset Slot";

/// Fixed arguments appended after the parameter of specific named commands.
///
/// - `Effect Start`: start channel `0` (use the effect's own), loop, foreground,
///   only if not already running.
/// - `FSEQ Effect Start`: no loop, background.
pub const COMMAND_SUFFIXES: &[(&str, &[&str])] = &[
    (EFFECT_START_COMMAND, &["0", "true", "false", "true"]),
    (FSEQ_EFFECT_START_COMMAND, &["false", "true"]),
];

/// Look up the fixed trailing arguments for a named command.
pub fn command_suffix(command: &str) -> &'static [&'static str] {
    COMMAND_SUFFIXES
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, suffix)| *suffix)
        .unwrap_or(&[])
}

/// A logical action against the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    StopCurrentSequence,
    StartSequence(String),
    StartPlaylist(String),
    StopPlaylist,
    StartEffect(String),
    TriggerPreset(String),
    Named(ProxyRequest),
}

impl DeviceCommand {
    /// Path below the device base URL, with segments percent-encoded.
    pub fn path(&self) -> String {
        match self {
            DeviceCommand::StopCurrentSequence => "/api/sequence/current/stop".to_string(),
            DeviceCommand::StartSequence(name) => {
                format!("/api/sequence/{}/start", urlencoding::encode(name))
            }
            DeviceCommand::StartPlaylist(name) => {
                format!("/api/playlist/{}/start", urlencoding::encode(name))
            }
            DeviceCommand::StopPlaylist => "/api/playlists/stop".to_string(),
            DeviceCommand::StartEffect(name) => {
                named_command_path(EFFECT_START_COMMAND, Some(name.as_str()))
            }
            DeviceCommand::TriggerPreset(slot) => {
                named_command_path(TRIGGER_PRESET_COMMAND, Some(slot.as_str()))
            }
            DeviceCommand::Named(request) => {
                named_command_path(&request.command, request.param.as_deref())
            }
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceCommand::StopCurrentSequence => write!(f, "stop current sequence"),
            DeviceCommand::StartSequence(name) => write!(f, "start sequence '{}'", name),
            DeviceCommand::StartPlaylist(name) => write!(f, "start playlist '{}'", name),
            DeviceCommand::StopPlaylist => write!(f, "stop playlist"),
            DeviceCommand::StartEffect(name) => write!(f, "start effect '{}'", name),
            DeviceCommand::TriggerPreset(slot) => write!(f, "trigger preset slot {}", slot),
            DeviceCommand::Named(request) => match &request.param {
                Some(param) => write!(f, "command '{}' ({})", request.command, param),
                None => write!(f, "command '{}'", request.command),
            },
        }
    }
}

fn named_command_path(command: &str, param: Option<&str>) -> String {
    let mut path = format!("/api/command/{}", urlencoding::encode(command));
    if let Some(param) = param {
        path.push('/');
        path.push_str(&urlencoding::encode(param));
    }
    for arg in command_suffix(command) {
        path.push('/');
        path.push_str(arg);
    }
    path
}

/// HTTP method used toward the device.
///
/// The device API is GET-based, state-changing commands included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMethod {
    Get,
}

/// A fully-formed request against the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRequest {
    pub method: DeviceMethod,
    pub url: String,
}

/// Builds device requests against a fixed base URL.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    base_url: String,
}

impl CommandTranslator {
    /// Create a translator for the device at `base_url`.
    ///
    /// Trailing slashes are dropped so paths join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn translate(&self, command: &DeviceCommand) -> DeviceRequest {
        DeviceRequest {
            method: DeviceMethod::Get,
            url: format!("{}{}", self.base_url, command.path()),
        }
    }
}
