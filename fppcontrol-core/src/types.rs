//! Core types for the FPP control gateway

use serde::{Deserialize, Serialize};

/// What a control-page button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonType {
    /// Start a sequence (stopping the current one first)
    Sequence,
    /// Run a sequence as a background effect (`FSEQ Effect Start`)
    SequenceEffect,
    /// Start an effect (`Effect Start`)
    Effect,
    /// Start a playlist
    Playlist,
    /// Stop the playlist and the current sequence
    Stop,
}

/// One tile on the control page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Label shown on the tile; falls back to `name` when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Sequence, effect, or playlist name sent to the device
    pub name: String,
    /// CSS color for the tile; derived from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: ButtonType,
}

impl ButtonConfig {
    pub fn new(name: impl Into<String>, kind: ButtonType) -> Self {
        Self {
            title: String::new(),
            name: name.into(),
            color: None,
            kind,
        }
    }

    /// Text displayed on the tile.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

/// How a sequence of dependent device calls treats intermediate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainPolicy {
    /// Attempt every step in order, ignore earlier failures, report the last step.
    #[default]
    BestEffort,
    /// Stop at the first step that fails and report it.
    FailFast,
}

/// A tile that triggers a command preset slot on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetButton {
    pub title: String,
    pub slot: u32,
}

impl PresetButton {
    pub fn new(title: impl Into<String>, slot: u32) -> Self {
        Self {
            title: title.into(),
            slot,
        }
    }
}

/// A named device command with its optional first argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRequest {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ProxyRequest {
    pub fn new(command: impl Into<String>, param: Option<String>) -> Self {
        Self {
            command: command.into(),
            param,
        }
    }
}

/// Normalized result of a completed device call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyOutcome {
    /// Whether the status was in the 2xx range
    pub ok: bool,
    pub status_code: u16,
    /// Response body as text, read even for non-2xx statuses
    pub body_text: String,
}

impl ProxyOutcome {
    pub fn new(status_code: u16, body_text: impl Into<String>) -> Self {
        Self {
            ok: (200..300).contains(&status_code),
            status_code,
            body_text: body_text.into(),
        }
    }
}
