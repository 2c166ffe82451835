//! Error types for the FPP control gateway

use std::fmt;
use thiserror::Error;

/// Classification of a failed device call.
///
/// Set from the transport's own error flags when the failure happens, so
/// callers can map a failure to a response without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceErrorKind {
    /// No response arrived within the configured timeout
    TimedOut,
    /// The device could not be connected to
    Unreachable,
    /// Any other transport fault (bad response stream, invalid URL, ...)
    Other,
}

impl fmt::Display for DeviceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceErrorKind::TimedOut => "timed out",
            DeviceErrorKind::Unreachable => "unreachable",
            DeviceErrorKind::Other => "transport error",
        };
        f.write_str(label)
    }
}

/// A device call that did not produce an HTTP response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Device {kind}: {message}")]
pub struct DeviceError {
    pub kind: DeviceErrorKind,
    pub message: String,
}

impl DeviceError {
    pub fn new(kind: DeviceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timed_out(message: impl Into<String>) -> Self {
        Self::new(DeviceErrorKind::TimedOut, message)
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(DeviceErrorKind::Unreachable, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(DeviceErrorKind::Other, message)
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == DeviceErrorKind::TimedOut
    }
}

/// Core error type for gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Malformed caller input, rejected before reaching the device
    #[error("{0}")]
    InvalidInput(String),

    /// The device answered with a non-2xx status
    #[error("Device responded with error status {status}")]
    Upstream { status: u16, body: String },

    /// The device call failed before a response arrived
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

impl From<toml::de::Error> for GatewayError {
    fn from(err: toml::de::Error) -> Self {
        GatewayError::Config(err.to_string())
    }
}
