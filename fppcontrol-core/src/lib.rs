//! FPPControl Core Library
//!
//! Shared types, command translation, and configuration for the FPP web
//! control gateway. The daemon (`fppcontrold`) builds on top of this crate.

pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use command::{CommandTranslator, DeviceCommand, DeviceMethod, DeviceRequest};
pub use config::{
    default_buttons, default_config_path, default_presets, ChainConfig, DeviceConfig, FadeConfig,
    ServerConfig, StaticConfig,
};
pub use error::*;
pub use types::*;
