//! Configuration types for FPPControl
//!
//! The gateway has a single static configuration, loaded once at startup
//! from a TOML file and then overridden from the environment and the
//! command line by the daemon. See [`StaticConfig`].

mod paths;
mod static_config;

pub use paths::default_config_path;
pub use static_config::{
    default_buttons, default_presets, ChainConfig, DeviceConfig, FadeConfig, ServerConfig, StaticConfig,
};
