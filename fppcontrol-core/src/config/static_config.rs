//! Static configuration loaded once at startup
//!
//! This configuration is read-only after the daemon starts. Every section
//! is optional; missing sections and fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};
use crate::types::{ButtonConfig, ButtonType, ChainPolicy, PresetButton};
use crate::validation::is_valid_name;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub bind: String,
    /// Listen port
    pub port: u16,
    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["http://localhost:8080".to_string()],
        }
    }
}

/// Device (FPP) connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the device's HTTP API
    pub url: String,
    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            url: "http://fpp.local".to_string(),
            timeout_ms: 5000,
        }
    }
}

/// Fade-out preset behavior.
///
/// Triggering `fade_out_slot` schedules a follow-up after `delay_ms` that
/// stops the current sequence and triggers `follow_up_slot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub fade_out_slot: u32,
    pub follow_up_slot: u32,
    pub delay_ms: u64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_out_slot: 1,
            follow_up_slot: 3,
            delay_ms: 5000,
        }
    }
}

/// Failure handling for multi-call actions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Stop current sequence, then start the requested one
    pub start_sequence: ChainPolicy,
    /// Stop playlist, then stop current sequence
    pub stop_all: ChainPolicy,
}

/// Static configuration for the gateway.
///
/// Located at `~/.config/fppcontrol/config.toml` by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub fade: FadeConfig,

    #[serde(default)]
    pub chain: ChainConfig,

    /// Control page buttons, in display order
    #[serde(default = "default_buttons")]
    pub buttons: Vec<ButtonConfig>,

    /// Command preset tiles shown after the buttons
    #[serde(default = "default_presets")]
    pub presets: Vec<PresetButton>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            device: DeviceConfig::default(),
            fade: FadeConfig::default(),
            chain: ChainConfig::default(),
            buttons: default_buttons(),
            presets: default_presets(),
        }
    }
}

/// The eight buttons shown when no configuration file lists any.
pub fn default_buttons() -> Vec<ButtonConfig> {
    vec![
        ButtonConfig::new("fire", ButtonType::Sequence),
        ButtonConfig::new("blandet", ButtonType::Sequence),
        ButtonConfig::new("Plasma Parts", ButtonType::Sequence),
        ButtonConfig::new("bitchinparts", ButtonType::Sequence),
        ButtonConfig::new("shockwave", ButtonType::SequenceEffect),
        ButtonConfig::new("shock4", ButtonType::Effect),
        ButtonConfig::new("Another Effect", ButtonType::Effect),
        ButtonConfig::new("stop", ButtonType::Stop),
    ]
}

pub fn default_presets() -> Vec<PresetButton> {
    vec![
        PresetButton::new("Fade Out", 1),
        PresetButton::new("Fade In", 2),
        PresetButton::new("On", 3),
        PresetButton::new("Off", 4),
    ]
}

impl StaticConfig {
    /// Parse StaticConfig from TOML string.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize StaticConfig to TOML string.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check values the types alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        let url = &self.device.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GatewayError::Config(format!(
                "device.url must be an http(s) URL, got '{}'",
                url
            )));
        }

        if self.device.timeout_ms == 0 {
            return Err(GatewayError::Config(
                "device.timeout_ms must be greater than zero".to_string(),
            ));
        }

        // Stop buttons never send their name to the device
        if let Some(button) = self
            .buttons
            .iter()
            .find(|b| b.kind != ButtonType::Stop && !is_valid_name(&b.name))
        {
            return Err(GatewayError::Config(format!(
                "Button name '{}' contains unsupported characters",
                button.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_static_config() {
        let config = StaticConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.device.url, "http://fpp.local");
        assert_eq!(config.device.timeout_ms, 5000);
        assert_eq!(config.fade.delay_ms, 5000);
        assert_eq!(config.buttons.len(), 8);
        assert_eq!(config.presets.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_static_config_serialization() {
        let config = StaticConfig::default();
        let toml_str = config.to_toml().unwrap();

        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[device]"));
        assert!(toml_str.contains("[[buttons]]"));
        assert!(toml_str.contains("type = \"sequence-effect\""));
    }

    #[test]
    fn test_static_config_deserialization() {
        let toml_str = r##"
            [server]
            port = 9090

            [device]
            url = "http://192.168.1.50"

            [[buttons]]
            title = "Campfire"
            name = "fire"
            color = "#c0392b"
            type = "sequence"

            [[buttons]]
            name = "Evening"
            type = "playlist"
        "##;

        let config = StaticConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.device.url, "http://192.168.1.50");
        assert_eq!(config.device.timeout_ms, 5000);
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].label(), "Campfire");
        assert_eq!(config.buttons[1].kind, ButtonType::Playlist);
        // Presets were not listed, so defaults apply
        assert_eq!(config.presets, default_presets());
    }

    #[test]
    fn test_hex_button_color_survives_toml() {
        let toml_str = r##"
            [[buttons]]
            name = "fire"
            color = "#ff8800"
            type = "sequence"
        "##;

        let config = StaticConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.buttons[0].color.as_deref(), Some("#ff8800"));

        let reparsed = StaticConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed.buttons, config.buttons);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = StaticConfig::from_toml("").unwrap();
        assert_eq!(config.buttons, default_buttons());
        assert_eq!(config.fade.follow_up_slot, 3);
        assert_eq!(config.chain.start_sequence, ChainPolicy::BestEffort);
        assert_eq!(config.chain.stop_all, ChainPolicy::BestEffort);
    }

    #[test]
    fn test_chain_policy_from_toml() {
        let toml_str = r#"
            [chain]
            start_sequence = "fail-fast"
        "#;

        let config = StaticConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.chain.start_sequence, ChainPolicy::FailFast);
        assert_eq!(config.chain.stop_all, ChainPolicy::BestEffort);
    }

    #[test]
    fn test_unknown_button_type_rejected() {
        let toml_str = r#"
            [[buttons]]
            name = "fire"
            type = "strobe"
        "#;
        assert!(StaticConfig::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_device_url() {
        let mut config = StaticConfig::default();
        config.device.url = "fpp.local".to_string();
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = StaticConfig::default();
        config.device.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_button_name() {
        let mut config = StaticConfig::default();
        config
            .buttons
            .push(ButtonConfig::new("../secret", ButtonType::Sequence));
        assert!(config.validate().is_err());
    }
}
