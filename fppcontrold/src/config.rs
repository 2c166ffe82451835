//! Configuration loading
//!
//! The static configuration comes from a TOML file, then selected values
//! are overridden from the environment. Command-line overrides are applied
//! in `main`.

use fppcontrol_core::{GatewayError, Result, StaticConfig};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Path of the configuration file
pub(crate) const ENV_CONFIG_PATH: &str = "FPPCONTROL_CONFIG";
/// Listen port
pub(crate) const ENV_SERVER_PORT: &str = "FPPCONTROL_SERVER_PORT";
/// Device base URL
pub(crate) const ENV_DEVICE_URL: &str = "FPP_URL";

/// Load the configuration file.
///
/// A missing file yields the built-in defaults. A file that exists but
/// does not parse is an error.
pub(crate) async fn load_config(path: &Path) -> Result<StaticConfig> {
    debug!("Loading configuration from: {}", path.display());

    if !path.exists() {
        info!(
            "Configuration file not found: {}. Using defaults.",
            path.display()
        );
        return Ok(StaticConfig::default());
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

    let config = StaticConfig::from_toml(&contents)?;
    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

/// Apply environment overrides, reading variables through `lookup`.
pub(crate) fn apply_env_overrides<F>(config: &mut StaticConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(ENV_SERVER_PORT) {
        config.server.port = port.trim().parse().map_err(|_| {
            GatewayError::Config(format!("{} is not a valid port: '{}'", ENV_SERVER_PORT, port))
        })?;
        debug!("Port overridden from {}: {}", ENV_SERVER_PORT, config.server.port);
    }

    if let Some(url) = lookup(ENV_DEVICE_URL) {
        debug!("Device URL overridden from {}: {}", ENV_DEVICE_URL, url);
        config.device.url = url;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).await.unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.buttons.len(), 8);
        // Nothing is written back
        assert!(!dir.path().join("absent.toml").exists());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[device]
url = "http://10.0.0.5"
timeout_ms = 2500

[[buttons]]
name = "Evening"
type = "playlist"
"#,
        )
        .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.device.url, "http://10.0.0.5");
        assert_eq!(config.device.timeout_ms, 2500);
        assert_eq!(config.buttons.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[device\nurl = ").unwrap();

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StaticConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[(ENV_SERVER_PORT, "3000"), (ENV_DEVICE_URL, "http://fpp.lan")]),
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.device.url, "http://fpp.lan");
    }

    #[test]
    fn test_env_overrides_absent() {
        let mut config = StaticConfig::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.device.url, "http://fpp.local");
    }

    #[test]
    fn test_env_invalid_port() {
        let mut config = StaticConfig::default();
        let result = apply_env_overrides(&mut config, env(&[(ENV_SERVER_PORT, "eighty")]));

        assert!(result.is_err());
    }
}
