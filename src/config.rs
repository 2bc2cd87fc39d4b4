use std::path::Path;

use anyhow::{ensure, Context};
use serde::Deserialize;

/// On-device configuration, read from `config.json` next to the binary.
///
/// The Wi-Fi credentials use the same file layout the provisioning tools
/// write; association itself is left to the operating system, but an empty
/// credential almost always means a half-provisioned unit, so loading
/// rejects it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub device_id: String,
    pub ssid: String,
    pub password: String,
    #[serde(default = "default_broker")]
    pub broker: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_broker() -> String {
    "202.1.1.1".to_string()
}

fn default_port() -> u16 {
    1883
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path:?}"))?;
    parse(&raw).with_context(|| format!("failed to parse config file {path:?}"))
}

fn parse(raw: &str) -> anyhow::Result<Config> {
    let config: Config = serde_json::from_str(raw)?;
    ensure!(!config.device_id.is_empty(), "device_id is empty");
    ensure!(!config.ssid.is_empty(), "ssid is empty");
    ensure!(!config.password.is_empty(), "password is empty");
    Ok(config)
}

#[cfg(test)]
mod test {
    #[test]
    fn fills_broker_and_port_defaults() {
        let config = super::parse(
            r#"{"device_id": "blue", "ssid": "lab", "password": "p@ss"}"#,
        )
        .unwrap();
        assert_eq!(config.device_id, "blue");
        assert_eq!(config.broker, "202.1.1.1");
        assert_eq!(config.port, 1883);
    }

    #[test]
    fn keeps_explicit_broker() {
        let config = super::parse(
            r#"{"device_id": "blue", "ssid": "lab", "password": "p@ss", "broker": "10.0.0.2", "port": 8883}"#,
        )
        .unwrap();
        assert_eq!(config.broker, "10.0.0.2");
        assert_eq!(config.port, 8883);
    }

    #[test]
    fn rejects_empty_credentials() {
        let err = super::parse(r#"{"device_id": "blue", "ssid": "", "password": "p@ss"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("ssid"));
    }
}
