use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 16021;
pub const DEFAULT_AUTH_PATH: &str = ".auth";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme_str = match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        };
        write!(f, "{}", scheme_str)
    }
}

/// Where the device lives and where its credentials are kept.
///
/// ```yaml
/// address: 10.0.0.129
/// port: 16021
/// scheme: http
/// auth_path: /home/me/.nanoleaf/.auth
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub scheme: Scheme,
    #[serde(default = "default_auth_path")]
    pub auth_path: PathBuf,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_auth_path() -> PathBuf {
    PathBuf::from(DEFAULT_AUTH_PATH)
}

impl DeviceConfig {
    pub fn new(address: impl Into<String>) -> Self {
        DeviceConfig {
            address: address.into(),
            port: DEFAULT_PORT,
            scheme: Scheme::default(),
            auth_path: default_auth_path(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_auth_path(mut self, auth_path: impl Into<PathBuf>) -> Self {
        self.auth_path = auth_path.into();
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse device config")
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::new("10.0.0.129");
        assert_eq!(config.base_url(), "http://10.0.0.129:16021");
        assert_eq!(config.auth_path, PathBuf::from(".auth"));
    }

    #[test]
    fn test_yaml_fills_defaults() {
        let config = DeviceConfig::from_yaml_str("address: 10.0.0.127\n").unwrap();
        assert_eq!(config, DeviceConfig::new("10.0.0.127"));
    }

    #[test]
    fn test_yaml_all_fields() {
        let config = DeviceConfig::from_yaml_str(
            "address: canvas.local\nport: 443\nscheme: https\nauth_path: /etc/nanoleaf/auth\n",
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://canvas.local:443");
        assert_eq!(config.auth_path, PathBuf::from("/etc/nanoleaf/auth"));
    }

    #[test]
    fn test_yaml_requires_address() {
        assert!(DeviceConfig::from_yaml_str("port: 16021\n").is_err());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.yaml");
        fs::write(&path, "address: 192.168.1.20\nport: 8080\n").unwrap();
        let config = DeviceConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.base_url(), "http://192.168.1.20:8080");
    }
}
